//! Structural mapping from Talend API Tester exports to Postman documents
//!
//! The [`DocumentMapper`] projects source entities onto the target document
//! types in [`crate::types`]. All reads go through the path accessor, so a
//! missing or mistyped field degrades to an empty value with a logged warning
//! instead of failing the entity.
//!
//! Copyright (c) 2025 Postbridge Team
//! Licensed under the Apache-2.0 license

mod collection;
pub mod config;
mod environment;
pub mod id;
pub mod placeholder;

pub use config::MapperConfig;
pub use id::IdGenerator;
pub use placeholder::PlaceholderRewriter;

use crate::Result;
use chrono::{DateTime, Utc};
use std::borrow::Cow;

/// Format of `_postman_exported_at`
pub const EXPORTED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Maps source entities to target documents
///
/// Holds the immutable configuration for one run together with the compiled
/// placeholder pattern, the identifier source, and the run timestamp.
#[derive(Debug)]
pub struct DocumentMapper {
    config: MapperConfig,
    placeholders: PlaceholderRewriter,
    ids: IdGenerator,
    exported_at: DateTime<Utc>,
}

impl DocumentMapper {
    /// Create a mapper stamped with the current time
    pub fn new(config: MapperConfig) -> Result<Self> {
        let placeholders = PlaceholderRewriter::new(
            &config.placeholder_pattern,
            config.placeholder_replacement.as_str(),
        )?;

        Ok(Self {
            config,
            placeholders,
            ids: IdGenerator::new(),
            exported_at: Utc::now(),
        })
    }

    /// Override the run timestamp written into environments
    pub fn with_exported_at(mut self, exported_at: DateTime<Utc>) -> Self {
        self.exported_at = exported_at;
        self
    }

    pub fn config(&self) -> &MapperConfig {
        &self.config
    }

    pub fn exported_at(&self) -> DateTime<Utc> {
        self.exported_at
    }

    /// Generate a fresh document or record identifier
    pub fn fresh_id(&self) -> String {
        self.ids.next_id()
    }

    /// Convert `${NAME}` references in serialized output to `{{NAME}}`
    pub fn rewrite_placeholders<'t>(&self, serialized: &'t str) -> Cow<'t, str> {
        self.placeholders.rewrite(serialized)
    }
}
