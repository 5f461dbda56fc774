//! Mapper configuration
//!
//! Built once at start-up and handed to [`DocumentMapper::new`](super::DocumentMapper::new).
//! Every field has a default matching what Postman 7 expects, so an empty
//! configuration file is valid.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SCHEMA_URL: &str =
    "https://schema.getpostman.com/json/collection/v2.1.0/collection.json";
pub const DEFAULT_EXPORTED_USING: &str = "Postman/7.36.1";
pub const DEFAULT_VARIABLE_SCOPE: &str = "environment";
/// Upper-case names, digits and underscores; an empty `${}` becomes `{{}}`.
pub const DEFAULT_PLACEHOLDER_PATTERN: &str = r"\$\{([A-Z0-9_]*)\}";
pub const DEFAULT_PLACEHOLDER_REPLACEMENT: &str = "{{$1}}";

/// Settings that shape the generated documents
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MapperConfig {
    /// Value of `info.schema` in collections
    pub schema_url: String,

    /// Value of `_postman_exported_using` in environments
    pub exported_using: String,

    /// Value of `_postman_variable_scope` in environments
    pub variable_scope: String,

    /// Regex matching an environment reference in serialized output
    pub placeholder_pattern: String,

    /// Replacement template; `$1` is the captured variable name
    pub placeholder_replacement: String,
}

impl Default for MapperConfig {
    fn default() -> Self {
        Self {
            schema_url: DEFAULT_SCHEMA_URL.to_string(),
            exported_using: DEFAULT_EXPORTED_USING.to_string(),
            variable_scope: DEFAULT_VARIABLE_SCOPE.to_string(),
            placeholder_pattern: DEFAULT_PLACEHOLDER_PATTERN.to_string(),
            placeholder_replacement: DEFAULT_PLACEHOLDER_REPLACEMENT.to_string(),
        }
    }
}
