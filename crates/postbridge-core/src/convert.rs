//! Batch conversion of a whole export
//!
//! Collections are emitted first, then environments, each in the order they
//! appear in the input. Every document is serialized with two-space
//! indentation and placeholder-rewritten before it is handed on.

use crate::accessor::ValueExt;
use crate::mapper::DocumentMapper;
use crate::{Error, Result};
use serde::Serialize;
use serde_json::Value;
use std::fmt;
use tracing::{debug, info};

/// Which target shape a document has
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentKind {
    Collection,
    Environment,
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Collection => write!(f, "collection"),
            DocumentKind::Environment => write!(f, "environment"),
        }
    }
}

/// A finished document ready to be written
#[derive(Debug, Clone, PartialEq)]
pub struct OutputDocument {
    pub kind: DocumentKind,
    /// Name of the source entity
    pub name: String,
    /// Pretty-printed, placeholder-rewritten JSON
    pub contents: String,
}

impl OutputDocument {
    /// `<prefix>_collection_<name>.json` or `<prefix>_environment_<name>.json`
    pub fn file_name(&self, prefix: &str) -> String {
        format!("{}_{}_{}.json", prefix, self.kind, self.name)
    }
}

/// Drives the mapper over a parsed export
#[derive(Debug)]
pub struct Converter {
    mapper: DocumentMapper,
}

impl Converter {
    pub fn new(mapper: DocumentMapper) -> Self {
        Self { mapper }
    }

    pub fn mapper(&self) -> &DocumentMapper {
        &self.mapper
    }

    /// Parse `input` and convert it; a parse failure aborts the run
    pub fn convert_str(&self, input: &str) -> Result<Vec<OutputDocument>> {
        let document: Value = serde_json::from_str(input)
            .map_err(|e| Error::json("failed to parse input document", e))?;
        self.convert(&document)
    }

    /// Convert every entity of `document` and collect the results
    pub fn convert(&self, document: &Value) -> Result<Vec<OutputDocument>> {
        let mut outputs = Vec::new();
        self.convert_each(document, |output| {
            outputs.push(output);
            Ok(())
        })?;
        Ok(outputs)
    }

    /// Convert every entity of `document`, handing each finished document to
    /// `sink` as soon as it is ready. The first sink error stops the run.
    ///
    /// Returns the number of documents produced.
    pub fn convert_each<F>(&self, document: &Value, mut sink: F) -> Result<usize>
    where
        F: FnMut(OutputDocument) -> Result<()>,
    {
        let mut produced = 0;

        for entity in document.sequence_at("entities") {
            let collection = self.mapper.map_collection(entity);
            let name = collection.info.name.clone();
            sink(self.render(DocumentKind::Collection, name, &collection)?)?;
            produced += 1;
        }

        for entity in document.sequence_at("environments") {
            let environment = self.mapper.map_environment(entity);
            let name = environment.name.clone();
            sink(self.render(DocumentKind::Environment, name, &environment)?)?;
            produced += 1;
        }

        info!(documents = produced, "conversion finished");
        Ok(produced)
    }

    fn render<T: Serialize>(
        &self,
        kind: DocumentKind,
        name: String,
        document: &T,
    ) -> Result<OutputDocument> {
        let pretty = serde_json::to_string_pretty(document)
            .map_err(|e| Error::json(format!("failed to serialize {} '{}'", kind, name), e))?;
        let contents = self.mapper.rewrite_placeholders(&pretty).into_owned();

        debug!(%kind, name = %name, bytes = contents.len(), "rendered document");

        Ok(OutputDocument {
            kind,
            name,
            contents,
        })
    }
}
