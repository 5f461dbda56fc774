//! Environment reference rewriting
//!
//! Talend writes environment references as `${NAME}`, Postman as `{{NAME}}`.
//! The rewrite runs over the serialized text of a finished document so that
//! references are converted wherever they occur: URL parts, headers, bodies,
//! or variable values.

use crate::{Error, Result};
use regex::Regex;
use std::borrow::Cow;

/// Compiled placeholder pattern plus its replacement template
#[derive(Debug, Clone)]
pub struct PlaceholderRewriter {
    pattern: Regex,
    replacement: String,
}

impl PlaceholderRewriter {
    /// Compile `pattern`; fails with a configuration error if it is not a valid
    /// regex or has no capture group for the variable name
    pub fn new(pattern: &str, replacement: impl Into<String>) -> Result<Self> {
        let pattern = Regex::new(pattern)?;
        if pattern.captures_len() < 2 {
            return Err(Error::configuration(format!(
                "placeholder pattern '{}' must capture the variable name",
                pattern.as_str()
            )));
        }
        Ok(Self {
            pattern,
            replacement: replacement.into(),
        })
    }

    /// Rewrite every match in `text`. Text without a match is returned borrowed.
    pub fn rewrite<'t>(&self, text: &'t str) -> Cow<'t, str> {
        self.pattern.replace_all(text, self.replacement.as_str())
    }
}
