//! Error types for the Postbridge core library
//!
//! Only failures that abort a run are represented here. Problems found while
//! walking an individual entity (missing fields, unexpected value types) are
//! logged and defaulted in place by the accessor and never surface as `Error`.

use thiserror::Error;

/// Main error type for Postbridge operations
#[derive(Error, Debug)]
pub enum Error {
    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Invalid mapper configuration
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Wrap a serde_json error with a short description of what was being done
    pub fn json(message: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Json {
            message: message.into(),
            source,
        }
    }

    /// Wrap an IO error with a short description of what was being done
    pub fn io(message: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            message: message.into(),
            source,
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            source: None,
        }
    }
}

impl From<regex::Error> for Error {
    fn from(err: regex::Error) -> Self {
        Self::Configuration {
            message: format!("invalid pattern: {}", err),
            source: Some(anyhow::Error::new(err)),
        }
    }
}
