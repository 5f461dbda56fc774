//! Input acquisition
//!
//! Piped standard input takes priority. A pipe that delivers nothing but
//! whitespace counts as absent, so `--input` still works when the process is
//! started with an empty or closed stdin (as under most job runners).

use crate::error::{Error, Result};
use is_terminal::IsTerminal;
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Where the export was read from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

impl fmt::Display for InputSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputSource::Stdin => write!(f, "<stdin>"),
            InputSource::File(path) => write!(f, "{}", path.display()),
        }
    }
}

/// The raw export text and its origin
#[derive(Debug, Clone)]
pub struct Input {
    pub source: InputSource,
    pub contents: String,
}

/// Read the export from stdin when it is piped, otherwise from `path`
pub fn read_input(path: Option<&Path>) -> Result<Input> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        acquire(None::<io::Empty>, path)
    } else {
        acquire(Some(stdin.lock()), path)
    }
}

/// Choose between a piped reader and an input file
pub fn acquire<R: Read>(piped: Option<R>, path: Option<&Path>) -> Result<Input> {
    if let Some(mut reader) = piped {
        let mut contents = String::new();
        reader.read_to_string(&mut contents)?;
        if !contents.trim().is_empty() {
            debug!(bytes = contents.len(), "read export from stdin");
            return Ok(Input {
                source: InputSource::Stdin,
                contents,
            });
        }
        debug!("stdin is piped but empty, falling back to --input");
    }

    let path = path.ok_or(Error::EmptyInput)?;
    let contents = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => Error::FileNotFound {
            path: path.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    debug!(path = %path.display(), bytes = contents.len(), "read export from file");

    Ok(Input {
        source: InputSource::File(path.to_path_buf()),
        contents,
    })
}
