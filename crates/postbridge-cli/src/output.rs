//! Output file writing and terminal reporting
//!
//! Generated documents go to files derived from the output prefix; the
//! terminal only receives short status lines, which `--quiet` suppresses.

use crate::error::Result;
use colored::Colorize;
use postbridge_core::OutputDocument;
use std::io::{self, Write};
use std::path::PathBuf;

/// Write `document` next to `prefix` and return the path written
pub fn write_document(prefix: &str, document: &OutputDocument) -> postbridge_core::Result<PathBuf> {
    let path = PathBuf::from(document.file_name(prefix));
    std::fs::write(&path, document.contents.as_bytes()).map_err(|e| {
        postbridge_core::Error::io(format!("failed to write {}", path.display()), e)
    })?;
    Ok(path)
}

/// Writer for status lines
pub struct OutputWriter<W: Write = io::Stdout> {
    use_color: bool,
    quiet: bool,
    writer: W,
}

impl OutputWriter {
    /// Create a new output writer on stdout
    pub fn new(use_color: bool, quiet: bool) -> Self {
        Self::with_writer(use_color, quiet, io::stdout())
    }
}

impl<W: Write> OutputWriter<W> {
    /// Create an output writer with a custom writer
    pub fn with_writer(use_color: bool, quiet: bool, writer: W) -> Self {
        Self {
            use_color,
            quiet,
            writer,
        }
    }

    /// Write an informational line
    pub fn info(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        writeln!(self.writer, "{}", message)?;
        Ok(())
    }

    /// Write a success line
    pub fn success(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            writeln!(self.writer, "{}", message.green())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Write a warning line
    pub fn warning(&mut self, message: &str) -> Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.use_color {
            writeln!(self.writer, "{}", message.yellow())?;
        } else {
            writeln!(self.writer, "{}", message)?;
        }
        Ok(())
    }

    /// Consume the writer and return the underlying sink
    #[allow(dead_code)]
    pub fn into_inner(self) -> W {
        self.writer
    }
}
