//! Conversion command handler

use crate::config::Config;
use crate::error::Result;
use crate::input::Input;
use crate::logging::timing::Timer;
use crate::output::{self, OutputWriter};
use postbridge_core::{Converter, DocumentMapper, Error as CoreError};
use std::io::Write;
use std::path::PathBuf;
use tracing::{info, instrument};

/// Convert an acquired export and write one file per document
#[instrument(skip(input, config, output), fields(source = %input.source))]
pub fn handle_convert<W: Write>(
    input: Input,
    prefix: &str,
    config: &Config,
    output: &mut OutputWriter<W>,
) -> Result<Vec<PathBuf>> {
    info!(source = %input.source, bytes = input.contents.len(), "Loaded export");

    let document: serde_json::Value = {
        let _timer = Timer::new("parse_input");
        serde_json::from_str(&input.contents).map_err(|e| {
            CoreError::json(format!("failed to parse export from {}", input.source), e)
        })?
    };

    let converter = Converter::new(DocumentMapper::new(config.mapper.clone())?);

    let mut written = Vec::new();
    {
        let _timer = Timer::new("convert");
        converter.convert_each(&document, |doc| {
            let path = output::write_document(prefix, &doc)?;
            info!(kind = %doc.kind, name = %doc.name, path = %path.display(), "Wrote document");
            written.push(path);
            Ok::<(), CoreError>(())
        })?;
    }

    for path in &written {
        output.info(&format!("wrote {}", path.display()))?;
    }
    if written.is_empty() {
        output.warning("No collections or environments found in the export")?;
    } else {
        output.success(&format!("Converted {} document(s)", written.len()))?;
    }

    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::InputSource;

    fn export(content: &str) -> Input {
        Input {
            source: InputSource::Stdin,
            contents: content.to_string(),
        }
    }

    #[test]
    fn test_convert_writes_files() {
        let input = export(
            r#"{
                "entities": [{"entity": {"name": "Demo"}, "children": []}],
                "environments": [{"name": "Local", "variables": {"a": {"name": "HOST", "value": "localhost"}}}]
            }"#,
        );
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("pm");
        let mut output = OutputWriter::with_writer(false, false, Vec::new());

        let written = handle_convert(
            input,
            prefix.to_str().unwrap(),
            &Config::default(),
            &mut output,
        )
        .unwrap();

        assert_eq!(
            written,
            vec![
                dir.path().join("pm_collection_Demo.json"),
                dir.path().join("pm_environment_Local.json"),
            ]
        );
        assert!(written.iter().all(|p| p.exists()));

        let text = String::from_utf8(output.into_inner()).unwrap();
        assert!(text.contains("Converted 2 document(s)"));
    }

    #[test]
    fn test_invalid_json_is_fatal() {
        let input = export("{\"entities\": ");
        let dir = tempfile::tempdir().unwrap();
        let prefix = dir.path().join("pm");
        let mut output = OutputWriter::with_writer(false, true, Vec::new());

        let err = handle_convert(
            input,
            prefix.to_str().unwrap(),
            &Config::default(),
            &mut output,
        )
        .unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }
}
