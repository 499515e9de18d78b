//! Writing schema documents

use std::io::Write;
use std::path::{Path, PathBuf};

use crate::document::SchemaDocument;
use crate::error::Result;

/// Destination for a finished schema document
pub trait SchemaWriter {
    fn write(&self, doc: &SchemaDocument) -> Result<()>;
}

/// Writes the document to a file, creating parent directories
#[derive(Debug, Clone)]
pub struct FileWriter {
    path: PathBuf,
}

impl FileWriter {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SchemaWriter for FileWriter {
    fn write(&self, doc: &SchemaDocument) -> Result<()> {
        write_schema(doc, &self.path)
    }
}

/// Prints the document to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

impl SchemaWriter for StdoutWriter {
    fn write(&self, doc: &SchemaDocument) -> Result<()> {
        let json = doc.to_json_pretty()?;
        let mut stdout = std::io::stdout().lock();
        writeln!(stdout, "{}", json)?;
        stdout.flush()?;
        Ok(())
    }
}

/// Write a schema document as pretty JSON with a trailing newline
pub fn write_schema(doc: &SchemaDocument, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }

    let mut json = doc.to_json_pretty()?;
    json.push('\n');
    std::fs::write(path, json)?;

    tracing::debug!(path = %path.display(), "schema written");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::assemble;
    use crate::loader::parse_values;
    use crate::value::Value;
    use tempfile::TempDir;

    #[test]
    fn test_file_writer_creates_parents() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("out").join("values.schema.json");
        let doc = assemble(&Value::Mapping(parse_values("a: 1", "v").unwrap())).unwrap();

        FileWriter::new(&path).write(&doc).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.ends_with("}\n"));
        let parsed: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed["properties"]["a"]["default"], 1);
    }

    #[test]
    fn test_overwrites_existing_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("values.schema.json");
        std::fs::write(&path, "stale").unwrap();
        let doc = assemble(&Value::Mapping(parse_values("b: x", "v").unwrap())).unwrap();

        write_schema(&doc, &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert!(written.starts_with('{'));
        assert_eq!(written, format!("{}\n", doc.to_json_pretty().unwrap()));
    }
}
