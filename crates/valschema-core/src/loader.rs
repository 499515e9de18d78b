//! Loading values documents
//!
//! [`FsLoader`] accepts three kinds of paths:
//! - a YAML file
//! - a chart directory (its `values.yaml` is loaded)
//! - a packaged chart (`.tgz` / `.tar.gz`), read without unpacking

use flate2::read::GzDecoder;
use std::fs::File;
use std::io::{ErrorKind, Read};
use std::path::Path;
use tar::Archive;

use crate::error::{CoreError, Result};
use crate::value::{Mapping, Value};

/// File name of a chart's default values
pub const VALUES_FILE: &str = "values.yaml";

/// Supplies decoded values documents
pub trait ValuesLoader {
    fn load(&self, path: &Path) -> Result<Mapping>;
}

/// Loads values from the local filesystem
#[derive(Debug, Default, Clone, Copy)]
pub struct FsLoader;

impl ValuesLoader for FsLoader {
    fn load(&self, path: &Path) -> Result<Mapping> {
        let metadata = std::fs::metadata(path).map_err(|e| not_found_or_io(e, path))?;

        if metadata.is_dir() {
            tracing::debug!(chart = %path.display(), "loading values from chart directory");
            return self.load(&path.join(VALUES_FILE));
        }

        if is_chart_archive(path) {
            tracing::debug!(archive = %path.display(), "loading values from chart archive");
            let content = read_values_from_archive(path)?;
            return parse_values(&content, &path.display().to_string());
        }

        tracing::debug!(path = %path.display(), "loading values file");
        let content = std::fs::read_to_string(path).map_err(|e| not_found_or_io(e, path))?;
        parse_values(&content, &path.display().to_string())
    }
}

/// Decode YAML text into a mapping
///
/// A document that is empty, only comments, or a bare `null` is an empty
/// mapping. `origin` is used in error messages.
pub fn parse_values(yaml: &str, origin: &str) -> Result<Mapping> {
    if is_blank_document(yaml) {
        return Ok(Mapping::new());
    }

    let raw: serde_yaml::Value = serde_yaml::from_str(yaml).map_err(|source| CoreError::Parse {
        path: origin.to_string(),
        source,
    })?;

    match Value::from_yaml(raw, origin)? {
        Value::Mapping(mapping) => Ok(mapping),
        Value::Null => Ok(Mapping::new()),
        other => Err(CoreError::NotAMapping {
            path: origin.to_string(),
            found: other.kind(),
        }),
    }
}

fn is_blank_document(yaml: &str) -> bool {
    yaml.lines().all(|line| {
        let line = line.trim();
        line.is_empty() || line.starts_with('#') || line == "---"
    })
}

fn not_found_or_io(err: std::io::Error, path: &Path) -> CoreError {
    if err.kind() == ErrorKind::NotFound {
        CoreError::NotFound {
            path: path.display().to_string(),
        }
    } else {
        CoreError::Io(err)
    }
}

/// Whether a path names a packaged chart
pub fn is_chart_archive(path: &Path) -> bool {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .unwrap_or_default();
    name.ends_with(".tgz") || name.ends_with(".tar.gz")
}

/// Read the chart's `values.yaml` out of a packaged chart
///
/// Accepts `values.yaml` at the archive root or one directory deep
/// (`<chart>/values.yaml`). Subchart values deeper in the tree are ignored.
pub fn read_values_from_archive(archive_path: &Path) -> Result<String> {
    let file = File::open(archive_path).map_err(|e| not_found_or_io(e, archive_path))?;
    let decoder = GzDecoder::new(file);
    let mut archive = Archive::new(decoder);

    for entry in archive.entries()? {
        let mut entry = entry?;
        if entry.header().entry_type().is_dir() {
            continue;
        }

        let entry_path = entry.path()?.into_owned();
        let components: Vec<_> = entry_path.components().collect();
        let is_values = entry_path.file_name().is_some_and(|n| n == VALUES_FILE);

        if is_values && components.len() <= 2 {
            let mut content = String::new();
            entry.read_to_string(&mut content).map_err(|e| CoreError::Archive {
                message: format!(
                    "Failed to read {} from {}: {}",
                    entry_path.display(),
                    archive_path.display(),
                    e
                ),
            })?;
            return Ok(content);
        }
    }

    Err(CoreError::Archive {
        message: format!("No {} found in {}", VALUES_FILE, archive_path.display()),
    })
}
