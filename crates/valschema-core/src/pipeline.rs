//! Load, merge, infer, assemble
//!
//! [`Generator`] wires a [`ValuesLoader`] and a [`RequiredPolicy`] into the
//! full pipeline. Collaborators are passed in explicitly; nothing here keeps
//! global state.

use std::path::{Path, PathBuf};

use crate::document::{DEFAULT_SCHEMA_URI, SchemaDocument, assemble_with};
use crate::error::Result;
use crate::inference::Inferencer;
use crate::loader::{FsLoader, ValuesLoader};
use crate::merge::merge_all;
use crate::policy::{ComponentPolicy, RequiredPolicy};
use crate::value::{Mapping, Value};

/// Schema generation pipeline
#[derive(Debug, Clone)]
pub struct Generator<L, P> {
    loader: L,
    inferencer: Inferencer<P>,
    schema_uri: String,
}

impl Default for Generator<FsLoader, ComponentPolicy> {
    fn default() -> Self {
        Self::new(FsLoader, ComponentPolicy)
    }
}

impl<L: ValuesLoader, P: RequiredPolicy> Generator<L, P> {
    pub fn new(loader: L, policy: P) -> Self {
        Self {
            loader,
            inferencer: Inferencer::new(policy),
            schema_uri: DEFAULT_SCHEMA_URI.to_string(),
        }
    }

    /// Override the `$schema` URI
    pub fn with_schema_uri(mut self, uri: impl Into<String>) -> Self {
        self.schema_uri = uri.into();
        self
    }

    pub fn schema_uri(&self) -> &str {
        &self.schema_uri
    }

    /// Load the base values and merge each overrides file on top, in order
    pub fn merged_values(&self, values: &Path, overrides: &[PathBuf]) -> Result<Mapping> {
        load_merged(&self.loader, values, overrides)
    }

    /// Run the whole pipeline for files on disk
    pub fn generate(&self, values: &Path, overrides: &[PathBuf]) -> Result<SchemaDocument> {
        let merged = self.merged_values(values, overrides)?;
        self.generate_from_mapping(merged)
    }

    /// Run inference and assembly on already merged values
    pub fn generate_from_mapping(&self, merged: Mapping) -> Result<SchemaDocument> {
        let doc = assemble_with(&Value::Mapping(merged), &self.inferencer, &self.schema_uri)?;
        tracing::debug!(
            properties = doc.root.properties.as_ref().map_or(0, |p| p.len()),
            required = doc.required().len(),
            "schema inferred"
        );
        Ok(doc)
    }
}

/// Load `values` and each overrides file through `loader`, merging left to right
pub fn load_merged<L: ValuesLoader>(
    loader: &L,
    values: &Path,
    overrides: &[PathBuf],
) -> Result<Mapping> {
    let base = loader.load(values)?;
    let layers = overrides
        .iter()
        .map(|path| loader.load(path))
        .collect::<Result<Vec<_>>>()?;

    tracing::debug!(
        values = %values.display(),
        overrides = layers.len(),
        "merging values"
    );

    Ok(merge_all(&base, &layers))
}

/// Merge decoded overrides onto `base` and build the schema document
pub fn generate_from_values(base: &Mapping, overrides: &[Mapping]) -> Result<SchemaDocument> {
    Generator::<FsLoader, ComponentPolicy>::default()
        .generate_from_mapping(merge_all(base, overrides))
}
