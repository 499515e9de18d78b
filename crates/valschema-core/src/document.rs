//! Schema document assembly

use serde::Serialize;

use crate::error::{CoreError, Result};
use crate::inference::Inferencer;
use crate::policy::{ComponentPolicy, RequiredPolicy};
use crate::schema::SchemaNode;
use crate::value::Value;

/// `$schema` URI written at the top of every document
pub const DEFAULT_SCHEMA_URI: &str = "http://json-schema.org/schema#";

/// A complete schema document, ready to be written
///
/// The root node's own `default` is dropped; nested objects keep theirs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaDocument {
    #[serde(rename = "$schema")]
    pub schema_uri: String,

    #[serde(flatten)]
    pub root: SchemaNode,
}

impl SchemaDocument {
    /// Serialize as pretty-printed JSON (two-space indent, no trailing newline)
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Required names of the root object
    pub fn required(&self) -> &[String] {
        self.root.required_names()
    }
}

/// Infer and wrap a merged values document with the default policy
pub fn assemble(root: &Value) -> Result<SchemaDocument> {
    assemble_with(root, &Inferencer::new(ComponentPolicy), DEFAULT_SCHEMA_URI)
}

/// Infer and wrap a merged values document
///
/// Fails with [`CoreError::InvalidRoot`] unless `root` is a mapping.
pub fn assemble_with<P: RequiredPolicy>(
    root: &Value,
    inferencer: &Inferencer<P>,
    schema_uri: &str,
) -> Result<SchemaDocument> {
    let mapping = root.as_mapping().ok_or(CoreError::InvalidRoot { found: root.kind() })?;

    let mut node = inferencer.infer_mapping(mapping);
    node.default = None;

    Ok(SchemaDocument {
        schema_uri: schema_uri.to_string(),
        root: node,
    })
}
