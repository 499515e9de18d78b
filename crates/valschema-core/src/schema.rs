//! In-memory JSON Schema fragments

use indexmap::IndexMap;
use serde::Serialize;

use crate::value::Value;

/// JSON Schema primitive type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    Null,
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
}

impl SchemaType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Boolean => "boolean",
            Self::Integer => "integer",
            Self::Number => "number",
            Self::String => "string",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl std::fmt::Display for SchemaType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One fragment of the generated schema
///
/// Serialized field order is `type`, `default`, `properties`, `required`,
/// `items`. Absent fields are omitted from the output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaNode {
    #[serde(rename = "type")]
    pub schema_type: SchemaType,

    /// Value found at this position in the merged document
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default: Option<Value>,

    /// Object properties, in document order
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Required property names (objects only)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Item schema, absent for empty arrays
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,
}

impl SchemaNode {
    /// A `null` node; nulls carry no default
    pub fn null() -> Self {
        Self::bare(SchemaType::Null)
    }

    /// A scalar node with its default value
    pub fn scalar(schema_type: SchemaType, default: Value) -> Self {
        Self {
            default: Some(default),
            ..Self::bare(schema_type)
        }
    }

    pub fn array(default: Vec<Value>, items: Option<SchemaNode>) -> Self {
        Self {
            default: Some(Value::Sequence(default)),
            items: items.map(Box::new),
            ..Self::bare(SchemaType::Array)
        }
    }

    pub fn object(
        default: Value,
        properties: IndexMap<String, SchemaNode>,
        required: Vec<String>,
    ) -> Self {
        Self {
            default: Some(default),
            properties: Some(properties),
            required: Some(required),
            ..Self::bare(SchemaType::Object)
        }
    }

    fn bare(schema_type: SchemaType) -> Self {
        Self {
            schema_type,
            default: None,
            properties: None,
            required: None,
            items: None,
        }
    }

    /// Look up a direct child property
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    /// Required names, empty for non-object nodes
    pub fn required_names(&self) -> &[String] {
        self.required.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_null_node_has_no_default() {
        let json = serde_json::to_string(&SchemaNode::null()).unwrap();
        assert_eq!(json, r#"{"type":"null"}"#);
    }

    #[test]
    fn test_field_order() {
        let node = SchemaNode::object(
            Value::Mapping(Default::default()),
            IndexMap::new(),
            Vec::new(),
        );
        let json = serde_json::to_string(&node).unwrap();
        assert_eq!(
            json,
            r#"{"type":"object","default":{},"properties":{},"required":[]}"#
        );
    }

    #[test]
    fn test_empty_array_omits_items() {
        let json = serde_json::to_string(&SchemaNode::array(Vec::new(), None)).unwrap();
        assert_eq!(json, r#"{"type":"array","default":[]}"#);
    }

    #[test]
    fn test_type_names() {
        assert_eq!(SchemaType::Number.to_string(), "number");
        assert_eq!(
            serde_json::to_string(&SchemaType::Boolean).unwrap(),
            r#""boolean""#
        );
    }
}
