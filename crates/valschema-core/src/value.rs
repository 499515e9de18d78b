//! Decoded values model
//!
//! A values document is decoded once into a closed [`Value`] tree. The
//! integer/float distinction is fixed here, at decode time, from the YAML
//! literal itself; nothing downstream re-derives it from the numeric value.

use indexmap::IndexMap;
use serde::Serialize;
use serde_yaml::Value as YamlValue;

use crate::error::{CoreError, Result};

/// Mapping of string keys to values, preserving document order
pub type Mapping = IndexMap<String, Value>;

/// A decoded YAML value
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Sequence(Vec<Value>),
    Mapping(Mapping),
}

impl Value {
    /// Decode a `serde_yaml` value
    ///
    /// `origin` names the document for error messages (usually a file path).
    pub fn from_yaml(value: YamlValue, origin: &str) -> Result<Self> {
        Ok(match value {
            YamlValue::Null => Value::Null,
            YamlValue::Bool(b) => Value::Bool(b),
            YamlValue::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int(i)
                } else if let Some(u) = n.as_u64() {
                    tracing::warn!(
                        value = u,
                        origin,
                        "integer exceeds i64 range, decoding as float"
                    );
                    Value::Float(u as f64)
                } else {
                    match n.as_f64() {
                        Some(f) if f.is_finite() => Value::Float(f),
                        _ => {
                            return Err(CoreError::NonFiniteNumber {
                                path: origin.to_string(),
                                value: n.to_string(),
                            });
                        }
                    }
                }
            }
            YamlValue::String(s) => Value::String(s),
            YamlValue::Sequence(seq) => Value::Sequence(
                seq.into_iter()
                    .map(|item| Value::from_yaml(item, origin))
                    .collect::<Result<Vec<_>>>()?,
            ),
            YamlValue::Mapping(map) => {
                let mut mapping = Mapping::with_capacity(map.len());
                for (key, child) in map {
                    let key = mapping_key(key, origin)?;
                    let child = Value::from_yaml(child, origin)?;
                    if mapping.insert(key.clone(), child).is_some() {
                        tracing::warn!(
                            key = %key,
                            origin,
                            "mapping keys collide after conversion to strings, keeping the last one"
                        );
                    }
                }
                Value::Mapping(mapping)
            }
            YamlValue::Tagged(tagged) => Value::from_yaml(tagged.value, origin)?,
        })
    }

    /// Short name of the value's kind, used in error messages
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "a boolean",
            Value::Int(_) => "an integer",
            Value::Float(_) => "a float",
            Value::String(_) => "a string",
            Value::Sequence(_) => "a sequence",
            Value::Mapping(_) => "a mapping",
        }
    }

    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Mapping(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

impl From<Mapping> for Value {
    fn from(mapping: Mapping) -> Self {
        Value::Mapping(mapping)
    }
}

/// Convert a YAML mapping key into a string key
///
/// Scalar keys are rendered as their YAML text (`1`, `true`, `null`).
fn mapping_key(key: YamlValue, origin: &str) -> Result<String> {
    match key {
        YamlValue::String(s) => Ok(s),
        YamlValue::Bool(b) => Ok(b.to_string()),
        YamlValue::Number(n) => Ok(n.to_string()),
        YamlValue::Null => Ok("null".to_string()),
        YamlValue::Tagged(tagged) => mapping_key(tagged.value, origin),
        other => Err(CoreError::InvalidKey {
            path: origin.to_string(),
            key: serde_yaml::to_string(&other)
                .map(|s| s.trim_end().replace('\n', " "))
                .unwrap_or_else(|_| "<unprintable>".to_string()),
        }),
    }
}
