//! Schema inference from merged values
//!
//! Every value kind maps to exactly one schema type:
//!
//! | Value      | Schema type | Notes                                   |
//! |------------|-------------|-----------------------------------------|
//! | `Null`     | `null`      | no default                              |
//! | `Bool`     | `boolean`   |                                         |
//! | `Int`      | `integer`   |                                         |
//! | `Float`    | `number`    |                                         |
//! | `String`   | `string`    |                                         |
//! | `Sequence` | `array`     | `items` from the first element only     |
//! | `Mapping`  | `object`    | `required` chosen by a [`RequiredPolicy`] |
//!
//! Arrays are not unioned across elements: `[1, "a"]` yields
//! `items: {type: integer}`.

use indexmap::IndexMap;

use crate::policy::{ComponentPolicy, RequiredPolicy};
use crate::schema::{SchemaNode, SchemaType};
use crate::value::{Mapping, Value};

/// Infers schema nodes, delegating `required` lists to a policy
#[derive(Debug, Clone)]
pub struct Inferencer<P> {
    policy: P,
}

impl Default for Inferencer<ComponentPolicy> {
    fn default() -> Self {
        Self::new(ComponentPolicy)
    }
}

impl<P: RequiredPolicy> Inferencer<P> {
    pub fn new(policy: P) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// Infer the schema node for a value
    pub fn infer(&self, value: &Value) -> SchemaNode {
        match value {
            Value::Null => SchemaNode::null(),
            Value::Bool(_) => SchemaNode::scalar(SchemaType::Boolean, value.clone()),
            Value::Int(_) => SchemaNode::scalar(SchemaType::Integer, value.clone()),
            Value::Float(_) => SchemaNode::scalar(SchemaType::Number, value.clone()),
            Value::String(_) => SchemaNode::scalar(SchemaType::String, value.clone()),
            Value::Sequence(items) => self.infer_sequence(items),
            Value::Mapping(entries) => self.infer_mapping(entries),
        }
    }

    fn infer_sequence(&self, items: &[Value]) -> SchemaNode {
        let item_schema = items.first().map(|first| self.infer(first));
        SchemaNode::array(items.to_vec(), item_schema)
    }

    /// Infer an `object` node for a mapping
    pub fn infer_mapping(&self, entries: &Mapping) -> SchemaNode {
        let properties: IndexMap<String, SchemaNode> = entries
            .iter()
            .map(|(key, child)| (key.clone(), self.infer(child)))
            .collect();

        let required = self.policy.required_fields(entries, &properties);

        SchemaNode::object(Value::Mapping(entries.clone()), properties, required)
    }
}

/// Infer a schema node with the default [`ComponentPolicy`]
pub fn infer(value: &Value) -> SchemaNode {
    Inferencer::<ComponentPolicy>::default().infer(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_values;

    fn infer_yaml(yaml: &str) -> SchemaNode {
        infer(&Value::Mapping(parse_values(yaml, "test.yaml").unwrap()))
    }

    #[test]
    fn test_type_dispatch() {
        let cases = [
            (Value::Null, SchemaType::Null),
            (Value::Bool(false), SchemaType::Boolean),
            (Value::Int(3), SchemaType::Integer),
            (Value::Float(3.0), SchemaType::Number),
            (Value::String("x".into()), SchemaType::String),
            (Value::Sequence(vec![]), SchemaType::Array),
            (Value::Mapping(Mapping::new()), SchemaType::Object),
        ];

        for (value, expected) in cases {
            assert_eq!(infer(&value).schema_type, expected, "for {:?}", value);
        }
    }

    #[test]
    fn test_scalar_defaults() {
        assert_eq!(infer(&Value::Null).default, None);
        assert_eq!(infer(&Value::Int(3)).default, Some(Value::Int(3)));
        assert_eq!(
            infer(&Value::String("nginx".into())).default,
            Some(Value::String("nginx".into()))
        );
    }

    #[test]
    fn test_empty_collections() {
        let array = infer(&Value::Sequence(vec![]));
        assert!(array.items.is_none());
        assert_eq!(array.default, Some(Value::Sequence(vec![])));

        let object = infer(&Value::Mapping(Mapping::new()));
        assert_eq!(object.properties, Some(IndexMap::new()));
        assert_eq!(object.required, Some(vec![]));
        assert_eq!(object.default, Some(Value::Mapping(Mapping::new())));
    }

    #[test]
    fn test_array_items_from_first_element() {
        let node = infer_yaml("mixed: [1, \"two\", {three: 3}]");
        let mixed = node.property("mixed").unwrap();

        assert_eq!(mixed.items.as_ref().unwrap().schema_type, SchemaType::Integer);
        assert_eq!(
            mixed.default,
            Some(Value::Sequence(vec![
                Value::Int(1),
                Value::String("two".into()),
                Value::Mapping(parse_values("three: 3", "t").unwrap()),
            ]))
        );
    }

    #[test]
    fn test_required_emptiness_rule() {
        assert!(infer_yaml("x: \"\"").required_names().is_empty());
        assert_eq!(infer_yaml("x: a").required_names(), ["x"]);
        assert!(infer_yaml("x: []").required_names().is_empty());
        assert_eq!(infer_yaml("x: [1]").required_names(), ["x"]);
        assert!(infer_yaml("x: {}").required_names().is_empty());
        assert_eq!(infer_yaml("x: {k: 1}").required_names(), ["x"]);
    }

    #[test]
    fn test_disabled_component_suppression() {
        let disabled = infer_yaml("svc:\n  enabled: false\n  port: 80\n");
        assert_eq!(disabled.property("svc").unwrap().required_names(), ["enabled"]);
        // The parent still requires the component key itself
        assert_eq!(disabled.required_names(), ["svc"]);

        let enabled = infer_yaml("svc:\n  enabled: true\n  port: 80\n");
        assert_eq!(
            enabled.property("svc").unwrap().required_names(),
            ["enabled", "port"]
        );
    }

    #[test]
    fn test_nested_component_inside_disabled_parent() {
        let node = infer_yaml(
            r#"
outer:
  enabled: false
  inner:
    enabled: true
    size: 1
"#,
        );
        let outer = node.property("outer").unwrap();
        assert_eq!(outer.required_names(), ["enabled"]);
        assert_eq!(
            outer.property("inner").unwrap().required_names(),
            ["enabled", "size"]
        );
    }

    #[test]
    fn test_end_to_end_values() {
        let node = infer_yaml(
            r#"
replicaCount: 3
image:
  repository: nginx
  tag: stable
env:
  - name: LOG_LEVEL
    value: debug
"#,
        );

        assert_eq!(node.required_names(), ["replicaCount", "image", "env"]);

        let image = node.property("image").unwrap();
        assert_eq!(image.schema_type, SchemaType::Object);
        assert_eq!(
            image.property("repository").unwrap().default,
            Some(Value::String("nginx".into()))
        );

        let env_item = node.property("env").unwrap().items.as_ref().unwrap();
        assert_eq!(
            env_item.property("name").unwrap().default,
            Some(Value::String("LOG_LEVEL".into()))
        );
    }

    #[test]
    fn test_properties_match_mapping_keys() {
        let mapping = parse_values("b: 1\na: ~\nc: [x]\n", "t").unwrap();
        let node = infer(&Value::Mapping(mapping.clone()));
        let keys: Vec<_> = node.properties.as_ref().unwrap().keys().collect();
        let expected: Vec<_> = mapping.keys().collect();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_idempotent() {
        let value = Value::Mapping(parse_values("a: {b: [1, 2]}\nc: 1.5\n", "t").unwrap());
        assert_eq!(infer(&value), infer(&value));
    }
}
