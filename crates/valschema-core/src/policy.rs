//! Required-field policies
//!
//! Decides which properties of an object node end up in its `required`
//! list. The default [`ComponentPolicy`] requires every property with a
//! non-empty value, except inside a disabled component: a mapping carrying
//! `enabled: false` only requires `enabled` itself.
//!
//! Each object node is evaluated on its own, so a disabled component never
//! affects what its parent requires.

use indexmap::IndexMap;

use crate::schema::SchemaNode;
use crate::value::{Mapping, Value};

/// Key marking a mapping as a toggleable component
pub const ENABLED_KEY: &str = "enabled";

/// Chooses the `required` list for one object node
pub trait RequiredPolicy {
    /// `mapping` is the source value, `properties` the child nodes already
    /// inferred from it. Names are returned in document order.
    fn required_fields(
        &self,
        mapping: &Mapping,
        properties: &IndexMap<String, SchemaNode>,
    ) -> Vec<String>;
}

impl<T: RequiredPolicy + ?Sized> RequiredPolicy for Box<T> {
    fn required_fields(
        &self,
        mapping: &Mapping,
        properties: &IndexMap<String, SchemaNode>,
    ) -> Vec<String> {
        (**self).required_fields(mapping, properties)
    }
}

impl<T: RequiredPolicy + ?Sized> RequiredPolicy for &T {
    fn required_fields(
        &self,
        mapping: &Mapping,
        properties: &IndexMap<String, SchemaNode>,
    ) -> Vec<String> {
        (**self).required_fields(mapping, properties)
    }
}

/// Whether a value counts as empty for required-ness
///
/// Booleans and numbers are never empty, `false` and `0` included.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(_) | Value::Int(_) | Value::Float(_) => false,
        Value::String(s) => s.is_empty(),
        Value::Sequence(items) => items.is_empty(),
        Value::Mapping(entries) => entries.is_empty(),
    }
}

/// The `enabled` flag of a component, or `None` if the mapping is not one
pub fn component_enabled(mapping: &Mapping) -> Option<bool> {
    mapping.get(ENABLED_KEY).and_then(Value::as_bool)
}

fn non_empty_keys(mapping: &Mapping, properties: &IndexMap<String, SchemaNode>) -> Vec<String> {
    properties
        .keys()
        .filter(|key| mapping.get(*key).is_some_and(|v| !is_empty_value(v)))
        .cloned()
        .collect()
}

/// Non-empty properties are required, disabled components only require `enabled`
#[derive(Debug, Default, Clone, Copy)]
pub struct ComponentPolicy;

impl RequiredPolicy for ComponentPolicy {
    fn required_fields(
        &self,
        mapping: &Mapping,
        properties: &IndexMap<String, SchemaNode>,
    ) -> Vec<String> {
        if component_enabled(mapping) == Some(false) {
            return vec![ENABLED_KEY.to_string()];
        }
        non_empty_keys(mapping, properties)
    }
}

/// Every non-empty property is required, no component handling
#[derive(Debug, Default, Clone, Copy)]
pub struct AllNonEmptyPolicy;

impl RequiredPolicy for AllNonEmptyPolicy {
    fn required_fields(
        &self,
        mapping: &Mapping,
        properties: &IndexMap<String, SchemaNode>,
    ) -> Vec<String> {
        non_empty_keys(mapping, properties)
    }
}

/// Nothing is required
#[derive(Debug, Default, Clone, Copy)]
pub struct NoRequiredPolicy;

impl RequiredPolicy for NoRequiredPolicy {
    fn required_fields(&self, _: &Mapping, _: &IndexMap<String, SchemaNode>) -> Vec<String> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::inference::Inferencer;
    use crate::loader::parse_values;

    fn required_with<P: RequiredPolicy>(policy: P, yaml: &str) -> Vec<String> {
        let mapping = parse_values(yaml, "test.yaml").unwrap();
        let node = Inferencer::new(policy).infer_mapping(&mapping);
        node.required_names().to_vec()
    }

    #[test]
    fn test_emptiness() {
        assert!(is_empty_value(&Value::Null));
        assert!(is_empty_value(&Value::String(String::new())));
        assert!(is_empty_value(&Value::Sequence(Vec::new())));
        assert!(is_empty_value(&Value::Mapping(Mapping::new())));

        assert!(!is_empty_value(&Value::Bool(false)));
        assert!(!is_empty_value(&Value::Int(0)));
        assert!(!is_empty_value(&Value::Float(0.0)));
        assert!(!is_empty_value(&Value::String(" ".into())));
    }

    #[test]
    fn test_component_detection() {
        let on = parse_values("enabled: true\nport: 80", "t").unwrap();
        let off = parse_values("enabled: false", "t").unwrap();
        let not_bool = parse_values("enabled: \"false\"", "t").unwrap();
        let plain = parse_values("port: 80", "t").unwrap();

        assert_eq!(component_enabled(&on), Some(true));
        assert_eq!(component_enabled(&off), Some(false));
        assert_eq!(component_enabled(&not_bool), None);
        assert_eq!(component_enabled(&plain), None);
    }

    #[test]
    fn test_component_policy_non_empty() {
        let required = required_with(
            ComponentPolicy,
            "a: x\nb: \"\"\nc: [1]\nd: []\ne: {k: 1}\nf: {}\ng: ~\nh: false\ni: 0\n",
        );
        assert_eq!(required, vec!["a", "c", "e", "h", "i"]);
    }

    #[test]
    fn test_disabled_component_only_requires_enabled() {
        let required = required_with(ComponentPolicy, "port: 80\nenabled: false\nname: svc\n");
        assert_eq!(required, vec!["enabled"]);
    }

    #[test]
    fn test_enabled_component_requires_all() {
        let required = required_with(ComponentPolicy, "enabled: true\nport: 80\nhost: \"\"\n");
        assert_eq!(required, vec!["enabled", "port"]);
    }

    #[test]
    fn test_string_enabled_is_not_a_component() {
        let required = required_with(ComponentPolicy, "enabled: \"false\"\nport: 80\n");
        assert_eq!(required, vec!["enabled", "port"]);
    }

    #[test]
    fn test_all_non_empty_ignores_components() {
        let required = required_with(AllNonEmptyPolicy, "enabled: false\nport: 80\n");
        assert_eq!(required, vec!["enabled", "port"]);
    }

    #[test]
    fn test_no_required_policy() {
        let required = required_with(NoRequiredPolicy, "a: 1\nb: {c: 2}\n");
        assert!(required.is_empty());
    }

    #[test]
    fn test_boxed_policy() {
        let policy: Box<dyn RequiredPolicy> = Box::new(ComponentPolicy);
        let required = required_with(policy, "enabled: false\nport: 80\n");
        assert_eq!(required, vec!["enabled"]);
    }
}
