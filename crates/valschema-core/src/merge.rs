//! Deep merge of values documents
//!
//! Rules:
//! - Mappings on both sides: recursive merge
//! - Anything else: the override replaces the base value
//! - Sequences are replaced, never appended
//!
//! Neither operand is mutated; the result is a freshly built mapping.

use crate::value::{Mapping, Value};

/// Merge `overrides` on top of `base`
///
/// Keys keep the base's order; keys only present in `overrides` are
/// appended in the order they appear there.
pub fn merge(base: &Mapping, overrides: &Mapping) -> Mapping {
    let mut merged = Mapping::with_capacity(base.len() + overrides.len());

    for (key, base_value) in base {
        let value = match (base_value, overrides.get(key)) {
            (Value::Mapping(base_map), Some(Value::Mapping(override_map))) => {
                Value::Mapping(merge(base_map, override_map))
            }
            (_, Some(override_value)) => override_value.clone(),
            (base_value, None) => base_value.clone(),
        };
        merged.insert(key.clone(), value);
    }

    for (key, override_value) in overrides {
        if !base.contains_key(key) {
            merged.insert(key.clone(), override_value.clone());
        }
    }

    merged
}

/// Merge several overrides documents in order, left to right
pub fn merge_all<'a, I>(base: &Mapping, overrides: I) -> Mapping
where
    I: IntoIterator<Item = &'a Mapping>,
{
    overrides
        .into_iter()
        .fold(base.clone(), |acc, next| merge(&acc, next))
}
