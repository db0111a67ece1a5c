//! JSON merge operations
//!
//! Deep, gap-filling merge of `serde_json` values.
//!
//! ## Rules
//!
//! - Objects: keys missing from the target are copied from the source; keys
//!   present on both sides recurse when both values are objects.
//! - `null` in the target counts as missing and is replaced.
//! - Everything else (scalars, arrays, type mismatches) keeps the target.
//!
//! ## Example
//!
//! ```
//! use component_tree::merge::fill_json_value;
//! use serde_json::json;
//!
//! let mut target = json!({"port": 80});
//! fill_json_value(&mut target, &json!({"port": 8080, "debug": false}));
//! assert_eq!(target, json!({"port": 80, "debug": false}));
//! ```

use serde_json::{Map, Value as JsonValue};

/// Recursively fill gaps in `target` from `source`.
///
/// The target keeps every non-null value it already has. Arrays are never
/// concatenated.
pub fn fill_json_value(target: &mut JsonValue, source: &JsonValue) {
    match target {
        JsonValue::Null => *target = source.clone(),
        JsonValue::Object(target_map) => {
            if let JsonValue::Object(source_map) = source {
                fill_json_map(target_map, source_map);
            }
        }
        _ => {}
    }
}

/// Fill gaps in an object map, key by key.
pub fn fill_json_map(target: &mut Map<String, JsonValue>, source: &Map<String, JsonValue>) {
    for (key, value) in source {
        match target.get_mut(key) {
            Some(existing) => fill_json_value(existing, value),
            None => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_missing_keys_are_copied() {
        let mut target = json!({"a": 1});
        fill_json_value(&mut target, &json!({"b": 2}));
        assert_eq!(target, json!({"a": 1, "b": 2}));
    }

    #[test]
    fn test_existing_scalar_wins() {
        let mut target = json!({"port": 80});
        fill_json_value(&mut target, &json!({"port": 8080}));
        assert_eq!(target["port"], json!(80));
    }

    #[test]
    fn test_null_is_replaced() {
        let mut target = json!({"host": null});
        fill_json_value(&mut target, &json!({"host": "db.local"}));
        assert_eq!(target["host"], json!("db.local"));
    }

    #[test]
    fn test_nested_objects_merge_recursively() {
        let mut target = json!({"database": {"host": "primary"}});
        fill_json_value(
            &mut target,
            &json!({"database": {"host": "replica", "port": 5432}}),
        );
        assert_eq!(target, json!({"database": {"host": "primary", "port": 5432}}));
    }

    #[test]
    fn test_arrays_are_not_concatenated() {
        let mut target = json!({"hosts": ["a"]});
        fill_json_value(&mut target, &json!({"hosts": ["b", "c"]}));
        assert_eq!(target["hosts"], json!(["a"]));
    }

    #[test]
    fn test_type_mismatch_keeps_target() {
        let mut target = json!({"tls": true});
        fill_json_value(&mut target, &json!({"tls": {"cert": "x"}}));
        assert_eq!(target["tls"], json!(true));
    }

    #[test]
    fn test_empty_source_is_identity() {
        let original = json!({"a": {"b": [1, 2]}, "c": "d"});
        let mut target = original.clone();
        fill_json_value(&mut target, &json!({}));
        assert_eq!(target, original);
    }
}
