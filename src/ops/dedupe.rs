use serde_json::{Map, Value};
use std::collections::HashSet;

/// Rebuild `value` with every object's keys in sorted order, recursively
pub fn canonicalize(value: &Value) -> Value {
    match value {
        Value::Object(obj) => {
            let mut keys: Vec<&String> = obj.keys().collect();
            keys.sort();
            let mut sorted = Map::with_capacity(obj.len());
            for key in keys {
                sorted.insert(key.clone(), canonicalize(&obj[key.as_str()]));
            }
            Value::Object(sorted)
        }
        Value::Array(arr) => Value::Array(arr.iter().map(canonicalize).collect()),
        other => other.clone(),
    }
}

/// Compact JSON text of the canonical form, used as the equality key
pub fn canonical_key(value: &Value) -> String {
    canonicalize(value).to_string()
}

/// Keep the first occurrence of each distinct canonical form, in order
pub fn dedupe(items: &[Value]) -> Vec<Value> {
    let mut seen = HashSet::new();
    items
        .iter()
        .filter(|item| seen.insert(canonical_key(item)))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_canonical_key_ignores_key_order() {
        let a = json!({"b": 1, "a": {"d": 2, "c": [ {"y": 1, "x": 2} ]}});
        let b = json!({"a": {"c": [ {"x": 2, "y": 1} ], "d": 2}, "b": 1});
        assert_eq!(canonical_key(&a), canonical_key(&b));
        assert_eq!(canonical_key(&a), r#"{"a":{"c":[{"x":2,"y":1}],"d":2},"b":1}"#);
    }

    #[test]
    fn test_array_order_matters() {
        assert_ne!(canonical_key(&json!([1, 2])), canonical_key(&json!([2, 1])));
    }

    #[test]
    fn test_integer_and_float_differ() {
        assert_ne!(canonical_key(&json!(1)), canonical_key(&json!(1.0)));
    }

    #[test]
    fn test_dedupe_keeps_first_seen_order() {
        let items = vec![
            json!({"a": 1}),
            json!("x"),
            json!({"a": 1}),
            json!("x"),
            json!({"b": 2}),
        ];
        assert_eq!(dedupe(&items), vec![json!({"a": 1}), json!("x"), json!({"b": 2})]);
    }

    #[test]
    fn test_dedupe_keeps_original_key_order() {
        let items = vec![json!({"z": 1, "a": 2}), json!({"a": 2, "z": 1})];
        let kept = dedupe(&items);
        assert_eq!(kept.len(), 1);
        let keys: Vec<&String> = kept[0].as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["z", "a"]);
    }
}
