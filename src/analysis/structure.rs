use super::json_type::JsonType;
use serde_json::{Map, Value};

/// Project a value into a type skeleton.
///
/// Containers are followed while `depth <= limit`; anything else becomes its
/// type name. Arrays are sampled through their first element only and an
/// empty array maps to `["empty"]`.
pub fn map_structure(value: &Value, limit: usize) -> Value {
    map_at(value, 0, limit)
}

fn map_at(value: &Value, depth: usize, limit: usize) -> Value {
    if depth > limit {
        return type_name(value);
    }

    match value {
        Value::Array(arr) => match arr.first() {
            Some(first) => Value::Array(vec![map_at(first, depth + 1, limit)]),
            None => Value::Array(vec![Value::String("empty".to_string())]),
        },
        Value::Object(obj) => {
            let mut skeleton = Map::with_capacity(obj.len());
            for (key, child) in obj.iter() {
                skeleton.insert(key.clone(), map_at(child, depth + 1, limit));
            }
            Value::Object(skeleton)
        }
        _ => type_name(value),
    }
}

fn type_name(value: &Value) -> Value {
    Value::String(JsonType::from_value(value).as_str().to_string())
}

/// Deepest nesting level below `value`; empty containers and scalars add nothing
pub fn max_depth(value: &Value) -> usize {
    depth_at(value, 0)
}

fn depth_at(value: &Value, depth: usize) -> usize {
    match value {
        Value::Object(obj) => obj
            .values()
            .map(|child| depth_at(child, depth + 1))
            .max()
            .unwrap_or(depth),
        Value::Array(arr) => arr
            .iter()
            .map(|child| depth_at(child, depth + 1))
            .max()
            .unwrap_or(depth),
        _ => depth,
    }
}
