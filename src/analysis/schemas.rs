use crate::types::Schema;
use serde_json::Value;

/// Group object items by their sorted top-level key signature.
///
/// Non-object items are skipped. Schemas are returned in first-seen order and
/// keep the field order of the first item that produced them.
pub fn detect_schemas(items: &[Value]) -> Vec<Schema> {
    let mut schemas: Vec<Schema> = Vec::new();

    for item in items {
        let Value::Object(obj) = item else {
            continue;
        };

        let mut sorted: Vec<&str> = obj.keys().map(String::as_str).collect();
        sorted.sort_unstable();
        let signature = sorted.join(",");

        match schemas.iter_mut().find(|s| s.keys == signature) {
            Some(existing) => existing.count += 1,
            None => schemas.push(Schema {
                keys: signature,
                fields: obj.keys().cloned().collect(),
                count: 1,
            }),
        }
    }

    schemas
}
