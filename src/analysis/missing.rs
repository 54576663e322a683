use super::walker::KeysPerIndex;
use crate::types::NullMissingRecord;
use std::collections::BTreeSet;

/// Report fields present on some sibling array elements but absent on others.
///
/// The union of all recorded key sets is compared against each index's own
/// set; every gap becomes a `MISSING` record at `[index].key`.
pub fn detect_missing(keys_per_index: &KeysPerIndex) -> Vec<NullMissingRecord> {
    if keys_per_index.is_empty() {
        return Vec::new();
    }

    let all_keys: BTreeSet<&String> = keys_per_index.values().flatten().collect();

    let mut records = Vec::new();
    for (index, keys) in keys_per_index {
        for key in all_keys.iter().filter(|k| !keys.contains(k.as_str())) {
            records.push(NullMissingRecord::missing(format!("[{}].{}", index, key)));
        }
    }
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;

    fn keys(names: &[&str]) -> BTreeSet<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_map() {
        assert!(detect_missing(&KeysPerIndex::new()).is_empty());
    }

    #[test]
    fn test_reports_gaps() {
        let mut map = KeysPerIndex::new();
        map.insert(0, keys(&["a"]));
        map.insert(1, keys(&["a", "b"]));
        map.insert(2, keys(&["c"]));

        let records = detect_missing(&map);
        let paths: Vec<&str> = records.iter().map(|r| r.path.as_str()).collect();
        assert_eq!(paths, vec!["[0].b", "[0].c", "[1].c", "[2].a", "[2].b"]);
        assert!(records.iter().all(|r| r.kind == RecordKind::Missing));
    }

    #[test]
    fn test_uniform_siblings() {
        let mut map = KeysPerIndex::new();
        map.insert(0, keys(&["a", "b"]));
        map.insert(1, keys(&["b", "a"]));
        assert!(detect_missing(&map).is_empty());
    }
}
