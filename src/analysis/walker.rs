//! Single-pass tree walker
//!
//! Walks every item once, in pre-order, and accumulates everything the
//! report needs that depends on node identity: the hierarchy listing, the
//! type tally, field names, null records, parent/child edges and the
//! per-index key sets consumed by the missing-field detector.

use super::json_type::JsonType;
use crate::types::{HierarchyEntry, NodeIcon, NullMissingRecord, ParentChildEdge};
use serde_json::{Map, Value};
use std::collections::{BTreeMap, BTreeSet};

/// Key sets of object elements, keyed by their index within the parent array.
///
/// One map is shared by every array in the walk, so two arrays of objects
/// write into the same index slots and the last one visited wins. MISSING
/// records are computed from this shared map, not per array.
pub type KeysPerIndex = BTreeMap<usize, BTreeSet<String>>;

/// Everything accumulated by a walk
#[derive(Debug, Default)]
pub struct WalkOutput {
    pub hierarchy: Vec<HierarchyEntry>,
    pub node_count: usize,
    pub type_distribution: BTreeMap<JsonType, usize>,
    pub schema_fields: BTreeSet<String>,
    pub null_records: Vec<NullMissingRecord>,
    pub edges: Vec<ParentChildEdge>,
    pub keys_per_index: KeysPerIndex,
}

/// Accumulating walker; create one per analysis
#[derive(Debug, Default)]
pub struct TreeWalker {
    out: WalkOutput,
}

impl TreeWalker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Walk the whole item sequence.
    ///
    /// A lone item is rooted at `root`, otherwise item `i` is rooted at
    /// `item[i]`. With several items the sequence acts as the outermost
    /// sibling array, so object items register their key sets before they are
    /// walked. A lone item is not an array element and registers nothing.
    pub fn walk_items(&mut self, items: &[Value]) {
        let single = items.len() == 1;
        for (i, item) in items.iter().enumerate() {
            if !single {
                if let Value::Object(obj) = item {
                    self.record_keys(i, obj);
                }
            }
            let path = if single {
                "root".to_string()
            } else {
                format!("item[{}]", i)
            };
            self.walk(item, &path);
        }
    }

    /// Walk one tree starting at depth 0 under `start_path`
    pub fn walk(&mut self, root: &Value, start_path: &str) {
        self.visit(root, start_path.to_string(), 0);
    }

    pub fn finish(self) -> WalkOutput {
        self.out
    }

    fn visit(&mut self, value: &Value, path: String, depth: usize) {
        let json_type = JsonType::from_value(value);
        self.out.node_count += 1;
        *self.out.type_distribution.entry(json_type).or_insert(0) += 1;
        self.out.hierarchy.push(HierarchyEntry {
            depth,
            icon: NodeIcon::for_type(json_type),
            path: path.clone(),
            json_type,
        });

        match value {
            Value::Object(obj) => self.visit_object(obj, &path, depth),
            Value::Array(arr) => self.visit_array(arr, &path, depth),
            _ => {}
        }
    }

    fn visit_object(&mut self, obj: &Map<String, Value>, path: &str, depth: usize) {
        for (key, child) in obj.iter() {
            let child_path = format!("{}.{}", path, key);
            self.out.schema_fields.insert(key.clone());
            self.push_edge(path, &child_path);
            if child.is_null() {
                self.out.null_records.push(NullMissingRecord::null(child_path.clone()));
            }
            self.visit(child, child_path, depth + 1);
        }
    }

    fn visit_array(&mut self, arr: &[Value], path: &str, depth: usize) {
        for (i, child) in arr.iter().enumerate() {
            let child_path = format!("{}[{}]", path, i);
            self.push_edge(path, &child_path);
            if let Value::Object(obj) = child {
                self.record_keys(i, obj);
            }
            self.visit(child, child_path, depth + 1);
        }
    }

    fn push_edge(&mut self, parent: &str, child: &str) {
        self.out.edges.push(ParentChildEdge {
            parent: parent.to_string(),
            child: child.to_string(),
        });
    }

    fn record_keys(&mut self, index: usize, obj: &Map<String, Value>) {
        self.out
            .keys_per_index
            .insert(index, obj.keys().cloned().collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::RecordKind;
    use serde_json::json;

    fn walk_one(value: Value) -> WalkOutput {
        let mut walker = TreeWalker::new();
        walker.walk_items(&[value]);
        walker.finish()
    }

    #[test]
    fn test_preorder_paths() {
        let out = walk_one(json!({"a": {"b": 1}, "c": [true, "x"]}));

        let paths: Vec<&str> = out.hierarchy.iter().map(|h| h.path.as_str()).collect();
        assert_eq!(
            paths,
            vec!["root", "root.a", "root.a.b", "root.c", "root.c[0]", "root.c[1]"]
        );
        let depths: Vec<usize> = out.hierarchy.iter().map(|h| h.depth).collect();
        assert_eq!(depths, vec![0, 1, 2, 1, 2, 2]);
        assert_eq!(out.node_count, 6);
    }

    #[test]
    fn test_icons_follow_type() {
        let out = walk_one(json!({"list": [1]}));
        assert_eq!(out.hierarchy[0].icon, NodeIcon::Object);
        assert_eq!(out.hierarchy[1].icon, NodeIcon::Array);
        assert_eq!(out.hierarchy[2].icon, NodeIcon::Leaf);
        assert_eq!(out.hierarchy[2].json_type, JsonType::Integer);
    }

    #[test]
    fn test_type_distribution_sums_to_nodes() {
        let out = walk_one(json!({"a": 1, "b": 1.5, "c": null, "d": [false, "s", {}]}));
        let total: usize = out.type_distribution.values().sum();
        assert_eq!(total, out.node_count);
        assert_eq!(out.type_distribution[&JsonType::Integer], 1);
        assert_eq!(out.type_distribution[&JsonType::Float], 1);
        assert_eq!(out.type_distribution[&JsonType::Object], 2);
    }

    #[test]
    fn test_edges_in_traversal_order() {
        let out = walk_one(json!({"a": [1, 2]}));
        let edges: Vec<(&str, &str)> = out
            .edges
            .iter()
            .map(|e| (e.parent.as_str(), e.child.as_str()))
            .collect();
        assert_eq!(
            edges,
            vec![
                ("root", "root.a"),
                ("root.a", "root.a[0]"),
                ("root.a", "root.a[1]"),
            ]
        );
    }

    #[test]
    fn test_null_fields_recorded() {
        let out = walk_one(json!({"a": null, "b": {"c": null}, "d": [null]}));
        let paths: Vec<&str> = out.null_records.iter().map(|r| r.path.as_str()).collect();
        // array elements that are null are not field values
        assert_eq!(paths, vec!["root.a", "root.b.c"]);
        assert!(out.null_records.iter().all(|r| r.kind == RecordKind::Null));
    }

    #[test]
    fn test_multi_item_paths() {
        let mut walker = TreeWalker::new();
        walker.walk_items(&[json!({"a": 1}), json!(5)]);
        let out = walker.finish();

        let paths: Vec<&str> = out.hierarchy.iter().map(|h| h.path.as_str()).collect();
        assert_eq!(paths, vec!["item[0]", "item[0].a", "item[1]"]);
    }

    #[test]
    fn test_shared_index_map_last_array_wins() {
        let out = walk_one(json!({
            "first": [{"a": 1}, {"b": 2}],
            "second": [{"z": 1}]
        }));

        assert_eq!(out.keys_per_index.len(), 2);
        assert!(out.keys_per_index[&0].contains("z"));
        assert!(out.keys_per_index[&1].contains("b"));
    }

    #[test]
    fn test_lone_root_registers_no_keys() {
        let out = walk_one(json!({"a": 1, "list": [5, {"x": 1}]}));

        assert_eq!(out.keys_per_index.len(), 1);
        assert!(out.keys_per_index[&1].contains("x"));
        assert!(!out.keys_per_index.contains_key(&0));
    }

    #[test]
    fn test_multiple_items_register_as_siblings() {
        let mut walker = TreeWalker::new();
        walker.walk_items(&[json!({"a": 1}), json!("s"), json!({"b": 2})]);
        let out = walker.finish();

        let indices: Vec<usize> = out.keys_per_index.keys().copied().collect();
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_schema_fields_collect_nested_keys() {
        let out = walk_one(json!({"a": {"b": {"c": 1}}, "d": [{"e": 1}]}));
        let fields: Vec<&str> = out.schema_fields.iter().map(String::as_str).collect();
        assert_eq!(fields, vec!["a", "b", "c", "d", "e"]);
    }
}
