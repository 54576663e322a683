use crate::analysis::JsonType;
use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};
use std::collections::BTreeMap;

/// One input document: a display name plus its already-parsed content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FileRecord {
    pub name: String,
    pub content: Value,
}

impl FileRecord {
    pub fn new(name: impl Into<String>, content: Value) -> Self {
        FileRecord {
            name: name.into(),
            content,
        }
    }
}

/// Configuration for analysis and operations
#[derive(Debug, Clone)]
pub struct AnalysisConfig {
    /// Deepest level the structure map descends to before emitting a type name
    pub structure_depth: usize,

    /// Number of items kept by the trim operation
    pub trim_limit: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        AnalysisConfig {
            structure_depth: 4,
            trim_limit: 100,
        }
    }
}

/// Marker shown next to a hierarchy entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeIcon {
    #[serde(rename = "📂")]
    Object,
    #[serde(rename = "📋")]
    Array,
    #[serde(rename = "🔹")]
    Leaf,
}

impl NodeIcon {
    pub fn for_type(json_type: JsonType) -> Self {
        match json_type {
            JsonType::Object => NodeIcon::Object,
            JsonType::Array => NodeIcon::Array,
            _ => NodeIcon::Leaf,
        }
    }
}

/// One visited node, in pre-order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HierarchyEntry {
    pub depth: usize,
    pub icon: NodeIcon,
    pub path: String,
    #[serde(rename = "type")]
    pub json_type: JsonType,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum RecordKind {
    /// Field present with an explicit null value
    Null,
    /// Field seen on a sibling array element but absent here
    Missing,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NullMissingRecord {
    pub kind: RecordKind,
    pub path: String,
}

impl NullMissingRecord {
    pub fn null(path: impl Into<String>) -> Self {
        NullMissingRecord {
            kind: RecordKind::Null,
            path: path.into(),
        }
    }

    pub fn missing(path: impl Into<String>) -> Self {
        NullMissingRecord {
            kind: RecordKind::Missing,
            path: path.into(),
        }
    }
}

/// Direct containment of `child` inside `parent`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParentChildEdge {
    pub parent: String,
    pub child: String,
}

/// A distinct top-level key set shared by one or more object items
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schema {
    /// Sorted, comma-joined field names
    pub keys: String,
    /// Field names in the order of the first item with this signature
    pub fields: Vec<String>,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StringStats {
    pub min_words: usize,
    pub max_words: usize,
    pub avg_words: f64,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BooleanStats {
    pub true_count: usize,
    pub false_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntegerStats {
    pub most_used_value: Number,
    pub most_used_count: usize,
    pub least_used_value: Number,
    pub least_used_count: usize,
    pub total: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrayStats {
    pub min_length: usize,
    pub max_length: usize,
    pub avg_length: f64,
    pub total: usize,
}

/// Per-type summaries; a category is absent when no value of that type was seen
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeStats {
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub string: Option<StringStats>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub boolean: Option<BooleanStats>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub integer: Option<IntegerStats>,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub array: Option<ArrayStats>,
}

/// The full result of one analysis run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub total_objects: usize,
    pub total_nodes: usize,
    pub schema_count: usize,
    pub max_depth: usize,
    pub total_keys: usize,
    pub type_distribution: BTreeMap<JsonType, usize>,
    pub type_stats: TypeStats,
    pub schema_fields: Vec<String>,
    pub null_missing: Vec<NullMissingRecord>,
    pub hierarchy: Vec<HierarchyEntry>,
    pub parent_child: Vec<ParentChildEdge>,
    pub schemas: Vec<Schema>,
    pub structure_map: Value,
}

/// Result of a merge, trim or dedupe run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OperationOutcome {
    pub label: String,
    pub summary: String,
    pub count: usize,
    pub removed: usize,
    pub data: Vec<Value>,
}
