//! Structural and statistical analysis of a JSON corpus
//!
//! The passes below each read the flattened item sequence independently and
//! their outputs are assembled into one [`AnalysisReport`]:
//!
//! - **walker**: hierarchy, node and type counts, field names, nulls, edges
//! - **missing**: fields absent on some sibling array elements
//! - **schemas**: top-level key signatures
//! - **stats**: per-type value summaries
//! - **structure**: type skeleton and max depth of the first item

pub mod json_type;
pub mod missing;
pub mod schemas;
pub mod stats;
pub mod structure;
pub mod walker;

pub use json_type::{classify, JsonType};
pub use missing::detect_missing;
pub use schemas::detect_schemas;
pub use stats::{collect_type_stats, TypeStatsBuilder};
pub use structure::{map_structure, max_depth};
pub use walker::{KeysPerIndex, TreeWalker, WalkOutput};

use crate::error::{AssayError, Result};
use crate::input::flatten;
use crate::types::{AnalysisConfig, AnalysisReport, FileRecord};
use tracing::debug;

/// Analyze `files` with the default configuration
pub fn run_analysis(files: &[FileRecord]) -> Result<AnalysisReport> {
    run_analysis_with(files, &AnalysisConfig::default())
}

/// Analyze `files`; fails with [`AssayError::EmptyInput`] when flattening yields no items
pub fn run_analysis_with(files: &[FileRecord], config: &AnalysisConfig) -> Result<AnalysisReport> {
    let items = flatten(files);
    let first = items.first().ok_or(AssayError::EmptyInput)?;
    debug!(files = files.len(), items = items.len(), "starting analysis");

    let mut walker = TreeWalker::new();
    walker.walk_items(&items);
    let walked = walker.finish();

    let mut null_missing = walked.null_records;
    null_missing.extend(detect_missing(&walked.keys_per_index));
    debug!(
        nodes = walked.node_count,
        records = null_missing.len(),
        "tree walk complete"
    );

    let type_stats = collect_type_stats(&items);
    let schemas = detect_schemas(&items);

    Ok(AnalysisReport {
        total_objects: items.len(),
        total_nodes: walked.node_count,
        schema_count: schemas.len(),
        max_depth: max_depth(first),
        total_keys: walked.schema_fields.len(),
        type_distribution: walked.type_distribution,
        type_stats,
        schema_fields: walked.schema_fields.into_iter().collect(),
        null_missing,
        hierarchy: walked.hierarchy,
        parent_child: walked.edges,
        schemas,
        structure_map: map_structure(first, config.structure_depth),
    })
}
