//! Corpus-level transforms over the flattened item sequence
//!
//! - **merge**: concatenate every file's items
//! - **trim**: keep the first `trim_limit` items
//! - **dedupe**: drop items whose canonical form was already seen

pub mod dedupe;
pub mod writer;

pub use dedupe::{canonical_key, canonicalize, dedupe};
pub use writer::{default_export_name, OutputFormat, OutputWriter};

use crate::error::{AssayError, Result};
use crate::input::flatten;
use crate::types::{AnalysisConfig, FileRecord, OperationOutcome};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Merge,
    Trim,
    Dedupe,
}

impl Operation {
    pub fn as_str(self) -> &'static str {
        match self {
            Operation::Merge => "merge",
            Operation::Trim => "trim",
            Operation::Dedupe => "dedupe",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Operation::Merge => "Merge",
            Operation::Trim => "Trim",
            Operation::Dedupe => "Deduplicate",
        }
    }
}

impl FromStr for Operation {
    type Err = AssayError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "merge" => Ok(Operation::Merge),
            "trim" => Ok(Operation::Trim),
            "dedupe" => Ok(Operation::Dedupe),
            other => Err(AssayError::UnknownOperation(other.to_string())),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Run `op` over `files` with the default configuration
pub fn run_operation(op: Operation, files: &[FileRecord]) -> Result<OperationOutcome> {
    run_operation_with(op, files, &AnalysisConfig::default())
}

pub fn run_operation_with(
    op: Operation,
    files: &[FileRecord],
    config: &AnalysisConfig,
) -> Result<OperationOutcome> {
    if files.is_empty() {
        return Err(AssayError::NoFiles);
    }

    let items = flatten(files);
    let before = items.len();

    let data = match op {
        Operation::Merge => items,
        Operation::Trim => {
            let mut data = items;
            data.truncate(config.trim_limit);
            data
        }
        Operation::Dedupe => dedupe(&items),
    };

    let after = data.len();
    let removed = before - after;
    let summary = match op {
        Operation::Merge => format!("{} files → {} items merged", files.len(), after),
        Operation::Trim => format!("{} → {} items ({} removed)", before, after, removed),
        Operation::Dedupe => format!(
            "{} → {} items ({} duplicates removed)",
            before, after, removed
        ),
    };

    debug!(operation = %op, before, after, removed, "operation complete");

    Ok(OperationOutcome {
        label: op.label().to_string(),
        summary,
        count: after,
        removed,
        data,
    })
}
