//! # Assay - JSON Corpus Analysis
//!
//! Takes one or more JSON documents, flattens them into a sequence of items
//! and reports on their structure: hierarchy, type distribution, schemas,
//! null and missing fields, value statistics and a type skeleton. Also
//! provides three corpus transforms: merge, trim and dedupe.
//!
//! ## Modules
//!
//! - **analysis**: the tree walker and the passes built around it
//! - **ops**: merge / trim / dedupe and output writing
//! - **input**: flattening and file loading
//!
//! ## Quick Start
//!
//! ```rust
//! use assay::{run_analysis, run_operation, FileRecord, Operation};
//! use serde_json::json;
//!
//! # fn main() -> anyhow::Result<()> {
//! let files = vec![FileRecord::new(
//!     "users.json",
//!     json!([
//!         {"id": 1, "name": "Alice"},
//!         {"id": 2, "name": "Bob", "email": null}
//!     ]),
//! )];
//!
//! let report = run_analysis(&files)?;
//! assert_eq!(report.total_objects, 2);
//! assert_eq!(report.schema_count, 2);
//!
//! let outcome = run_operation("dedupe".parse::<Operation>()?, &files)?;
//! assert_eq!(outcome.count, 2);
//! # Ok(())
//! # }
//! ```

pub mod analysis;
pub mod error;
pub mod input;
pub mod ops;
pub mod types;

pub use analysis::{run_analysis, run_analysis_with, JsonType};
pub use error::{AssayError, Result};
pub use input::{flatten, load_file, load_files, load_request};
pub use ops::{run_operation, run_operation_with, Operation, OutputFormat, OutputWriter};
pub use types::{AnalysisConfig, AnalysisReport, FileRecord, OperationOutcome};
