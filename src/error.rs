//! Error types for assay
//!
//! Every public entry point returns `Result<T, AssayError>`. The analysis and
//! operation engines themselves only produce the first three variants; the
//! rest come from the input loader and the export writer.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AssayError {
    /// Flattening the file records produced no items
    #[error("no items found in the supplied files")]
    EmptyInput,

    /// The caller passed an empty file list
    #[error("no files supplied")]
    NoFiles,

    #[error("unknown operation: {0} (expected merge, trim or dedupe)")]
    UnknownOperation(String),

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Neither a JSON document nor newline-delimited JSON
    #[error("failed to parse {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("write failed: {0}")]
    Write(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AssayError>;
