//! Input handling: flattening file records and loading them from disk

use crate::error::{AssayError, Result};
use crate::types::FileRecord;
use serde::Deserialize;
use serde_json::Value;
use std::path::Path;
use tracing::{debug, warn};

/// Flatten file contents into one item sequence.
///
/// An array content contributes each of its elements, anything else
/// contributes itself. File order is kept, then element order.
pub fn flatten(files: &[FileRecord]) -> Vec<Value> {
    let mut items = Vec::new();
    for file in files {
        match &file.content {
            Value::Array(arr) => items.extend(arr.iter().cloned()),
            other => items.push(other.clone()),
        }
    }
    items
}

/// Load one file as a record named after its file name.
///
/// The whole buffer is parsed with simd-json first; if that fails the
/// content is read as newline-delimited JSON and becomes an array.
pub fn load_file<P: AsRef<Path>>(path: P) -> Result<FileRecord> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AssayError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());

    let content = parse_content(bytes).map_err(|message| AssayError::Parse {
        path: path.to_path_buf(),
        message,
    })?;

    debug!(file = %name, "loaded");
    Ok(FileRecord::new(name, content))
}

/// Load several files, stopping at the first failure
pub fn load_files<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<FileRecord>> {
    paths.iter().map(load_file).collect()
}

#[derive(Deserialize)]
struct RequestBody {
    #[serde(default)]
    files: Vec<FileRecord>,
}

/// Load a saved request body of the form `{"files": [{"name", "content"}, ...]}`
pub fn load_request<P: AsRef<Path>>(path: P) -> Result<Vec<FileRecord>> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| AssayError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let body: RequestBody = serde_json::from_slice(&bytes)?;
    Ok(body.files)
}

fn parse_content(mut bytes: Vec<u8>) -> std::result::Result<Value, String> {
    // simd-json parses in place, so keep the original for the fallback
    let original = bytes.clone();
    match simd_json::serde::from_slice::<Value>(&mut bytes) {
        Ok(value) => Ok(value),
        Err(simd_err) => {
            let text = String::from_utf8_lossy(&original);
            let mut values = Vec::new();
            for line in text.lines() {
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }
                match serde_json::from_str::<Value>(line) {
                    Ok(value) => values.push(value),
                    Err(_) => return Err(simd_err.to_string()),
                }
            }
            if values.is_empty() {
                return Err(simd_err.to_string());
            }
            warn!(lines = values.len(), "not a single JSON document, read as NDJSON");
            Ok(Value::Array(values))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_flatten_order() {
        let files = vec![
            FileRecord::new("a", json!([1, 2])),
            FileRecord::new("b", json!({"k": "v"})),
            FileRecord::new("c", json!([[3]])),
        ];
        assert_eq!(flatten(&files), vec![json!(1), json!(2), json!({"k": "v"}), json!([3])]);
    }

    #[test]
    fn test_flatten_empty_array_contributes_nothing() {
        let files = vec![FileRecord::new("a", json!([])), FileRecord::new("b", json!(null))];
        assert_eq!(flatten(&files), vec![Value::Null]);
    }

    #[test]
    fn test_load_json_document_keeps_key_order() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, r#"{{"zeta": 1, "alpha": [true]}}"#).unwrap();

        let record = load_file(file.path()).unwrap();
        let keys: Vec<&String> = record.content.as_object().unwrap().keys().collect();
        assert_eq!(keys, vec!["zeta", "alpha"]);
        assert!(!record.name.is_empty());
    }

    #[test]
    fn test_load_ndjson() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"id": 1}}"#).unwrap();
        writeln!(file).unwrap();
        writeln!(file, r#"{{"id": 2}}"#).unwrap();

        let record = load_file(file.path()).unwrap();
        assert_eq!(record.content, json!([{"id": 1}, {"id": 2}]));
    }

    #[test]
    fn test_load_garbage_fails() {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "not json at all").unwrap();

        let err = load_file(file.path()).unwrap_err();
        assert!(matches!(err, AssayError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = load_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, AssayError::Io { .. }));
    }

    #[test]
    fn test_load_request_body() {
        let mut file = NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"files": [{{"name": "a.json", "content": [1, 2]}}, {{"name": "b.json", "content": {{"x": null}}}}]}}"#
        )
        .unwrap();

        let files = load_request(file.path()).unwrap();
        assert_eq!(files.len(), 2);
        assert_eq!(files[0].name, "a.json");
        assert_eq!(files[1].content, json!({"x": null}));
    }
}
