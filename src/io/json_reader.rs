//! JSON document loader
//!
//! Reads an input document from disk and parses it into an untyped
//! [`serde_json::Value`]. Failures are classified so each one produces its own
//! diagnostic:
//!
//! - file missing → [`SalesError::FileNotFound`]
//! - content not valid JSON (or not UTF-8) → [`SalesError::InvalidJson`]
//! - any other I/O failure → [`SalesError::UnreadableFile`]
//!
//! The file handle is dropped before either function returns.

use crate::types::field::kind_of;
use crate::types::SalesError;
use serde_json::Value;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use tracing::debug;

/// Load and parse a JSON document
///
/// # Examples
///
/// ```no_run
/// use compute_sales::io::load_document;
/// use std::path::Path;
///
/// match load_document(Path::new("priceCatalogue.json")) {
///     Ok(document) => println!("loaded {}", document),
///     Err(e) => eprintln!("ERROR: {}", e),
/// }
/// ```
pub fn load_document(path: &Path) -> Result<Value, SalesError> {
    let shown = path.display().to_string();

    let file = File::open(path).map_err(|e| SalesError::from_io(&shown, &e))?;

    let document: Value =
        serde_json::from_reader(BufReader::new(file)).map_err(|e| classify(&shown, e))?;

    debug!(path = %shown, kind = kind_of(&document), "document loaded");
    Ok(document)
}

/// Load a JSON document as a sequence of records
///
/// An array yields its elements. Any other document is not fatal: an object
/// yields its keys (as strings) and a scalar yields itself, so every record
/// still goes through per-entry validation and gets its own diagnostic.
pub fn load_sequence(path: &Path) -> Result<Vec<Value>, SalesError> {
    let document = load_document(path)?;
    if !document.is_array() {
        debug!(
            path = %path.display(),
            kind = kind_of(&document),
            "document is not an array, expanding into records"
        );
    }

    let records = into_records(document);
    debug!(path = %path.display(), records = records.len(), "sequence loaded");
    Ok(records)
}

/// Expand a document into the records it is iterated as
pub fn into_records(document: Value) -> Vec<Value> {
    match document {
        Value::Array(records) => records,
        Value::Object(map) => map.into_iter().map(|(key, _)| Value::String(key)).collect(),
        scalar => vec![scalar],
    }
}

fn classify(path: &str, error: serde_json::Error) -> SalesError {
    if error.is_io() {
        // Read failure after a successful open, e.g. EISDIR
        SalesError::UnreadableFile {
            path: path.to_string(),
            message: error.to_string(),
        }
    } else {
        SalesError::InvalidJson {
            path: path.to_string(),
            message: error.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;
    use std::io::Write;
    use tempfile::NamedTempFile;

    /// Helper function to create a temporary JSON file for testing
    fn create_temp_json(content: &[u8]) -> NamedTempFile {
        let mut file = NamedTempFile::new().expect("Failed to create temp file");
        file.write_all(content).expect("Failed to write to temp file");
        file.flush().expect("Failed to flush temp file");
        file
    }

    #[test]
    fn test_load_document_array() {
        let file = create_temp_json(br#"[{"product": "A", "price": 10}]"#);
        let document = load_document(file.path()).unwrap();
        assert_eq!(document, json!([{"product": "A", "price": 10}]));
    }

    #[test]
    fn test_load_document_object() {
        let file = create_temp_json(br#"{"items": []}"#);
        assert_eq!(load_document(file.path()).unwrap(), json!({"items": []}));
    }

    #[test]
    fn test_load_document_missing_file() {
        let result = load_document(Path::new("definitely/not/here.json"));
        assert_eq!(
            result,
            Err(SalesError::FileNotFound {
                path: "definitely/not/here.json".to_string()
            })
        );
    }

    #[rstest]
    #[case::truncated(b"[{\"product\": \"A\"" as &[u8])]
    #[case::trailing_garbage(b"[] extra")]
    #[case::empty(b"")]
    #[case::not_utf8(b"[\"\xff\xfe\"]")]
    fn test_load_document_invalid_json(#[case] content: &[u8]) {
        let file = create_temp_json(content);
        let result = load_document(file.path());
        assert!(
            matches!(result, Err(SalesError::InvalidJson { .. })),
            "got {:?}",
            result
        );
    }

    #[test]
    fn test_load_document_directory() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_document(dir.path());
        assert!(matches!(result, Err(SalesError::UnreadableFile { .. })));
    }

    #[test]
    fn test_load_sequence_accepts_array() {
        let file = create_temp_json(br#"[1, 2, 3]"#);
        assert_eq!(load_sequence(file.path()).unwrap().len(), 3);
    }

    #[test]
    fn test_load_sequence_object_is_not_fatal() {
        let file = create_temp_json(br#"{"product": "A", "price": 10}"#);
        let records = load_sequence(file.path()).unwrap();
        assert_eq!(records, vec![json!("price"), json!("product")]);
    }

    #[rstest]
    #[case::object(json!({"b": 1, "a": [2]}), vec![json!("a"), json!("b")])]
    #[case::empty_object(json!({}), vec![])]
    #[case::number(json!(42), vec![json!(42)])]
    #[case::null(json!(null), vec![json!(null)])]
    #[case::string(json!("items"), vec![json!("items")])]
    #[case::array(json!([{"items": []}, 3]), vec![json!({"items": []}), json!(3)])]
    fn test_into_records(#[case] document: Value, #[case] expected: Vec<Value>) {
        assert_eq!(into_records(document), expected);
    }
}
