//! Table loading boundary.
//!
//! Parses an uploaded CSV file or byte stream into a typed `DataFrame`.
//! All parse failures are converted into recoverable [`EdaError`] load
//! variants here; the profiler, assessor and insight engine only ever see
//! a well-formed table.

use crate::error::{EdaError, Result};
use polars::io::csv::read::CsvReadOptions;
use polars::prelude::*;
use std::io::Cursor;
use std::path::Path;
use tracing::{debug, error};

/// Load a CSV file with multiple fallback strategies.
pub fn load_csv(path: impl AsRef<Path>) -> Result<DataFrame> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(EdaError::SourceNotFound(path.display().to_string()));
    }

    // Strategy 1: Standard loading with quote handling
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .with_parse_options(CsvParseOptions::default().with_quote_char(Some(b'"')))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| EdaError::Load(e.to_string()))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Standard loading failed: {}", e);
        }
    }

    // Strategy 2: Default parse options
    match CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| EdaError::Load(e.to_string()))?
        .finish()
    {
        Ok(df) => return Ok(df),
        Err(e) => {
            debug!("Loading with default options failed: {}", e);
        }
    }

    // Strategy 3: Pre-clean content
    match std::fs::read_to_string(path) {
        Ok(content) => {
            let cleaned = clean_csv_content(&content);
            load_csv_bytes(cleaned.as_bytes())
        }
        Err(e) => {
            error!("Could not read file: {}", e);
            Err(e.into())
        }
    }
}

/// Load a CSV byte stream, as received from an upload.
pub fn load_csv_bytes(bytes: &[u8]) -> Result<DataFrame> {
    let cursor = Cursor::new(bytes.to_vec());

    CsvReadOptions::default()
        .with_infer_schema_length(Some(100))
        .with_has_header(true)
        .into_reader_with_file_handle(cursor)
        .finish()
        .map_err(|e| EdaError::Load(e.to_string()))
}

/// Clean CSV content of stray quoting and blank lines.
fn clean_csv_content(content: &str) -> String {
    content
        .replace("\"\"\"", "\"")
        .replace("\"\"", "\"")
        .lines()
        .filter(|line| !line.trim().is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_csv_bytes_basic() {
        let csv = b"name,age\nalice,30\nbob,25\n";
        let df = load_csv_bytes(csv).unwrap();

        assert_eq!(df.shape(), (2, 2));
        assert_eq!(df.column("age").unwrap().dtype(), &DataType::Int64);
    }

    #[test]
    fn test_load_csv_bytes_infers_nulls() {
        let csv = b"name,age\nalice,30\nbob,\n";
        let df = load_csv_bytes(csv).unwrap();

        assert_eq!(df.column("age").unwrap().null_count(), 1);
    }

    #[test]
    fn test_load_csv_bytes_header_only() {
        let csv = b"name,age\n";
        let df = load_csv_bytes(csv).unwrap();

        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 2);
    }

    #[test]
    fn test_load_csv_bytes_garbage_is_load_error() {
        let result = load_csv_bytes(&[0xff, 0xfe, 0x00, 0x01]);
        assert!(matches!(result, Err(EdaError::Load(_))));
    }

    #[test]
    fn test_load_csv_missing_file() {
        let result = load_csv("definitely/not/a/file.csv");
        assert!(matches!(result, Err(EdaError::SourceNotFound(_))));
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_clean_csv_content() {
        let raw = "a,b\n\"\"\"x\"\"\",1\n\n2,3\n";
        let cleaned = clean_csv_content(raw);

        assert!(!cleaned.contains("\"\"\""));
        assert!(!cleaned.contains("\n\n"));
    }
}
