//! CSV loading into Polars frames.

use std::io::Cursor;
use std::path::Path;

use polars::prelude::*;
use tracing::debug;

use crate::error::IngestError;

/// True when the file name has a `.csv` extension, ignoring case.
pub fn is_csv_filename(name: &str) -> bool {
    name.rsplit_once('.')
        .is_some_and(|(_, ext)| ext.eq_ignore_ascii_case("csv"))
}

/// Parses an in-memory CSV upload with a header row.
///
/// Column types are inferred from every row, so a decimal appearing late in
/// an otherwise integer column widens the column instead of failing the read.
pub fn read_csv_bytes(source_name: &str, bytes: &[u8]) -> Result<DataFrame, IngestError> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .into_reader_with_file_handle(Cursor::new(bytes))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;
    debug!(
        source = source_name,
        rows = df.height(),
        columns = df.width(),
        "parsed csv upload"
    );
    Ok(df)
}

/// Reads a CSV file from disk with a header row.
pub fn read_csv_file(path: &Path) -> Result<DataFrame, IngestError> {
    if !path.is_file() {
        return Err(IngestError::FileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(|e| IngestError::CsvParse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })?
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: path.display().to_string(),
            message: e.to_string(),
        })
}
