//! Per-row batch results as CSV.

use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use ckd_model::{BatchResult, RiskLabel};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write results: {0}")]
    Csv(#[from] csv::Error),

    #[error("failed to flush results: {0}")]
    Io(#[from] std::io::Error),
}

const HEADER: [&str; 5] = ["fila", "prediccion", "probabilidad", "clase", "label"];

/// Writes one line per scored row: row number, label text, confidence
/// percent, style and machine label.
pub fn write_batch_csv<W: Write>(writer: W, batch: &BatchResult) -> Result<(), ExportError> {
    let mut out = csv::Writer::from_writer(writer);
    out.write_record(HEADER)?;
    for entry in &batch.entries {
        let label = entry.result.label;
        out.write_record([
            entry.row.to_string(),
            label.text().to_string(),
            entry.result.confidence.to_string(),
            label.style().to_string(),
            match label {
                RiskLabel::Positive => "1",
                RiskLabel::Negative => "0",
            }
            .to_string(),
        ])?;
    }
    out.flush()?;
    Ok(())
}

pub fn write_batch_csv_file(path: &Path, batch: &BatchResult) -> Result<(), ExportError> {
    let file = std::fs::File::create(path).map_err(|source| ExportError::Create {
        path: path.to_path_buf(),
        source,
    })?;
    write_batch_csv(file, batch)
}
