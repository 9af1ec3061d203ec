//! Scoring of uploaded CSV files.
//!
//! A batch is all-or-nothing: the first failing stage aborts it and no rows
//! are reported.

use thiserror::Error;
use tracing::{debug, info, warn};

use ckd_ingest::{extract_records, is_csv_filename, read_csv_bytes};
use ckd_model::{BatchEntry, BatchResult};
use ckd_validate::{check_required_columns, validate_record};

use crate::classifier::{Classifier, feature_row, score_rows};

/// Reasons a CSV batch produced no results. Messages are user-facing.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BatchError {
    #[error("El archivo debe tener extensión .csv")]
    NotCsv { filename: String },

    #[error("Error al leer el archivo: {0}")]
    Parse(String),

    #[error("Columnas faltantes: {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("Modelo no disponible")]
    ModelUnavailable,

    #[error("El archivo no contiene filas de datos")]
    NoRows,

    #[error("Error al procesar el archivo: {0}")]
    Processing(String),

    #[error("Datos fuera de rango: {}", .0.join("; "))]
    InvalidRows(Vec<String>),
}

impl BatchError {
    /// Rows reported alongside the error; always zero.
    pub const fn processed_rows(&self) -> usize {
        0
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BatchOptions {
    /// Reject the batch when any row fails the clinical range checks.
    pub enforce_ranges: bool,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct BatchPredictor {
    options: BatchOptions,
}

impl BatchPredictor {
    pub fn new(options: BatchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> BatchOptions {
        self.options
    }

    /// Runs every stage over one upload.
    pub fn run(
        &self,
        model: Option<&dyn Classifier>,
        filename: &str,
        bytes: &[u8],
    ) -> Result<BatchResult, BatchError> {
        if !is_csv_filename(filename) {
            return Err(BatchError::NotCsv {
                filename: filename.to_string(),
            });
        }

        let df = read_csv_bytes(filename, bytes).map_err(|err| BatchError::Parse(err.to_string()))?;
        debug!(filename, rows = df.height(), columns = df.width(), "upload parsed");

        check_required_columns(df.get_column_names())
            .map_err(|missing| BatchError::MissingColumns(missing.0))?;

        let model = model.ok_or(BatchError::ModelUnavailable)?;

        let records =
            extract_records(&df).map_err(|err| BatchError::Processing(err.to_string()))?;
        if records.is_empty() {
            return Err(BatchError::NoRows);
        }

        if self.options.enforce_ranges {
            let issues: Vec<String> = records
                .iter()
                .enumerate()
                .flat_map(|(idx, record)| {
                    validate_record(record)
                        .into_iter()
                        .map(move |issue| format!("fila {}: {issue}", idx + 1))
                })
                .collect();
            if !issues.is_empty() {
                warn!(filename, issues = issues.len(), "batch rejected by range checks");
                return Err(BatchError::InvalidRows(issues));
            }
        }

        let rows = records
            .iter()
            .map(|record| feature_row(model, record))
            .collect::<Result<Vec<_>, _>>()
            .map_err(|err| BatchError::Processing(err.to_string()))?;
        let scored = score_rows(model, &rows).map_err(|err| BatchError::Processing(err.to_string()))?;

        let entries = scored
            .into_iter()
            .enumerate()
            .map(|(idx, result)| BatchEntry {
                row: idx + 1,
                result,
            })
            .collect();
        let batch = BatchResult::from_entries(entries);
        info!(
            filename,
            total = batch.total_rows,
            positive = batch.positive_count,
            negative = batch.negative_count,
            "batch scored"
        );
        Ok(batch)
    }
}
