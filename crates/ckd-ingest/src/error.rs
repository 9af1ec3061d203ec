//! Error types for input ingestion.

use std::path::PathBuf;

use thiserror::Error;

use ckd_model::{CkdError, ClinicalField};

/// Errors raised while turning raw input into typed data.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File Errors ===
    /// Reference file could not be read.
    #[error("no se pudo leer el archivo {path}: {source}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    // === CSV Parsing Errors ===
    /// Polars rejected the content.
    #[error("no se pudo interpretar el CSV {source_name}: {message}")]
    CsvParse {
        source_name: String,
        message: String,
    },

    // === Row Errors ===
    /// Empty cell in a required column.
    #[error("fila {row}: falta el valor de la columna '{column}'")]
    MissingValue { row: usize, column: ClinicalField },

    /// Cell that cannot be read as a number.
    #[error("fila {row}: la columna '{column}' tiene un valor no numérico '{value}'")]
    NotNumeric {
        row: usize,
        column: ClinicalField,
        value: String,
    },

    /// Numbers that do not fit the field's declared kind.
    #[error("fila {row}: {source}")]
    InvalidRow {
        row: usize,
        #[source]
        source: CkdError,
    },

    /// Required column absent from the frame.
    #[error("no se encontró la columna '{column}'")]
    ColumnNotFound { column: ClinicalField },

    // === Form Errors ===
    /// Submitted form lacks a field.
    #[error("falta el campo '{field}' en el formulario")]
    MissingField { field: ClinicalField },

    /// Submitted form value cannot be decoded.
    #[error("valor '{value}' no válido para el campo '{field}'")]
    InvalidChoice { field: ClinicalField, value: String },
}
