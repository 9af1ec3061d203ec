//! Error types for model loading and inference.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a classifier artifact.
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("failed to read model {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse model {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("sha256 mismatch for {path} (expected {expected}, got {actual})")]
    Sha256Mismatch {
        path: PathBuf,
        expected: String,
        actual: String,
    },

    #[error("invalid model artifact: {message}")]
    InvalidArtifact { message: String },
}

impl ModelError {
    pub(crate) fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidArtifact {
            message: message.into(),
        }
    }
}

/// Failure while running the classifier. Messages reach the UI.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PredictError {
    #[error("se esperaban {expected} variables por fila, se recibieron {actual}")]
    RowWidth { expected: usize, actual: usize },

    #[error("el modelo espera la variable desconocida '{0}'")]
    UnknownFeature(String),

    #[error("el modelo predijo la clase {0}, que no está entre sus clases")]
    UnknownClass(i64),

    #[error("el modelo devolvió {actual} resultados para {expected} filas")]
    OutputLength { expected: usize, actual: usize },

    #[error("valor no finito en la fila {row}")]
    NonFinite { row: usize },
}
