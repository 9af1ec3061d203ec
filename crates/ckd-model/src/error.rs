use thiserror::Error;

use crate::field::ClinicalField;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum CkdError {
    #[error("campo clínico desconocido: {0}")]
    UnknownField(String),
    #[error("{field}: se esperaba un número entero, se recibió {value}")]
    NotInteger { field: ClinicalField, value: f64 },
    #[error("{field}: se esperaba 0 o 1, se recibió {value}")]
    InvalidFlag { field: ClinicalField, value: f64 },
    #[error("{field}: el valor no es finito")]
    NotFinite { field: ClinicalField },
}

pub type Result<T> = std::result::Result<T, CkdError>;
