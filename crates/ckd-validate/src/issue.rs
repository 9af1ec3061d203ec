use std::fmt;

use serde::{Deserialize, Serialize};

use ckd_common::format_numeric;
use ckd_model::ClinicalField;

/// Problem with one submitted field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FieldIssue {
    /// Value parsed but falls outside the declared range.
    OutOfRange {
        field: ClinicalField,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Value could not be parsed as a number.
    NotNumeric { field: ClinicalField, raw: String },
}

impl FieldIssue {
    pub fn field(&self) -> ClinicalField {
        match self {
            Self::OutOfRange { field, .. } | Self::NotNumeric { field, .. } => *field,
        }
    }

    pub fn is_range_error(&self) -> bool {
        matches!(self, Self::OutOfRange { .. })
    }
}

impl fmt::Display for FieldIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange {
                field,
                value,
                min,
                max,
            } => write!(
                f,
                "{field}: valor {} fuera del rango válido ({}-{})",
                format_numeric(*value),
                format_numeric(*min),
                format_numeric(*max)
            ),
            Self::NotNumeric { field, raw } => {
                write!(f, "{field}: valor '{raw}' no es numérico")
            }
        }
    }
}
