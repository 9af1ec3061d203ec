//! Clinical measurement identifiers.
//!
//! The classifier consumes exactly seventeen measurements. Their column names
//! are part of the CSV upload contract and of the form field names, so they
//! are matched case-sensitively everywhere.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CkdError;

/// Numeric kind declared for a measurement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// Whole number (counts, grades, ages).
    Integer,
    /// Real-valued laboratory measurement.
    Float,
    /// Binary indicator encoded as 0 or 1.
    Flag,
}

/// One of the seventeen clinical measurements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClinicalField {
    Age,
    Sg,
    Al,
    Su,
    Sc,
    Bu,
    Bgr,
    Hemo,
    Pcv,
    Rc,
    Wc,
    Dm,
    Htn,
    Ane,
    Appet,
    Rbc,
    Pc,
}

/// Required CSV column names, in canonical order.
pub const REQUIRED_COLUMNS: [&str; 17] = [
    "age", "sg", "al", "su", "sc", "bu", "bgr", "hemo", "pcv", "rc", "wc", "dm", "htn", "ane",
    "appet", "rbc", "pc",
];

impl ClinicalField {
    /// All fields in canonical order.
    pub const ALL: [ClinicalField; 17] = [
        ClinicalField::Age,
        ClinicalField::Sg,
        ClinicalField::Al,
        ClinicalField::Su,
        ClinicalField::Sc,
        ClinicalField::Bu,
        ClinicalField::Bgr,
        ClinicalField::Hemo,
        ClinicalField::Pcv,
        ClinicalField::Rc,
        ClinicalField::Wc,
        ClinicalField::Dm,
        ClinicalField::Htn,
        ClinicalField::Ane,
        ClinicalField::Appet,
        ClinicalField::Rbc,
        ClinicalField::Pc,
    ];

    /// Column / form field name.
    pub const fn name(self) -> &'static str {
        REQUIRED_COLUMNS[self.index()]
    }

    /// Position in canonical order.
    pub const fn index(self) -> usize {
        self as usize
    }

    pub const fn kind(self) -> FieldKind {
        match self {
            Self::Sg | Self::Sc | Self::Bu | Self::Hemo | Self::Rc => FieldKind::Float,
            Self::Dm | Self::Htn | Self::Ane | Self::Appet | Self::Rbc | Self::Pc => {
                FieldKind::Flag
            }
            Self::Age | Self::Al | Self::Su | Self::Bgr | Self::Pcv | Self::Wc => {
                FieldKind::Integer
            }
        }
    }

    /// Question shown next to the form input.
    pub const fn prompt(self) -> &'static str {
        match self {
            Self::Age => "¿Cuál es su edad?",
            Self::Sg => "¿Cuál es su gravedad específica urinaria?",
            Self::Al => "¿Cuál es su nivel de albúmina en orina?",
            Self::Su => "¿Cuál es su nivel de azúcar en orina?",
            Self::Sc => "¿Cuál es su nivel de creatinina sérica? (mg/dl)",
            Self::Bu => "¿Cuál es su nivel de urea? (mg/dl)",
            Self::Bgr => "¿Cuál es su nivel de glucosa en sangre? (mg/dl)",
            Self::Hemo => "¿Cuál es su nivel de hemoglobina? (g/dl)",
            Self::Pcv => "¿Cuál es su volumen celular empaquetado (PCV)? (%)",
            Self::Rc => "¿Cuál es su conteo de glóbulos rojos? (millones/cmm)",
            Self::Wc => "¿Cuál es su conteo de glóbulos blancos? (células/cmm)",
            Self::Dm => "¿Tiene antecedentes de diabetes?",
            Self::Htn => "¿Tiene antecedentes de hipertensión?",
            Self::Ane => "¿Presenta anemia diagnosticada?",
            Self::Appet => "¿Cómo describiría su apetito?",
            Self::Rbc => "¿Qué forma tienen sus glóbulos rojos?",
            Self::Pc => "¿Cuál es su condición de células del sedimento urinario?",
        }
    }

    /// Case-sensitive lookup by column name.
    pub fn from_name(name: &str) -> Option<Self> {
        REQUIRED_COLUMNS
            .iter()
            .position(|column| *column == name)
            .map(|idx| Self::ALL[idx])
    }
}

impl fmt::Display for ClinicalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ClinicalField {
    type Err = CkdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s).ok_or_else(|| CkdError::UnknownField(s.to_string()))
    }
}
