//! Prediction outcomes for single records and CSV batches.

use serde::{Deserialize, Serialize};

/// Class label the classifier uses for chronic kidney disease.
pub const POSITIVE_CLASS: i64 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskLabel {
    Positive,
    Negative,
}

impl RiskLabel {
    pub fn from_class(class: i64) -> Self {
        if class == POSITIVE_CLASS {
            Self::Positive
        } else {
            Self::Negative
        }
    }

    /// CSS style used when rendering the label.
    pub const fn style(self) -> &'static str {
        match self {
            Self::Positive => "danger",
            Self::Negative => "success",
        }
    }

    pub const fn text(self) -> &'static str {
        match self {
            Self::Positive => "Alto riesgo de ERC",
            Self::Negative => "Sin indicios de ERC",
        }
    }
}

/// Predicted label with the probability the model assigned to it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub label: RiskLabel,
    /// Probability of the predicted class, in `[0, 1]`.
    pub probability: f64,
    /// `probability` as a whole percent, truncated.
    pub confidence: u8,
}

impl PredictionResult {
    pub fn new(label: RiskLabel, probability: f64) -> Self {
        let probability = if probability.is_nan() {
            0.0
        } else {
            probability.clamp(0.0, 1.0)
        };
        Self {
            label,
            probability,
            confidence: (probability * 100.0) as u8,
        }
    }
}

/// Outcome of assessing one submitted record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Assessment {
    Scored { result: PredictionResult },
    /// Submitted values failed validation; the model was not consulted.
    Invalid { issues: Vec<String> },
    /// No model was loaded at startup.
    Unavailable,
    Failed { message: String },
}

impl Assessment {
    pub fn confidence(&self) -> u8 {
        match self {
            Self::Scored { result } => result.confidence,
            _ => 0,
        }
    }

    pub fn style(&self) -> &'static str {
        match self {
            Self::Scored { result } => result.label.style(),
            Self::Invalid { .. } => "warning",
            Self::Unavailable | Self::Failed { .. } => "danger",
        }
    }

    /// Headline shown to the user.
    pub fn message(&self) -> String {
        match self {
            Self::Scored { result } => result.label.text().to_string(),
            Self::Invalid { issues } => format!("Datos fuera de rango: {}", issues.join(", ")),
            Self::Unavailable => "Error: Modelo no disponible".to_string(),
            Self::Failed { message } => format!("Error al procesar la evaluación: {message}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchEntry {
    /// 1-based row number in the uploaded file.
    pub row: usize,
    pub result: PredictionResult,
}

/// Scored rows of one CSV upload plus aggregate counts.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BatchResult {
    pub entries: Vec<BatchEntry>,
    pub positive_count: usize,
    pub negative_count: usize,
    pub total_rows: usize,
}

impl BatchResult {
    pub fn from_entries(entries: Vec<BatchEntry>) -> Self {
        let positive_count = entries
            .iter()
            .filter(|entry| entry.result.label == RiskLabel::Positive)
            .count();
        let total_rows = entries.len();
        Self {
            entries,
            positive_count,
            negative_count: total_rows - positive_count,
            total_rows,
        }
    }
}
