use std::fmt;
use std::sync::Arc;

use ckd_model::{ClinicalField, ClinicalRecord, PredictionResult, RiskLabel};

use crate::error::PredictError;

/// A trained binary classifier over the clinical feature set.
///
/// Rows passed to `predict` and `predict_proba` hold one value per entry of
/// [`Classifier::feature_names`], in that order. Probability vectors are
/// ordered like [`Classifier::classes`].
pub trait Classifier: Send + Sync + fmt::Debug {
    fn feature_names(&self) -> &[String];

    fn classes(&self) -> &[i64];

    fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, PredictError>;

    /// Class with the highest probability per row; ties go to the earlier class.
    fn predict(&self, rows: &[Vec<f64>]) -> Result<Vec<i64>, PredictError> {
        let classes = self.classes();
        self.predict_proba(rows)?
            .iter()
            .map(|proba| {
                if proba.len() != classes.len() {
                    return Err(PredictError::OutputLength {
                        expected: classes.len(),
                        actual: proba.len(),
                    });
                }
                let mut best = 0;
                for (idx, p) in proba.iter().enumerate() {
                    if *p > proba[best] {
                        best = idx;
                    }
                }
                Ok(classes[best])
            })
            .collect()
    }
}

/// Loaded model, or `None` when loading failed at startup.
pub type ModelHandle = Option<Arc<dyn Classifier>>;

/// Lays out a record's values in the model's feature order.
pub fn feature_row(
    model: &dyn Classifier,
    record: &ClinicalRecord,
) -> Result<Vec<f64>, PredictError> {
    model
        .feature_names()
        .iter()
        .map(|name| {
            ClinicalField::from_name(name)
                .map(|field| record.value(field))
                .ok_or_else(|| PredictError::UnknownFeature(name.clone()))
        })
        .collect()
}

/// Runs `predict` and `predict_proba` once over all rows and pairs each
/// predicted class with the probability the model gave that class.
pub fn score_rows(
    model: &dyn Classifier,
    rows: &[Vec<f64>],
) -> Result<Vec<PredictionResult>, PredictError> {
    let predicted = model.predict(rows)?;
    let probabilities = model.predict_proba(rows)?;
    if predicted.len() != rows.len() {
        return Err(PredictError::OutputLength {
            expected: rows.len(),
            actual: predicted.len(),
        });
    }
    if probabilities.len() != rows.len() {
        return Err(PredictError::OutputLength {
            expected: rows.len(),
            actual: probabilities.len(),
        });
    }
    let classes = model.classes();
    predicted
        .iter()
        .zip(&probabilities)
        .map(|(class, proba)| {
            let idx = classes
                .iter()
                .position(|c| c == class)
                .ok_or(PredictError::UnknownClass(*class))?;
            let probability = proba.get(idx).copied().ok_or(PredictError::OutputLength {
                expected: classes.len(),
                actual: proba.len(),
            })?;
            Ok(PredictionResult::new(RiskLabel::from_class(*class), probability))
        })
        .collect()
}
