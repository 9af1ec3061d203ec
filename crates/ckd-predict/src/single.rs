//! Scoring of one submitted record.

use std::collections::HashMap;

use tracing::{debug, warn};

use ckd_ingest::decode_form;
use ckd_model::{Assessment, ClinicalRecord, PredictionResult};
use ckd_validate::validate_fields;

use crate::classifier::{Classifier, feature_row, score_rows};
use crate::error::PredictError;

/// Scores a single record as a one-row feature matrix.
pub fn predict_record(
    model: &dyn Classifier,
    record: &ClinicalRecord,
) -> Result<PredictionResult, PredictError> {
    let row = feature_row(model, record)?;
    let scored = score_rows(model, &[row])?;
    scored
        .into_iter()
        .next()
        .ok_or(PredictError::OutputLength {
            expected: 1,
            actual: 0,
        })
}

/// Scores a record that already passed validation.
pub fn score_record(model: Option<&dyn Classifier>, record: &ClinicalRecord) -> Assessment {
    let Some(model) = model else {
        return Assessment::Unavailable;
    };
    match predict_record(model, record) {
        Ok(result) => {
            debug!(label = ?result.label, confidence = result.confidence, "record scored");
            Assessment::Scored { result }
        }
        Err(err) => {
            warn!(error = %err, "record scoring failed");
            Assessment::Failed {
                message: err.to_string(),
            }
        }
    }
}

/// Full evaluation of a submitted form: model availability, range checks,
/// decoding, then scoring.
pub fn assess_form(model: Option<&dyn Classifier>, values: &HashMap<String, String>) -> Assessment {
    if model.is_none() {
        return Assessment::Unavailable;
    }
    let issues = validate_fields(values);
    if !issues.is_empty() {
        debug!(issues = issues.len(), "form rejected by range checks");
        return Assessment::Invalid {
            issues: issues.iter().map(ToString::to_string).collect(),
        };
    }
    match decode_form(values) {
        Ok(record) => score_record(model, &record),
        Err(err) => {
            warn!("form could not be decoded");
            Assessment::Failed {
                message: err.to_string(),
            }
        }
    }
}
