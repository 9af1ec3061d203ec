//! Binary logistic regression loaded from a JSON artifact.
//!
//! The artifact carries everything needed to reproduce the trained model's
//! `predict_proba`:
//!
//! ```json
//! {
//!   "feature_names": ["age", "sg", "..."],
//!   "classes": [0, 1],
//!   "coefficients": [0.012, -3.1, "..."],
//!   "intercept": -1.7,
//!   "scaler": { "mean": [51.2, "..."], "scale": [17.1, "..."] }
//! }
//! ```
//!
//! `scaler` is optional; when present each feature is standardized as
//! `(x - mean) / scale` before the linear term.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use ckd_model::{ClinicalField, POSITIVE_CLASS, REQUIRED_COLUMNS};

use crate::classifier::Classifier;
use crate::error::{ModelError, PredictError};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandardScaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogisticArtifact {
    pub feature_names: Vec<String>,
    pub classes: Vec<i64>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<StandardScaler>,
}

#[derive(Debug, Clone)]
pub struct LogisticModel {
    artifact: LogisticArtifact,
}

impl LogisticModel {
    /// Checks the artifact is a two-class model over exactly the clinical features.
    pub fn from_artifact(artifact: LogisticArtifact) -> Result<Self, ModelError> {
        let width = artifact.feature_names.len();
        let names: HashSet<&str> = artifact.feature_names.iter().map(String::as_str).collect();
        if names.len() != width {
            return Err(ModelError::invalid("duplicate feature names"));
        }
        if let Some(unknown) = artifact
            .feature_names
            .iter()
            .find(|name| ClinicalField::from_name(name).is_none())
        {
            return Err(ModelError::invalid(format!("unknown feature '{unknown}'")));
        }
        let missing: Vec<&str> = REQUIRED_COLUMNS
            .iter()
            .copied()
            .filter(|name| !names.contains(name))
            .collect();
        if !missing.is_empty() {
            return Err(ModelError::invalid(format!(
                "missing features: {}",
                missing.join(", ")
            )));
        }

        let classes = &artifact.classes;
        if classes.len() != 2 || classes[0] == classes[1] {
            return Err(ModelError::invalid(format!(
                "expected two distinct classes, got {classes:?}"
            )));
        }
        if !classes.contains(&POSITIVE_CLASS) {
            return Err(ModelError::invalid(format!(
                "classes {classes:?} do not include the positive class {POSITIVE_CLASS}"
            )));
        }

        if artifact.coefficients.len() != width {
            return Err(ModelError::invalid(format!(
                "{} coefficients for {width} features",
                artifact.coefficients.len()
            )));
        }
        if !artifact.intercept.is_finite() || artifact.coefficients.iter().any(|w| !w.is_finite())
        {
            return Err(ModelError::invalid("non-finite coefficients"));
        }
        if let Some(scaler) = &artifact.scaler {
            if scaler.mean.len() != width || scaler.scale.len() != width {
                return Err(ModelError::invalid("scaler length does not match features"));
            }
            if scaler
                .scale
                .iter()
                .any(|s| !s.is_finite() || *s == 0.0)
            {
                return Err(ModelError::invalid("scaler has zero or non-finite scale"));
            }
        }
        Ok(Self { artifact })
    }

    pub fn artifact(&self) -> &LogisticArtifact {
        &self.artifact
    }

    fn decision(&self, row: &[f64]) -> f64 {
        let mut z = self.artifact.intercept;
        for (idx, (x, w)) in row.iter().zip(&self.artifact.coefficients).enumerate() {
            let x = match &self.artifact.scaler {
                Some(scaler) => (x - scaler.mean[idx]) / scaler.scale[idx],
                None => *x,
            };
            z += w * x;
        }
        z
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticModel {
    fn feature_names(&self) -> &[String] {
        &self.artifact.feature_names
    }

    fn classes(&self) -> &[i64] {
        &self.artifact.classes
    }

    fn predict_proba(&self, rows: &[Vec<f64>]) -> Result<Vec<Vec<f64>>, PredictError> {
        let width = self.artifact.feature_names.len();
        rows.iter()
            .enumerate()
            .map(|(idx, row)| {
                if row.len() != width {
                    return Err(PredictError::RowWidth {
                        expected: width,
                        actual: row.len(),
                    });
                }
                if row.iter().any(|x| !x.is_finite()) {
                    return Err(PredictError::NonFinite { row: idx + 1 });
                }
                // Probability of the second listed class.
                let p = sigmoid(self.decision(row));
                Ok(vec![1.0 - p, p])
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artifact() -> LogisticArtifact {
        LogisticArtifact {
            feature_names: REQUIRED_COLUMNS.iter().map(|s| (*s).to_string()).collect(),
            classes: vec![0, 1],
            coefficients: vec![0.0; 17],
            intercept: 0.0,
            scaler: None,
        }
    }

    #[test]
    fn zero_weights_give_even_odds() {
        let model = LogisticModel::from_artifact(artifact()).unwrap();
        let proba = model.predict_proba(&[vec![1.0; 17]]).unwrap();
        assert_eq!(proba, vec![vec![0.5, 0.5]]);
        assert_eq!(model.predict(&[vec![1.0; 17]]).unwrap(), vec![0]);
    }

    #[test]
    fn scaler_standardizes_before_linear_term() {
        let mut a = artifact();
        a.coefficients[ClinicalField::Sc.index()] = 2.0;
        a.scaler = Some(StandardScaler {
            mean: vec![1.0; 17],
            scale: vec![0.5; 17],
        });
        let model = LogisticModel::from_artifact(a).unwrap();
        let mut row = vec![1.0; 17];
        row[ClinicalField::Sc.index()] = 1.5;
        // (1.5 - 1.0) / 0.5 * 2.0 = 2.0
        let proba = model.predict_proba(&[row]).unwrap();
        assert!((proba[0][1] - sigmoid(2.0)).abs() < 1e-12);
        assert!((proba[0][0] + proba[0][1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn sigmoid_is_stable_at_extremes() {
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
        assert!((sigmoid(0.0) - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_missing_feature() {
        let mut a = artifact();
        a.feature_names[16] = "bp".to_string();
        let err = LogisticModel::from_artifact(a).unwrap_err();
        assert!(err.to_string().contains("unknown feature 'bp'"));
    }

    #[test]
    fn rejects_classes_without_positive_label() {
        let mut a = artifact();
        a.classes = vec![0, 2];
        assert!(LogisticModel::from_artifact(a).is_err());
    }

    #[test]
    fn rejects_coefficient_length_mismatch() {
        let mut a = artifact();
        a.coefficients.pop();
        assert!(LogisticModel::from_artifact(a).is_err());
    }

    #[test]
    fn rejects_zero_scale() {
        let mut a = artifact();
        a.scaler = Some(StandardScaler {
            mean: vec![0.0; 17],
            scale: vec![0.0; 17],
        });
        assert!(LogisticModel::from_artifact(a).is_err());
    }

    #[test]
    fn wrong_row_width_is_an_error() {
        let model = LogisticModel::from_artifact(artifact()).unwrap();
        assert_eq!(
            model.predict_proba(&[vec![1.0; 3]]),
            Err(PredictError::RowWidth {
                expected: 17,
                actual: 3
            })
        );
    }
}
