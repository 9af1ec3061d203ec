//! Classifier seam and the prediction pipelines built on it.
//!
//! The model is an opaque [`Classifier`]; everything in this crate only relies
//! on its feature names, class labels, `predict` and `predict_proba`. A model
//! that failed to load is represented as `None` and every entry point treats
//! that as "prediction unavailable".

pub mod batch;
pub mod classifier;
pub mod error;
pub mod loader;
pub mod logistic;
pub mod single;

pub use batch::{BatchError, BatchOptions, BatchPredictor};
pub use classifier::{Classifier, ModelHandle, feature_row, score_rows};
pub use error::{ModelError, PredictError};
pub use loader::{load_model, load_model_handle, sha256_hex};
pub use logistic::{LogisticArtifact, LogisticModel, StandardScaler};
pub use single::{assess_form, predict_record, score_record};
