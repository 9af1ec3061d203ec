use ckd_predict::{BatchPredictor, Classifier, ModelHandle};
use ckd_report::DatasetHandle;
use polars::prelude::DataFrame;

/// Default request body limit for CSV uploads (16 MiB).
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 16 * 1024 * 1024;

/// Read-only state shared by every request.
///
/// Handles are resolved once at startup; an absent handle stays absent for
/// the life of the process.
#[derive(Debug)]
pub struct AppState {
    pub model: ModelHandle,
    pub dataset: DatasetHandle,
    pub batch: BatchPredictor,
    pub max_upload_bytes: usize,
}

impl AppState {
    pub fn new(model: ModelHandle, dataset: DatasetHandle, batch: BatchPredictor) -> Self {
        Self {
            model,
            dataset,
            batch,
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }

    pub fn with_max_upload_bytes(mut self, bytes: usize) -> Self {
        self.max_upload_bytes = bytes;
        self
    }

    pub fn model(&self) -> Option<&dyn Classifier> {
        self.model.as_deref()
    }

    pub fn dataset(&self) -> Option<&DataFrame> {
        self.dataset.as_deref()
    }
}
