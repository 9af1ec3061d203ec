use std::path::Path;
use std::sync::Arc;

use polars::prelude::DataFrame;
use tracing::{error, info};

use ckd_ingest::{IngestError, read_csv_file};

/// Reference dataset, or `None` when loading failed at startup.
pub type DatasetHandle = Option<Arc<DataFrame>>;

pub fn load_dataset(path: &Path) -> Result<DataFrame, IngestError> {
    read_csv_file(path)
}

/// Loads the reference dataset once; failures are logged and yield `None`.
pub fn load_dataset_handle(path: &Path) -> DatasetHandle {
    match load_dataset(path) {
        Ok(df) => {
            info!(
                path = %path.display(),
                rows = df.height(),
                columns = df.width(),
                "reference dataset loaded"
            );
            Some(Arc::new(df))
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "reference dataset unavailable");
            None
        }
    }
}
