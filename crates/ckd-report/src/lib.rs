//! Reporting over the reference dataset and scored batches.
//!
//! - **Dataset**: startup loading of the reference CSV
//! - **Summary**: descriptive statistics recomputed on every request
//! - **Export**: per-row batch results as CSV

mod dataset;
mod export;
mod summary;

pub use dataset::{DatasetHandle, load_dataset, load_dataset_handle};
pub use export::{ExportError, write_batch_csv, write_batch_csv_file};
pub use summary::{SummaryError, summarize, summarize_handle};
