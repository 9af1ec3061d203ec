//! Boundary parsing: everything that turns untrusted input into typed data.
//!
//! Uploaded CSV bytes and the reference dataset become Polars frames, frame
//! rows and submitted forms become [`ckd_model::ClinicalRecord`]s.

mod reader;
mod error;
mod form;
mod records;

pub use reader::{is_csv_filename, read_csv_bytes, read_csv_file};
pub use error::IngestError;
pub use form::{decode_form, flag_choices};
pub use records::extract_records;
