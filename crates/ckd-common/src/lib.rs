//! Shared utilities for the CKD screening workspace.
//!
//! Cell conversions between Polars values and the plain numbers and strings
//! the validator, predictors and report code work with, plus the PHI
//! redaction switch consulted by every crate that logs patient values.

pub mod polars;
pub mod redact;

pub use polars::{any_to_f64, any_to_string, format_numeric, is_numeric_dtype, parse_f64};
pub use redact::{REDACTED_VALUE, log_data_enabled, redact_value, set_log_data};
