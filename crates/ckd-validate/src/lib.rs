//! Validation of submitted clinical values and uploaded table schemas.
//!
//! Nothing here touches the classifier: a record or table that fails these
//! checks is rejected before it can reach the model.

mod fields;
mod issue;
mod range;
mod schema;

pub use fields::{validate_fields, validate_record};
pub use issue::FieldIssue;
pub use range::{FieldRange, RANGE_TABLE, range_for};
pub use schema::{MissingColumns, check_required_columns};
