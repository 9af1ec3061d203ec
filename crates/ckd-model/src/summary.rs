//! Descriptive statistics of the reference dataset.

use serde::{Deserialize, Serialize};

/// Column names recognised as the diagnosis target, in lookup order.
pub const TARGET_COLUMNS: [&str; 2] = ["classification", "class"];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    pub dtype: String,
    pub null_count: usize,
}

/// Statistics over the non-null values of a numeric column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericStats {
    pub name: String,
    pub count: usize,
    pub mean: Option<f64>,
    /// Sample standard deviation; `None` below two values.
    pub std: Option<f64>,
    pub min: Option<f64>,
    pub p25: Option<f64>,
    pub median: Option<f64>,
    pub p75: Option<f64>,
    pub max: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassDistribution {
    pub column: String,
    /// `(value, count)` pairs, most frequent first.
    pub counts: Vec<(String, usize)>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetSummary {
    pub row_count: usize,
    pub column_count: usize,
    pub columns: Vec<ColumnInfo>,
    pub numeric: Vec<NumericStats>,
    pub class_distribution: Option<ClassDistribution>,
}

impl DatasetSummary {
    pub fn total_nulls(&self) -> usize {
        self.columns.iter().map(|column| column.null_count).sum()
    }
}
