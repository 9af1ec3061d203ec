//! Dataset summary statistics.

use std::collections::HashMap;

use polars::prelude::{
    AnyValue, ChunkAgg, ChunkQuantile, ChunkVar, Column, DataFrame, DataType, QuantileMethod,
};
use thiserror::Error;
use tracing::debug;

use ckd_common::{any_to_string, is_numeric_dtype};
use ckd_model::{ClassDistribution, ColumnInfo, DatasetSummary, NumericStats, TARGET_COLUMNS};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SummaryError {
    #[error("Dataset no disponible")]
    Unavailable,
}

/// Summary of an optional dataset handle.
pub fn summarize_handle(df: Option<&DataFrame>) -> Result<DatasetSummary, SummaryError> {
    df.map(summarize).ok_or(SummaryError::Unavailable)
}

/// Computes the summary from scratch.
pub fn summarize(df: &DataFrame) -> DatasetSummary {
    let columns: Vec<ColumnInfo> = df
        .get_columns()
        .iter()
        .map(|column| ColumnInfo {
            name: column.name().to_string(),
            dtype: column.dtype().to_string(),
            null_count: column.null_count(),
        })
        .collect();

    let numeric: Vec<NumericStats> = df
        .get_columns()
        .iter()
        .filter(|column| is_numeric_dtype(column.dtype()))
        .map(numeric_stats)
        .collect();

    let class_distribution = TARGET_COLUMNS
        .iter()
        .find_map(|name| df.column(name).ok())
        .map(class_distribution);

    debug!(
        rows = df.height(),
        columns = df.width(),
        numeric = numeric.len(),
        "dataset summary computed"
    );

    DatasetSummary {
        row_count: df.height(),
        column_count: df.width(),
        columns,
        numeric,
        class_distribution,
    }
}

fn cell(column: &Column, idx: usize) -> AnyValue<'_> {
    column.get(idx).unwrap_or(AnyValue::Null)
}

fn numeric_stats(column: &Column) -> NumericStats {
    let name = column.name().to_string();
    let floats = column.as_materialized_series().cast(&DataType::Float64);
    let Some(ca) = floats.as_ref().ok().and_then(|series| series.f64().ok()) else {
        return NumericStats {
            name,
            count: 0,
            mean: None,
            std: None,
            min: None,
            p25: None,
            median: None,
            p75: None,
            max: None,
        };
    };

    let count = ca.len() - ca.null_count();
    let quantile = |q: f64| ca.quantile(q, QuantileMethod::Linear).ok().flatten();
    NumericStats {
        name,
        count,
        mean: ca.mean(),
        std: if count > 1 { ca.std(1) } else { None },
        min: ca.min(),
        p25: quantile(0.25),
        median: quantile(0.5),
        p75: quantile(0.75),
        max: ca.max(),
    }
}

fn class_distribution(column: &Column) -> ClassDistribution {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for idx in 0..column.len() {
        let value = cell(column, idx);
        if matches!(value, AnyValue::Null) {
            continue;
        }
        *counts.entry(any_to_string(value)).or_default() += 1;
    }
    let mut counts: Vec<(String, usize)> = counts.into_iter().collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ClassDistribution {
        column: column.name().to_string(),
        counts,
    }
}
