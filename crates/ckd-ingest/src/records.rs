use polars::prelude::{AnyValue, Column, DataFrame};

use ckd_common::{any_to_f64, any_to_string};
use ckd_model::{ClinicalField, ClinicalRecord};

use crate::error::IngestError;

/// Converts every row of `df` into a typed record.
///
/// Only the seventeen required columns are read; anything else in the frame
/// is ignored. The first bad cell aborts the whole extraction. Row numbers in
/// errors are 1-based.
pub fn extract_records(df: &DataFrame) -> Result<Vec<ClinicalRecord>, IngestError> {
    let columns = ClinicalField::ALL
        .iter()
        .map(|field| {
            df.column(field.name())
                .map_err(|_| IngestError::ColumnNotFound { column: *field })
        })
        .collect::<Result<Vec<&Column>, _>>()?;

    let mut records = Vec::with_capacity(df.height());
    for idx in 0..df.height() {
        let row = idx + 1;
        let mut values = [0.0f64; 17];
        for (field, column) in ClinicalField::ALL.iter().zip(&columns) {
            let cell = column.get(idx).unwrap_or(AnyValue::Null);
            values[field.index()] = cell_to_f64(row, *field, cell)?;
        }
        let record = ClinicalRecord::from_values(&values)
            .map_err(|source| IngestError::InvalidRow { row, source })?;
        records.push(record);
    }
    Ok(records)
}

fn cell_to_f64(row: usize, column: ClinicalField, cell: AnyValue<'_>) -> Result<f64, IngestError> {
    if matches!(cell, AnyValue::Null) {
        return Err(IngestError::MissingValue { row, column });
    }
    let text = any_to_string(cell.clone());
    if text.is_empty() {
        return Err(IngestError::MissingValue { row, column });
    }
    any_to_f64(cell).ok_or(IngestError::NotNumeric {
        row,
        column,
        value: text,
    })
}
