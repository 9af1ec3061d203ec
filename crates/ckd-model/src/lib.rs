pub mod error;
pub mod field;
pub mod prediction;
pub mod record;
pub mod summary;

pub use error::{CkdError, Result};
pub use field::{ClinicalField, FieldKind, REQUIRED_COLUMNS};
pub use prediction::{
    Assessment, BatchEntry, BatchResult, POSITIVE_CLASS, PredictionResult, RiskLabel,
};
pub use record::ClinicalRecord;
pub use summary::{ClassDistribution, ColumnInfo, DatasetSummary, NumericStats, TARGET_COLUMNS};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn batch_result_serializes() {
        let result = BatchResult::from_entries(vec![BatchEntry {
            row: 1,
            result: PredictionResult::new(RiskLabel::Positive, 0.91),
        }]);
        let json = serde_json::to_string(&result).expect("serialize batch");
        let round: BatchResult = serde_json::from_str(&json).expect("deserialize batch");
        assert_eq!(round.total_rows, 1);
        assert_eq!(round.entries[0].result.confidence, 91);
    }
}
