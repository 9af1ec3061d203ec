use std::collections::HashMap;

use ckd_common::parse_f64;
use ckd_model::ClinicalRecord;

use crate::issue::FieldIssue;
use crate::range::RANGE_TABLE;

/// Checks raw submitted values against the range table.
///
/// Only fields with a declared range are looked at, in table order; absent
/// fields are skipped. Returns one issue per failing field.
pub fn validate_fields(values: &HashMap<String, String>) -> Vec<FieldIssue> {
    let mut issues = Vec::new();
    for range in &RANGE_TABLE {
        let Some(raw) = values.get(range.field.name()) else {
            continue;
        };
        match parse_f64(raw) {
            Some(value) if range.contains(value) => {}
            Some(value) => issues.push(FieldIssue::OutOfRange {
                field: range.field,
                value,
                min: range.min,
                max: range.max,
            }),
            None => issues.push(FieldIssue::NotNumeric {
                field: range.field,
                raw: raw.trim().to_string(),
            }),
        }
    }
    issues
}

/// Range checks for an already typed record.
pub fn validate_record(record: &ClinicalRecord) -> Vec<FieldIssue> {
    RANGE_TABLE
        .iter()
        .filter_map(|range| {
            let value = record.value(range.field);
            (!range.contains(value)).then_some(FieldIssue::OutOfRange {
                field: range.field,
                value,
                min: range.min,
                max: range.max,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ckd_model::ClinicalField;

    fn form(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn unranged_fields_are_never_checked() {
        let issues = validate_fields(&form(&[("dm", "7"), ("appet", "nope")]));
        assert!(issues.is_empty());
    }

    #[test]
    fn not_numeric_is_distinct_from_out_of_range() {
        let issues = validate_fields(&form(&[("age", "abc"), ("sc", "25")]));
        assert_eq!(issues.len(), 2);
        assert_eq!(
            issues[0],
            FieldIssue::NotNumeric {
                field: ClinicalField::Age,
                raw: "abc".to_string()
            }
        );
        assert!(issues[1].is_range_error());
    }

    #[test]
    fn issues_follow_table_order() {
        let issues = validate_fields(&form(&[("wc", "100"), ("age", "0"), ("hemo", "25")]));
        let fields: Vec<ClinicalField> = issues.iter().map(FieldIssue::field).collect();
        assert_eq!(
            fields,
            vec![ClinicalField::Age, ClinicalField::Hemo, ClinicalField::Wc]
        );
    }
}
