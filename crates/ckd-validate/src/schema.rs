use std::collections::HashSet;

use thiserror::Error;

use ckd_model::REQUIRED_COLUMNS;

/// Required columns absent from an uploaded table.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Columnas faltantes: {}", .0.join(", "))]
pub struct MissingColumns(pub Vec<String>);

/// Checks that every required column is present, by exact name.
///
/// Missing names are reported in canonical order. Extra columns are ignored.
pub fn check_required_columns<I, S>(columns: I) -> Result<(), MissingColumns>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let present: HashSet<String> = columns
        .into_iter()
        .map(|name| name.as_ref().to_string())
        .collect();
    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|name| !present.contains(**name))
        .map(|name| (*name).to_string())
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(MissingColumns(missing))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_columns_present_in_any_order() {
        let mut columns: Vec<&str> = REQUIRED_COLUMNS.iter().rev().copied().collect();
        columns.push("id");
        assert_eq!(check_required_columns(columns), Ok(()));
    }

    #[test]
    fn reports_missing_columns_in_canonical_order() {
        let columns = REQUIRED_COLUMNS
            .iter()
            .filter(|name| !matches!(**name, "pc" | "age"));
        let err = check_required_columns(columns).unwrap_err();
        assert_eq!(err.0, vec!["age".to_string(), "pc".to_string()]);
        assert_eq!(err.to_string(), "Columnas faltantes: age, pc");
    }

    #[test]
    fn column_match_is_case_sensitive() {
        let columns = REQUIRED_COLUMNS
            .iter()
            .map(|name| if *name == "hemo" { "HEMO" } else { *name });
        let err = check_required_columns(columns).unwrap_err();
        assert_eq!(err.0, vec!["hemo".to_string()]);
    }
}
