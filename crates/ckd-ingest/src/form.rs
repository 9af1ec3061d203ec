//! Decoding of the single-record evaluation form.
//!
//! Categorical answers arrive as the option labels shown in the form and are
//! encoded here the same way the training data was encoded.

use std::collections::HashMap;

use ckd_model::{ClinicalField, ClinicalRecord, FieldKind};

use crate::error::IngestError;

/// Builds a typed record from submitted form values.
pub fn decode_form(values: &HashMap<String, String>) -> Result<ClinicalRecord, IngestError> {
    let int = |field: ClinicalField| decode_integer(values, field);
    let float = |field: ClinicalField| decode_float(values, field);
    let flag = |field: ClinicalField| decode_flag(values, field);
    Ok(ClinicalRecord {
        age: int(ClinicalField::Age)?,
        sg: float(ClinicalField::Sg)?,
        al: int(ClinicalField::Al)?,
        su: int(ClinicalField::Su)?,
        sc: float(ClinicalField::Sc)?,
        bu: float(ClinicalField::Bu)?,
        bgr: int(ClinicalField::Bgr)?,
        hemo: float(ClinicalField::Hemo)?,
        pcv: int(ClinicalField::Pcv)?,
        rc: float(ClinicalField::Rc)?,
        wc: int(ClinicalField::Wc)?,
        dm: flag(ClinicalField::Dm)?,
        htn: flag(ClinicalField::Htn)?,
        ane: flag(ClinicalField::Ane)?,
        appet: flag(ClinicalField::Appet)?,
        rbc: flag(ClinicalField::Rbc)?,
        pc: flag(ClinicalField::Pc)?,
    })
}

const YES: &[&str] = &["Sí"];
const NO: &[&str] = &["No"];
const POOR: &[&str] = &["pobre"];
const GOOD: &[&str] = &["bueno"];
const ABNORMAL: &[&str] = &["anormal"];
const NORMAL: &[&str] = &["normal"];

/// Accepted answers for a flag field, as `(true_values, false_values)`.
///
/// The first entry of each list is the label the form offers.
pub fn flag_choices(field: ClinicalField) -> (&'static [&'static str], &'static [&'static str]) {
    match field {
        ClinicalField::Appet => (POOR, GOOD),
        ClinicalField::Rbc | ClinicalField::Pc => (ABNORMAL, NORMAL),
        _ => (YES, NO),
    }
}

fn raw<'a>(values: &'a HashMap<String, String>, field: ClinicalField) -> Result<&'a str, IngestError> {
    values
        .get(field.name())
        .map(|value| value.trim())
        .ok_or(IngestError::MissingField { field })
}

fn decode_integer(values: &HashMap<String, String>, field: ClinicalField) -> Result<i64, IngestError> {
    let value = raw(values, field)?;
    value.parse::<i64>().map_err(|_| IngestError::InvalidChoice {
        field,
        value: value.to_string(),
    })
}

fn decode_float(values: &HashMap<String, String>, field: ClinicalField) -> Result<f64, IngestError> {
    let value = raw(values, field)?;
    match value.parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => Ok(parsed),
        _ => Err(IngestError::InvalidChoice {
            field,
            value: value.to_string(),
        }),
    }
}

fn decode_flag(values: &HashMap<String, String>, field: ClinicalField) -> Result<bool, IngestError> {
    debug_assert_eq!(field.kind(), FieldKind::Flag);
    let value = raw(values, field)?;
    let (yes, no) = flag_choices(field);
    if yes.contains(&value) {
        Ok(true)
    } else if no.contains(&value) {
        Ok(false)
    } else {
        Err(IngestError::InvalidChoice {
            field,
            value: value.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitted() -> HashMap<String, String> {
        [
            ("age", "30"),
            ("sg", "1.010"),
            ("al", "0"),
            ("su", "0"),
            ("sc", "1.0"),
            ("bu", "30"),
            ("bgr", "100"),
            ("hemo", "12"),
            ("pcv", "40"),
            ("rc", "4.5"),
            ("wc", "7000"),
            ("dm", "Sí"),
            ("htn", "No"),
            ("ane", "No"),
            ("appet", "pobre"),
            ("rbc", "normal"),
            ("pc", "anormal"),
        ]
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect()
    }

    #[test]
    fn encodes_categorical_answers() {
        let record = decode_form(&submitted()).unwrap();
        assert!(record.dm);
        assert!(!record.htn);
        assert!(record.appet);
        assert!(!record.rbc);
        assert!(record.pc);
        assert_eq!(record.age, 30);
        assert!((record.sg - 1.01).abs() < 1e-12);
    }

    #[test]
    fn missing_field_is_reported() {
        let mut values = submitted();
        values.remove("hemo");
        assert!(matches!(
            decode_form(&values),
            Err(IngestError::MissingField {
                field: ClinicalField::Hemo
            })
        ));
    }

    #[test]
    fn fractional_age_is_rejected() {
        let mut values = submitted();
        values.insert("age".to_string(), "30.5".to_string());
        assert!(matches!(
            decode_form(&values),
            Err(IngestError::InvalidChoice {
                field: ClinicalField::Age,
                ..
            })
        ));
    }

    #[test]
    fn unknown_choice_is_rejected() {
        let mut values = submitted();
        values.insert("appet".to_string(), "regular".to_string());
        let err = decode_form(&values).unwrap_err();
        assert_eq!(err.to_string(), "valor 'regular' no válido para el campo 'appet'");
    }

    #[test]
    fn only_offered_labels_are_accepted() {
        for (field, value) in [("dm", "Si"), ("dm", "1"), ("htn", "0"), ("appet", "1"), ("rbc", "0")] {
            let mut values = submitted();
            values.insert(field.to_string(), value.to_string());
            assert!(
                matches!(decode_form(&values), Err(IngestError::InvalidChoice { .. })),
                "{field}={value}"
            );
        }
    }

    #[test]
    fn missing_field_message_is_spanish() {
        let mut values = submitted();
        values.remove("hemo");
        assert_eq!(
            decode_form(&values).unwrap_err().to_string(),
            "falta el campo 'hemo' en el formulario"
        );
    }
}
