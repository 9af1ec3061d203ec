use serde::{Deserialize, Serialize};

use crate::error::{CkdError, Result};
use crate::field::{ClinicalField, FieldKind};

/// One patient's measurements, with categorical answers already encoded.
///
/// Flags follow the encoding the classifier was trained on:
/// `dm`/`htn`/`ane` are true for "Sí", `appet` is true for a poor appetite,
/// `rbc`/`pc` are true for abnormal findings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClinicalRecord {
    pub age: i64,
    pub sg: f64,
    pub al: i64,
    pub su: i64,
    pub sc: f64,
    pub bu: f64,
    pub bgr: i64,
    pub hemo: f64,
    pub pcv: i64,
    pub rc: f64,
    pub wc: i64,
    pub dm: bool,
    pub htn: bool,
    pub ane: bool,
    pub appet: bool,
    pub rbc: bool,
    pub pc: bool,
}

impl ClinicalRecord {
    /// Numeric value of a single field as the model sees it.
    pub fn value(&self, field: ClinicalField) -> f64 {
        match field {
            ClinicalField::Age => self.age as f64,
            ClinicalField::Sg => self.sg,
            ClinicalField::Al => self.al as f64,
            ClinicalField::Su => self.su as f64,
            ClinicalField::Sc => self.sc,
            ClinicalField::Bu => self.bu,
            ClinicalField::Bgr => self.bgr as f64,
            ClinicalField::Hemo => self.hemo,
            ClinicalField::Pcv => self.pcv as f64,
            ClinicalField::Rc => self.rc,
            ClinicalField::Wc => self.wc as f64,
            ClinicalField::Dm => flag(self.dm),
            ClinicalField::Htn => flag(self.htn),
            ClinicalField::Ane => flag(self.ane),
            ClinicalField::Appet => flag(self.appet),
            ClinicalField::Rbc => flag(self.rbc),
            ClinicalField::Pc => flag(self.pc),
        }
    }

    /// All values in canonical column order.
    pub fn features(&self) -> [f64; 17] {
        ClinicalField::ALL.map(|field| self.value(field))
    }

    /// Build a record from canonical-order values, checking each declared kind.
    pub fn from_values(values: &[f64; 17]) -> Result<Self> {
        let int = |field: ClinicalField| coerce_integer(field, values[field.index()]);
        let float = |field: ClinicalField| coerce_float(field, values[field.index()]);
        let bit = |field: ClinicalField| coerce_flag(field, values[field.index()]);
        Ok(Self {
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
            dm: bit(ClinicalField::Dm)?,
            htn: bit(ClinicalField::Htn)?,
            ane: bit(ClinicalField::Ane)?,
            appet: bit(ClinicalField::Appet)?,
            rbc: bit(ClinicalField::Rbc)?,
            pc: bit(ClinicalField::Pc)?,
        })
    }
}

fn flag(value: bool) -> f64 {
    if value { 1.0 } else { 0.0 }
}

fn coerce_float(field: ClinicalField, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(CkdError::NotFinite { field })
    }
}

fn coerce_integer(field: ClinicalField, value: f64) -> Result<i64> {
    let value = coerce_float(field, value)?;
    if value.fract() != 0.0 {
        return Err(CkdError::NotInteger { field, value });
    }
    Ok(value as i64)
}

fn coerce_flag(field: ClinicalField, value: f64) -> Result<bool> {
    debug_assert_eq!(field.kind(), FieldKind::Flag);
    match value {
        v if v == 0.0 => Ok(false),
        v if v == 1.0 => Ok(true),
        _ => Err(CkdError::InvalidFlag { field, value }),
    }
}
