use ckd_model::ClinicalField;

/// Inclusive valid interval for one measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldRange {
    pub field: ClinicalField,
    pub min: f64,
    pub max: f64,
}

impl FieldRange {
    const fn new(field: ClinicalField, min: f64, max: f64) -> Self {
        Self { field, min, max }
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

/// Ranges observed in the training data. Checked in this order.
pub const RANGE_TABLE: [FieldRange; 11] = [
    FieldRange::new(ClinicalField::Age, 1.0, 120.0),
    FieldRange::new(ClinicalField::Sg, 1.005, 1.025),
    FieldRange::new(ClinicalField::Al, 0.0, 5.0),
    FieldRange::new(ClinicalField::Su, 0.0, 5.0),
    FieldRange::new(ClinicalField::Sc, 0.1, 20.0),
    FieldRange::new(ClinicalField::Bu, 1.0, 200.0),
    FieldRange::new(ClinicalField::Bgr, 50.0, 500.0),
    FieldRange::new(ClinicalField::Hemo, 3.0, 20.0),
    FieldRange::new(ClinicalField::Pcv, 10.0, 60.0),
    FieldRange::new(ClinicalField::Rc, 2.0, 8.0),
    FieldRange::new(ClinicalField::Wc, 2000.0, 30000.0),
];

/// Declared range for a field, if it has one. Flags never do.
pub fn range_for(field: ClinicalField) -> Option<&'static FieldRange> {
    RANGE_TABLE.iter().find(|range| range.field == field)
}
