use std::collections::HashMap;
use std::path::PathBuf;

use proptest::prelude::*;

use ckd_model::{Assessment, ClinicalRecord, RiskLabel};
use ckd_predict::{
    BatchOptions, BatchPredictor, Classifier, LogisticModel, assess_form, load_model,
    load_model_handle, predict_record, sha256_hex,
};

fn fixture() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/ckd_lr.json")
}

fn model() -> LogisticModel {
    load_model(&fixture(), None).expect("fixture model loads")
}

fn record(values: [f64; 17]) -> ClinicalRecord {
    ClinicalRecord::from_values(&values).expect("valid record")
}

const HEALTHY: [f64; 17] = [
    30.0, 1.020, 0.0, 0.0, 0.8, 25.0, 95.0, 15.0, 45.0, 5.2, 7000.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0,
];
const SICK: [f64; 17] = [
    65.0, 1.010, 3.0, 2.0, 4.5, 90.0, 210.0, 8.5, 25.0, 3.0, 11000.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0,
];

#[test]
fn healthy_profile_is_negative() {
    let result = predict_record(&model(), &record(HEALTHY)).unwrap();
    assert_eq!(result.label, RiskLabel::Negative);
    assert_eq!(result.confidence, 99);
}

#[test]
fn sick_profile_is_positive() {
    let result = predict_record(&model(), &record(SICK)).unwrap();
    assert_eq!(result.label, RiskLabel::Positive);
    assert!(result.probability > 0.99);
}

#[test]
fn form_submission_end_to_end() {
    let model = model();
    let form: HashMap<String, String> = [
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
        ("dm", "No"),
        ("htn", "No"),
        ("ane", "No"),
        ("appet", "bueno"),
        ("rbc", "normal"),
        ("pc", "normal"),
    ]
    .iter()
    .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
    .collect();
    let assessment = assess_form(Some(&model), &form);
    let Assessment::Scored { result } = &assessment else {
        panic!("expected a score, got {assessment:?}");
    };
    assert_eq!(result.label, RiskLabel::Negative);
    assert_eq!(result.confidence, 80);
    assert_eq!(assessment.style(), "success");
    assert_eq!(assess_form(Some(&model), &form), assessment);
}

#[test]
fn batch_matches_single_scoring() {
    let model = model();
    let header = ckd_model::REQUIRED_COLUMNS.join(",");
    let line = |values: &[f64; 17]| {
        values
            .iter()
            .map(|v| v.to_string())
            .collect::<Vec<_>>()
            .join(",")
    };
    let body = format!("{header},notes\n{},x\n{},y\n", line(&HEALTHY), line(&SICK));

    let batch = BatchPredictor::new(BatchOptions::default())
        .run(Some(&model), "lote.csv", body.as_bytes())
        .unwrap();
    assert_eq!(batch.total_rows, 2);
    assert_eq!(batch.positive_count, 1);
    assert_eq!(batch.negative_count, 1);
    assert_eq!(
        batch.entries[0].result,
        predict_record(&model, &record(HEALTHY)).unwrap()
    );
    assert_eq!(
        batch.entries[1].result,
        predict_record(&model, &record(SICK)).unwrap()
    );
}

#[test]
fn late_decimal_in_long_upload_is_scored() {
    let model = model();
    let whole = "30,1.02,0,0,1,25,95,15,45,5.2,7000,0,0,0,0,0,0";
    let mut body = ckd_model::REQUIRED_COLUMNS.join(",");
    for _ in 0..1200 {
        body.push('\n');
        body.push_str(whole);
    }
    body.push_str("\n30,1.02,0,0,1.5,25,95,15,45,5.2,7000,0,0,0,0,0,0\n");

    let batch = BatchPredictor::new(BatchOptions::default())
        .run(Some(&model), "grande.csv", body.as_bytes())
        .unwrap();
    assert_eq!(batch.total_rows, 1201);
    assert_eq!(batch.positive_count + batch.negative_count, 1201);
    let mut last = HEALTHY;
    last[4] = 1.5;
    assert_eq!(
        batch.entries[1200].result,
        predict_record(&model, &record(last)).unwrap()
    );
}

#[test]
fn pinned_fixture_loads_as_handle() {
    let bytes = std::fs::read(fixture()).unwrap();
    let handle = load_model_handle(&fixture(), Some(&sha256_hex(&bytes))).unwrap();
    assert_eq!(handle.classes(), &[0, 1]);
    assert!(load_model_handle(&fixture(), Some("deadbeef")).is_none());
}

fn in_range_record() -> impl Strategy<Value = [f64; 17]> {
    (
        (1i64..=120, 0usize..5, 0i64..=5, 0i64..=5),
        (0.1f64..=20.0, 1.0f64..=200.0, 50i64..=500, 3.0f64..=20.0),
        (10i64..=60, 2.0f64..=8.0, 2000i64..=30000),
        proptest::collection::vec(proptest::bool::ANY, 6),
    )
        .prop_map(|((age, sg, al, su), (sc, bu, bgr, hemo), (pcv, rc, wc), flags)| {
            let sg = [1.005, 1.010, 1.015, 1.020, 1.025][sg];
            let flag = |idx: usize| if flags[idx] { 1.0 } else { 0.0 };
            [
                age as f64,
                sg,
                al as f64,
                su as f64,
                sc,
                bu,
                bgr as f64,
                hemo,
                pcv as f64,
                rc,
                wc as f64,
                flag(0),
                flag(1),
                flag(2),
                flag(3),
                flag(4),
                flag(5),
            ]
        })
}

proptest! {
    #[test]
    fn valid_records_always_score(values in in_range_record()) {
        let model = model();
        let result = predict_record(&model, &record(values)).unwrap();
        prop_assert!(result.confidence <= 100);
        prop_assert!(result.confidence >= 50);
        prop_assert!(["danger", "success"].contains(&result.label.style()));
        prop_assert_eq!(predict_record(&model, &record(values)).unwrap(), result);
    }
}
