//! Integration tests for the offline commands.

use std::path::{Path, PathBuf};

use ckd_cli::cli::{DatasetArgs, ModelArgs, ScoreArgs};
use ckd_cli::commands::{run_dataset, run_score};
use ckd_cli::config::{AppConfig, ConfigError};
use ckd_model::REQUIRED_COLUMNS;

fn model_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../models/ckd_lr.json")
}

fn config() -> AppConfig {
    let mut config = AppConfig::default();
    config.model.path = model_path();
    config
}

fn score_args(csv: &Path, output: Option<PathBuf>) -> ScoreArgs {
    ScoreArgs {
        csv: csv.to_path_buf(),
        output,
        model: ModelArgs {
            model: None,
            model_sha256: None,
            enforce_ranges: false,
        },
    }
}

fn write_batch(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
    let mut body = REQUIRED_COLUMNS.join(",");
    for row in rows {
        body.push('\n');
        body.push_str(row);
    }
    body.push('\n');
    let path = dir.join(name);
    std::fs::write(&path, body).unwrap();
    path
}

const HEALTHY: &str = "30,1.02,0,0,0.8,25,95,15,45,5.2,7000,0,0,0,0,0,0";
const SICK: &str = "65,1.01,3,2,4.5,90,210,8.5,25,3,11000,1,1,1,1,1,1";

#[test]
fn score_writes_results() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_batch(dir.path(), "pacientes.csv", &[HEALTHY, SICK]);
    let output = dir.path().join("resultados.csv");

    let result = run_score(&config(), &score_args(&csv, Some(output.clone()))).unwrap();
    assert_eq!(result.total_rows, 2);
    assert_eq!(result.positive_count, 1);

    let written = std::fs::read_to_string(&output).unwrap();
    let lines: Vec<&str> = written.lines().collect();
    assert_eq!(lines[0], "fila,prediccion,probabilidad,clase,label");
    assert!(lines[1].starts_with("1,Sin indicios de ERC,"));
    assert!(lines[2].starts_with("2,Alto riesgo de ERC,"));
}

#[test]
fn score_requires_a_model() {
    let dir = tempfile::tempdir().unwrap();
    let csv = write_batch(dir.path(), "pacientes.csv", &[HEALTHY]);
    let mut config = config();
    config.model.path = dir.path().join("missing.json");
    let err = run_score(&config, &score_args(&csv, None)).unwrap_err();
    assert!(format!("{err:#}").contains("load model"));
}

#[test]
fn score_reports_missing_columns() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("corto.csv");
    std::fs::write(&csv, "age,sg\n30,1.01\n").unwrap();
    let err = run_score(&config(), &score_args(&csv, None)).unwrap_err();
    assert!(format!("{err:#}").contains("Columnas faltantes: al"));
}

#[test]
fn enforce_ranges_from_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let toml = dir.path().join("ckd.toml");
    std::fs::write(
        &toml,
        format!(
            "[model]\npath = {:?}\n\n[batch]\nenforce_ranges = true\n",
            model_path().display().to_string()
        ),
    )
    .unwrap();
    let config = AppConfig::load(Some(&toml)).unwrap();
    assert!(config.batch.enforce_ranges);

    let wild = "30,1.02,0,0,25,25,95,15,45,5.2,7000,0,0,0,0,0,0";
    let csv = write_batch(dir.path(), "fuera.csv", &[HEALTHY, wild]);
    let err = run_score(&config, &score_args(&csv, None)).unwrap_err();
    assert!(format!("{err:#}").contains("fila 2: sc"));
}

#[test]
fn malformed_config_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let toml = dir.path().join("ckd.toml");
    std::fs::write(&toml, "[server\nbind = 1").unwrap();
    assert!(matches!(
        AppConfig::load(Some(&toml)),
        Err(ConfigError::Parse { .. })
    ));
    assert!(matches!(
        AppConfig::load(Some(&dir.path().join("absent.toml"))),
        Err(ConfigError::Read { .. })
    ));
}

#[test]
fn dataset_summary_from_explicit_path() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("kidney_disease.csv");
    std::fs::write(&csv, "age,classification\n48,ckd\n62,notckd\n70,ckd\n").unwrap();
    let summary = run_dataset(&AppConfig::default(), &DatasetArgs { csv: Some(csv) }).unwrap();
    assert_eq!(summary.row_count, 3);
    let dist = summary.class_distribution.unwrap();
    assert_eq!(dist.counts[0], ("ckd".to_string(), 2));
}
