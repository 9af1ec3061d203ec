//! Startup loading of the classifier artifact.

use std::path::Path;
use std::sync::Arc;

use sha2::Digest;
use tracing::{error, info};

use crate::classifier::ModelHandle;
use crate::error::ModelError;
use crate::logistic::{LogisticArtifact, LogisticModel};

pub fn sha256_hex(bytes: &[u8]) -> String {
    let digest = sha2::Sha256::digest(bytes);
    hex::encode(digest)
}

/// Reads and validates a logistic-regression artifact.
///
/// When `expected_sha256` is given the file's digest must match it
/// (case-insensitive) before the JSON is parsed.
pub fn load_model(path: &Path, expected_sha256: Option<&str>) -> Result<LogisticModel, ModelError> {
    let bytes = std::fs::read(path).map_err(|source| ModelError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    if let Some(expected) = expected_sha256 {
        let actual = sha256_hex(&bytes);
        if !actual.eq_ignore_ascii_case(expected.trim()) {
            return Err(ModelError::Sha256Mismatch {
                path: path.to_path_buf(),
                expected: expected.trim().to_lowercase(),
                actual,
            });
        }
    }
    let artifact: LogisticArtifact =
        serde_json::from_slice(&bytes).map_err(|source| ModelError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    LogisticModel::from_artifact(artifact)
}

/// Loads the model for the lifetime of the process.
///
/// A failure is logged and yields `None`; callers keep serving and report
/// prediction as unavailable.
pub fn load_model_handle(path: &Path, expected_sha256: Option<&str>) -> ModelHandle {
    match load_model(path, expected_sha256) {
        Ok(model) => {
            info!(
                path = %path.display(),
                features = model.artifact().feature_names.len(),
                classes = ?model.artifact().classes,
                "model loaded"
            );
            Some(Arc::new(model))
        }
        Err(err) => {
            error!(path = %path.display(), error = %err, "model unavailable");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ckd_model::REQUIRED_COLUMNS;
    use tempfile::NamedTempFile;

    use super::*;
    use crate::classifier::Classifier;

    fn artifact_json() -> String {
        let names: Vec<String> = REQUIRED_COLUMNS.iter().map(|s| format!("\"{s}\"")).collect();
        format!(
            r#"{{"feature_names": [{}], "classes": [0, 1], "coefficients": [{}], "intercept": 0.25}}"#,
            names.join(", "),
            ["0.0"; 17].join(", ")
        )
    }

    fn write_temp(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn sha256_of_empty_input() {
        assert_eq!(
            sha256_hex(b""),
            "e3b0c44298fc1c149afbf4c8996fb92427ae41e4649b934ca495991b7852b855"
        );
    }

    #[test]
    fn loads_valid_artifact() {
        let file = write_temp(&artifact_json());
        let model = load_model(file.path(), None).unwrap();
        assert_eq!(model.artifact().intercept, 0.25);
        assert!(model.artifact().scaler.is_none());
    }

    #[test]
    fn checks_pinned_digest() {
        let json = artifact_json();
        let file = write_temp(&json);
        let digest = sha256_hex(json.as_bytes());
        assert!(load_model(file.path(), Some(&digest.to_uppercase())).is_ok());
        let err = load_model(file.path(), Some("00")).unwrap_err();
        assert!(matches!(err, ModelError::Sha256Mismatch { .. }));
    }

    #[test]
    fn missing_file_yields_no_handle() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.json");
        assert!(matches!(
            load_model(&path, None),
            Err(ModelError::Io { .. })
        ));
        assert!(load_model_handle(&path, None).is_none());
    }

    #[test]
    fn malformed_json_is_reported() {
        let file = write_temp("{not json");
        assert!(matches!(
            load_model(file.path(), None),
            Err(ModelError::Json { .. })
        ));
    }

    #[test]
    fn handle_holds_loaded_model() {
        let file = write_temp(&artifact_json());
        let handle = load_model_handle(file.path(), None).unwrap();
        assert_eq!(handle.classes(), &[0, 1]);
        assert_eq!(handle.feature_names().len(), 17);
    }
}
