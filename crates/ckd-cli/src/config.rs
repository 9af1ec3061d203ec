//! Application configuration.
//!
//! Loaded from an optional TOML file, then overridden by command line flags:
//!
//! ```toml
//! [server]
//! bind = "127.0.0.1:5000"
//! max_upload_bytes = 16777216
//!
//! [model]
//! path = "models/ckd_lr.json"
//! sha256 = "48ea29be..."
//!
//! [dataset]
//! path = "data/kidney_disease.csv"
//!
//! [batch]
//! enforce_ranges = false
//! ```

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use ckd_predict::BatchOptions;
use ckd_web::DEFAULT_MAX_UPLOAD_BYTES;

use crate::cli::{ModelArgs, ServeArgs};

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("invalid bind address '{value}'")]
    InvalidBind { value: String },

    #[error("max_upload_bytes must be greater than zero")]
    ZeroUploadLimit,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind: String,
    pub max_upload_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:5000".to_string(),
            max_upload_bytes: DEFAULT_MAX_UPLOAD_BYTES,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub path: PathBuf,
    /// Hex SHA-256 the artifact must match.
    pub sha256: Option<String>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("models/ckd_lr.json"),
            sha256: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DatasetConfig {
    pub path: PathBuf,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("data/kidney_disease.csv"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BatchConfig {
    pub enforce_ranges: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub model: ModelConfig,
    pub dataset: DatasetConfig,
    pub batch: BatchConfig,
}

impl AppConfig {
    /// Reads `path` when given; otherwise returns the defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn parse(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    pub fn apply_model_args(&mut self, args: &ModelArgs) {
        if let Some(path) = &args.model {
            self.model.path = path.clone();
        }
        if let Some(sha256) = &args.model_sha256 {
            self.model.sha256 = Some(sha256.clone());
        }
        if args.enforce_ranges {
            self.batch.enforce_ranges = true;
        }
    }

    pub fn apply_serve_args(&mut self, args: &ServeArgs) {
        if let Some(bind) = &args.bind {
            self.server.bind = bind.clone();
        }
        if let Some(path) = &args.dataset {
            self.dataset.path = path.clone();
        }
        if let Some(bytes) = args.max_upload_bytes {
            self.server.max_upload_bytes = bytes;
        }
        self.apply_model_args(&args.model);
    }

    pub fn bind_addr(&self) -> Result<SocketAddr, ConfigError> {
        self.server
            .bind
            .parse()
            .map_err(|_| ConfigError::InvalidBind {
                value: self.server.bind.clone(),
            })
    }

    /// Checks values serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.bind_addr()?;
        if self.server.max_upload_bytes == 0 {
            return Err(ConfigError::ZeroUploadLimit);
        }
        Ok(())
    }

    pub fn batch_options(&self) -> BatchOptions {
        BatchOptions {
            enforce_ranges: self.batch.enforce_ranges,
        }
    }
}
