use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{info, info_span};

use ckd_model::{BatchResult, DatasetSummary};
use ckd_predict::{BatchPredictor, load_model, load_model_handle};
use ckd_report::{load_dataset, load_dataset_handle, summarize, write_batch_csv_file};
use ckd_web::AppState;

use crate::cli::{DatasetArgs, ScoreArgs};
use crate::config::AppConfig;

/// Loads the model and dataset handles, then serves until interrupted.
///
/// A missing model or dataset is not fatal: the corresponding pages report
/// the resource as unavailable.
pub fn run_serve(config: &AppConfig) -> Result<()> {
    config.validate().context("validate configuration")?;
    let addr = config.bind_addr()?;

    let model = load_model_handle(&config.model.path, config.model.sha256.as_deref());
    let dataset = load_dataset_handle(&config.dataset.path);
    let state = AppState::new(model, dataset, BatchPredictor::new(config.batch_options()))
        .with_max_upload_bytes(config.server.max_upload_bytes);

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("start async runtime")?;
    runtime.block_on(async move {
        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("bind {addr}"))?;
        ckd_web::serve(listener, Arc::new(state))
            .await
            .context("http server")
    })
}

/// Scores a CSV file offline. Unlike the server, a model that fails to load
/// is an error here.
pub fn run_score(config: &AppConfig, args: &ScoreArgs) -> Result<BatchResult> {
    let span = info_span!("score", file = %args.csv.display());
    let _guard = span.enter();

    let model = load_model(&config.model.path, config.model.sha256.as_deref())
        .with_context(|| format!("load model {}", config.model.path.display()))?;
    let bytes = std::fs::read(&args.csv)
        .with_context(|| format!("read {}", args.csv.display()))?;
    let filename = args
        .csv
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();

    let result = BatchPredictor::new(config.batch_options())
        .run(Some(&model), &filename, &bytes)
        .with_context(|| format!("score {}", args.csv.display()))?;

    if let Some(output) = &args.output {
        write_batch_csv_file(output, &result)
            .with_context(|| format!("write {}", output.display()))?;
        info!(path = %output.display(), rows = result.total_rows, "results written");
    }
    Ok(result)
}

pub fn run_dataset(config: &AppConfig, args: &DatasetArgs) -> Result<DatasetSummary> {
    let path = args.csv.as_ref().unwrap_or(&config.dataset.path);
    let df = load_dataset(path).with_context(|| format!("load dataset {}", path.display()))?;
    Ok(summarize(&df))
}
