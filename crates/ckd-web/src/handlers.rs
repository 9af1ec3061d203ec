//! HTTP request handlers.
//!
//! Every page responds 200; soft failures (missing model, bad input, failed
//! batch) are rendered into the page rather than returned as status codes.

use std::collections::HashMap;
use std::sync::Arc;

use axum::extract::rejection::FormRejection;
use axum::extract::{Multipart, State};
use axum::response::Html;
use axum::{Form, Json};
use serde::Serialize;
use tracing::{info, trace, warn};

use ckd_common::redact_value;
use ckd_model::Assessment;
use ckd_predict::{BatchError, assess_form};
use ckd_report::summarize_handle;

use crate::render;
use crate::state::AppState;

const NO_FILE: &str = "No se seleccionó ningún archivo";

pub async fn index() -> Html<String> {
    Html(render::landing())
}

pub async fn evaluation_form() -> Html<String> {
    Html(render::evaluation(None))
}

pub async fn process_evaluation(
    State(state): State<Arc<AppState>>,
    form: Result<Form<HashMap<String, String>>, FormRejection>,
) -> Html<String> {
    let values = match form {
        Ok(Form(values)) => values,
        Err(rejection) => {
            warn!(error = %rejection, "evaluation form rejected");
            HashMap::new()
        }
    };
    trace!(form = %redact_value(&describe_form(&values)), "evaluation form received");
    let assessment = assess_form(state.model(), &values);
    match &assessment {
        Assessment::Scored { result } => {
            info!(label = ?result.label, confidence = result.confidence, "evaluation scored");
        }
        Assessment::Invalid { issues } => info!(issues = issues.len(), "evaluation out of range"),
        Assessment::Unavailable => warn!("evaluation requested without a model"),
        Assessment::Failed { message } => {
            warn!(error = %redact_value(message), "evaluation failed");
        }
    }
    Html(render::evaluation(Some(&assessment)))
}

fn describe_form(values: &HashMap<String, String>) -> String {
    let mut pairs: Vec<String> = values.iter().map(|(k, v)| format!("{k}={v}")).collect();
    pairs.sort();
    pairs.join(", ")
}

pub async fn dataset_info(State(state): State<Arc<AppState>>) -> Html<String> {
    match summarize_handle(state.dataset()) {
        Ok(summary) => Html(render::dataset(&summary)),
        Err(err) => {
            warn!(error = %err, "dataset summary requested without a dataset");
            Html(render::dataset_unavailable())
        }
    }
}

pub async fn upload_form() -> Html<String> {
    Html(render::upload(None))
}

struct Upload {
    filename: String,
    bytes: axum::body::Bytes,
}

async fn read_upload(multipart: &mut Multipart) -> Result<Option<Upload>, String> {
    while let Some(field) = multipart.next_field().await.map_err(|e| e.to_string())? {
        if field.name() != Some("file") {
            continue;
        }
        let filename = field.file_name().unwrap_or_default().to_string();
        let bytes = field.bytes().await.map_err(|e| e.to_string())?;
        if filename.is_empty() {
            return Ok(None);
        }
        return Ok(Some(Upload { filename, bytes }));
    }
    Ok(None)
}

pub async fn process_csv(
    State(state): State<Arc<AppState>>,
    mut multipart: Multipart,
) -> Html<String> {
    let upload = match read_upload(&mut multipart).await {
        Ok(Some(upload)) => upload,
        Ok(None) => return Html(render::upload(Some(NO_FILE))),
        Err(message) => {
            warn!(error = %message, "multipart upload could not be read");
            return Html(render::upload(Some(&format!(
                "Error al leer el archivo: {message}"
            ))));
        }
    };
    info!(filename = %upload.filename, bytes = upload.bytes.len(), "csv upload received");

    let worker = Arc::clone(&state);
    let Upload { filename, bytes } = upload;
    let outcome = tokio::task::spawn_blocking(move || {
        worker.batch.run(worker.model(), &filename, &bytes)
    })
    .await
    .unwrap_or_else(|join| Err(BatchError::Processing(join.to_string())));

    match outcome {
        Ok(result) => Html(render::batch(Ok(&result))),
        Err(err @ BatchError::NotCsv { .. }) => Html(render::upload(Some(&err.to_string()))),
        Err(err) => {
            warn!(error = %redact_value(&err.to_string()), "csv batch failed");
            Html(render::batch(Err(&err)))
        }
    }
}

#[derive(Debug, Serialize)]
pub struct Health {
    pub status: &'static str,
    pub model_loaded: bool,
    pub dataset_loaded: bool,
}

pub async fn health(State(state): State<Arc<AppState>>) -> Json<Health> {
    Json(Health {
        status: "ok",
        model_loaded: state.model.is_some(),
        dataset_loaded: state.dataset.is_some(),
    })
}
