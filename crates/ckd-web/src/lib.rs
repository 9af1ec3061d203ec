//! Web front end for CKD risk screening.
//!
//! Routes:
//!
//! | Method | Path                    | Page                          |
//! |--------|-------------------------|-------------------------------|
//! | GET    | `/`                     | landing page                  |
//! | GET    | `/evaluar`              | single-record form            |
//! | POST   | `/procesar_evaluacion`  | validate and score one record |
//! | GET    | `/dataset-info`         | reference dataset summary     |
//! | GET    | `/subir-csv`            | CSV upload form               |
//! | POST   | `/procesar-csv`         | score an uploaded CSV         |
//! | GET    | `/health`               | JSON readiness                |

mod handlers;
pub mod render;
mod state;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

pub use handlers::Health;
pub use state::{AppState, DEFAULT_MAX_UPLOAD_BYTES};

pub fn router(state: Arc<AppState>) -> Router {
    let limit = state.max_upload_bytes;
    Router::new()
        .route("/", get(handlers::index))
        .route("/evaluar", get(handlers::evaluation_form))
        .route("/procesar_evaluacion", post(handlers::process_evaluation))
        .route("/dataset-info", get(handlers::dataset_info))
        .route("/subir-csv", get(handlers::upload_form))
        .route("/procesar-csv", post(handlers::process_csv))
        .route("/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(limit))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Serves until Ctrl-C.
pub async fn serve(listener: TcpListener, state: Arc<AppState>) -> std::io::Result<()> {
    info!(
        addr = %listener.local_addr()?,
        model_loaded = state.model.is_some(),
        dataset_loaded = state.dataset.is_some(),
        "listening"
    );
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("shutdown requested");
    }
}
