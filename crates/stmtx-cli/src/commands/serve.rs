//! Serve command - HTTP extraction service.

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use clap::Args;
use console::style;
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::{error, info};

use stmtx_core::{
    discover_documents, BatchEntry, BatchRunner, DocumentTextSource, StmtxConfig, StmtxError,
};

use super::fetch::{build_client, extract_fetched, fetch_document};
use super::load_config;

const HEALTHZ_PATH: &str = "/healthz";
const EXTRACT_PATH: &str = "/extract";
const SUPPORTED_DOC_TYPE: &str = "bankstatement";

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides server.bind)
    #[arg(short, long)]
    bind: Option<String>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let bind = args.bind.unwrap_or_else(|| config.server.bind.clone());

    let state = AppState::new(config)?;
    let listener = TcpListener::bind(&bind).await?;

    println!(
        "{} Listening on http://{}",
        style("✓").green(),
        listener.local_addr()?
    );
    info!("Serving extraction API on {}", bind);

    axum::serve(listener, build_router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for Ctrl+C: {}", e);
    }
}

/// Shared, read-only request state.
///
/// OCR models are loaded once here; requests borrow the same source.
#[derive(Clone)]
pub struct AppState {
    config: Arc<StmtxConfig>,
    client: reqwest::Client,
    source: Arc<DocumentTextSource>,
    runner: BatchRunner,
}

impl AppState {
    pub fn new(config: StmtxConfig) -> anyhow::Result<Self> {
        let client = build_client(&config.fetch)?;
        let source = DocumentTextSource::new(&config);
        Ok(Self::with_source(config, client, source))
    }

    fn with_source(
        config: StmtxConfig,
        client: reqwest::Client,
        source: DocumentTextSource,
    ) -> Self {
        Self {
            runner: BatchRunner::new(config.extraction.extractor()),
            source: Arc::new(source),
            config: Arc::new(config),
            client,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(HEALTHZ_PATH, get(healthz))
        .route(EXTRACT_PATH, post(extract))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

#[derive(Debug, Serialize)]
struct HealthzResponse {
    status: &'static str,
}

async fn healthz() -> Json<HealthzResponse> {
    Json(HealthzResponse { status: "ok" })
}

#[derive(Debug, Deserialize)]
struct ExtractQuery {
    doc_type: Option<String>,
    folder: Option<PathBuf>,
    url: Option<String>,
}

async fn extract(
    State(state): State<AppState>,
    Query(query): Query<ExtractQuery>,
) -> Result<Json<Vec<BatchEntry>>, ApiError> {
    let doc_type = query.doc_type.unwrap_or_default();
    if doc_type != SUPPORTED_DOC_TYPE {
        return Err(StmtxError::UnsupportedInput(format!("document type '{}'", doc_type)).into());
    }

    let entries = match (query.folder, query.url) {
        (Some(folder), None) => {
            let documents = discover_documents(&folder)?;
            let AppState { source, runner, .. } = state;
            tokio::task::spawn_blocking(move || runner.run_source(source.as_ref(), &documents))
                .await?
        }
        (None, Some(url)) => {
            let fetched = fetch_document(&state.client, &url, state.config.fetch.max_bytes).await;
            let AppState { source, runner, .. } = state;
            tokio::task::spawn_blocking(move || extract_fetched(&runner, &source, &url, fetched))
                .await?
        }
        _ => {
            return Err(ApiError::new(
                StatusCode::BAD_REQUEST,
                "provide exactly one of 'folder' or 'url'",
            ));
        }
    };

    Ok(Json(entries))
}

#[derive(Debug, Serialize)]
struct ApiErrorBody {
    detail: String,
}

#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    body: ApiErrorBody,
}

impl ApiError {
    fn new(status: StatusCode, detail: impl Into<String>) -> Self {
        Self {
            status,
            body: ApiErrorBody {
                detail: detail.into(),
            },
        }
    }
}

impl From<StmtxError> for ApiError {
    fn from(e: StmtxError) -> Self {
        match e {
            StmtxError::FolderNotFound(_) => {
                ApiError::new(StatusCode::NOT_FOUND, "Data folder not found")
            }
            StmtxError::UnsupportedInput(_) => {
                ApiError::new(StatusCode::BAD_REQUEST, e.to_string())
            }
            other => {
                error!("extraction failed: {}", other);
                ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
            }
        }
    }
}

impl From<tokio::task::JoinError> for ApiError {
    fn from(e: tokio::task::JoinError) -> Self {
        error!("extraction task failed: {}", e);
        ApiError::new(StatusCode::INTERNAL_SERVER_ERROR, "internal server error")
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
