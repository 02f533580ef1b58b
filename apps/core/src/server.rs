//! HTTP surface.
//!
//! Two routes:
//! - `GET /` static liveness message
//! - `POST /process_text` scores a transcript snippet
//!
//! CORS admits a single configured origin with credentials.

use axum::extract::{Request, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::future::Future;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info, info_span};
use uuid::Uuid;
use validator::Validate;

use crate::aura::AuraAnalyzer;
use crate::error::AppError;
use crate::models::{AnalysisRequest, AnalysisResult};

pub const ROOT_MESSAGE: &str = "Sentiment Aura Backend is running!";

/// State shared by all handlers
#[derive(Clone)]
pub struct AppState {
    pub analyzer: AuraAnalyzer,
}

impl AppState {
    pub fn new(analyzer: AuraAnalyzer) -> Self {
        Self { analyzer }
    }
}

/// Body of `GET /`
#[derive(Debug, Serialize, Deserialize)]
pub struct StatusMessage {
    pub message: String,
}

async fn root() -> Json<StatusMessage> {
    Json(StatusMessage {
        message: ROOT_MESSAGE.to_string(),
    })
}

async fn process_text(
    State(state): State<AppState>,
    Json(input): Json<AnalysisRequest>,
) -> Result<Json<AnalysisResult>, AppError> {
    debug!(text = %input.text, provider = %input.provider, "Received text");

    let result = state.analyzer.analyze(&input.text);
    result.validate()?;

    debug!(?result, "Returning response");
    Ok(Json(result))
}

fn cors_layer(allowed_origin: &str) -> Result<CorsLayer, AppError> {
    let origin = HeaderValue::from_str(allowed_origin).map_err(|e| {
        AppError::Config(format!("Invalid CORS origin '{}': {}", allowed_origin, e))
    })?;

    // Only a matching Origin is echoed back. Credentials rule out wildcards,
    // so methods and headers are mirrored.
    Ok(CorsLayer::new()
        .allow_origin(AllowOrigin::list([origin]))
        .allow_credentials(true)
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request()))
}

/// Build the application router.
pub fn router(state: AppState, allowed_origin: &str) -> Result<Router, AppError> {
    let trace = TraceLayer::new_for_http().make_span_with(|request: &Request| {
        info_span!(
            "http_request",
            request_id = %Uuid::new_v4(),
            method = %request.method(),
            path = %request.uri().path(),
        )
    });

    Ok(Router::new()
        .route("/", get(root))
        .route("/process_text", post(process_text))
        .layer(cors_layer(allowed_origin)?)
        .layer(trace)
        .with_state(state))
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), AppError>
where
    F: Future<Output = ()> + Send + 'static,
{
    if let Ok(addr) = listener.local_addr() {
        info!("Sentiment Aura Backend listening on http://{}", addr);
    }

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    info!("Server stopped");
    Ok(())
}

/// Resolves on Ctrl-C
pub async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
