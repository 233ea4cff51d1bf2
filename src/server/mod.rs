//! HTTP service for call-summarizer
//!
//! Exposes `GET /health` and `POST /summarize` with axum.

mod error;

use anyhow::{Context, Result};
use axum::{
    extract::State,
    http::HeaderValue,
    response::Json,
    routing::{get, post},
    Router,
};
use serde::Serialize;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Settings;
use crate::llm::build_provider;
use crate::summary::{SummarizeError, SummarizeRequest, SummarizeResponse, Summarizer};

pub use error::ErrorBody;

/// State shared by every request handler
#[derive(Clone)]
struct AppState {
    summarizer: Summarizer,
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    ok: bool,
}

/// Build the service router. A CORS layer is installed only when origins are given.
pub fn router(summarizer: Summarizer, cors_origins: &[String]) -> Result<Router> {
    let mut app = Router::new()
        .route("/health", get(health))
        .route("/summarize", post(summarize))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { summarizer });

    if let Some(cors) = cors_layer(cors_origins)? {
        app = app.layer(cors);
    }

    Ok(app)
}

fn cors_layer(origins: &[String]) -> Result<Option<CorsLayer>> {
    if origins.is_empty() {
        return Ok(None);
    }

    let origins = origins
        .iter()
        .map(|origin| {
            HeaderValue::from_str(origin)
                .with_context(|| format!("Invalid CORS origin: {}", origin))
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(Some(
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request()),
    ))
}

/// Run the HTTP service until Ctrl-C.
pub async fn serve(settings: &Settings) -> Result<()> {
    let provider = build_provider(settings)?;
    let provider_name = provider.name();
    let summarizer = Summarizer::new(Arc::from(provider));
    let app = router(summarizer, &settings.server.cors_origins)?;

    let addr = &settings.server.bind_addr;
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!(
        provider = provider_name,
        cors_origins = settings.server.cors_origins.len(),
        "Call summarizer listening on {}",
        addr
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("HTTP server failed")?;

    info!("Call summarizer stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { ok: true })
}

/// Summarize a transcript with optional patient context.
async fn summarize(
    State(state): State<AppState>,
    Json(request): Json<SummarizeRequest>,
) -> Result<Json<SummarizeResponse>, SummarizeError> {
    let response = state.summarizer.summarize(&request).await?;
    Ok(Json(response))
}
