use crate::infra::{AppState, InMemoryJournalService};
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::Extension;
use axum::Json;
use coach_journal::error::AppError;
use coach_journal::journal::journal_router;
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub(crate) fn with_journal_routes(service: Arc<InMemoryJournalService>) -> axum::Router {
    journal_router(service)
        .route("/health", axum::routing::get(healthcheck))
        .route("/ready", axum::routing::get(readiness_endpoint))
        .route("/metrics", axum::routing::get(metrics_endpoint))
        .route(
            "/api/v1/rubric/reload",
            axum::routing::post(rubric_reload_endpoint),
        )
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(std::sync::atomic::Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(Extension(state): Extension<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

/// Re-read the configured rubric source and swap it in whole.
pub(crate) async fn rubric_reload_endpoint(
    Extension(state): Extension<AppState>,
) -> Result<Json<serde_json::Value>, AppError> {
    let rubric = state.rubric.reload(&state.rubric_source)?;
    info!(categories = rubric.categories.len(), "rubric reloaded on request");
    Ok(Json(json!({
        "status": "reloaded",
        "categories": rubric.categories.len(),
    })))
}
