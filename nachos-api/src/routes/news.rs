//! News proxy endpoints
//!
//! The browser pages call these instead of the upstream API directly. On
//! success the validated upstream body is relayed as-is; upstream rejections
//! keep their status code behind a localized message, and anything else
//! (network failure, malformed body) becomes a generic 500. Upstream detail
//! only ever reaches the server log.

use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use tracing::error;

use nachos_news::NewsError;

use crate::AppState;

/// Generic message for network and parse failures
const SERVER_ERROR_MESSAGE: &str = "Erreur serveur";
/// Message when upstream rejects the list request
const LIST_UNAVAILABLE_MESSAGE: &str = "Impossible de charger les actualités";
/// Message when upstream rejects a by-id request (usually a 404)
const ITEM_NOT_FOUND_MESSAGE: &str = "Actualité non trouvée";

/// Create news routes
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/news", get(get_news_list))
        .route("/news/{id}", get(get_news_by_id))
}

/// GET /api/news - Relay the upstream news listing
async fn get_news_list(State(state): State<AppState>) -> impl IntoResponse {
    match state.news_service.list_news().await {
        Ok(items) => (StatusCode::OK, Json(items)).into_response(),
        Err(e) => {
            error!("Failed to proxy news list: {}", e);
            proxy_failure(&e, LIST_UNAVAILABLE_MESSAGE).into_response()
        }
    }
}

/// GET /api/news/{id} - Relay a single upstream news item
///
/// The id is forwarded as an opaque path segment; upstream decides whether
/// it exists.
async fn get_news_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.news_service.news_by_id(&id).await {
        Ok(item) => (StatusCode::OK, Json(item)).into_response(),
        Err(e) => {
            error!("Failed to proxy news item {}: {}", id, e);
            proxy_failure(&e, ITEM_NOT_FOUND_MESSAGE).into_response()
        }
    }
}

/// Translate an upstream failure into the client-facing error envelope
///
/// Upstream rejections surface with the upstream's own status code so a 404
/// stays a 404; everything else collapses into a generic 500 with no detail
/// in the body.
fn proxy_failure(
    err: &NewsError,
    rejected_message: &'static str,
) -> (StatusCode, Json<serde_json::Value>) {
    match err.upstream_status() {
        Some(status) => {
            let code = StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY);
            (code, Json(serde_json::json!({ "error": rejected_message })))
        }
        None => (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(serde_json::json!({ "error": SERVER_ERROR_MESSAGE })),
        ),
    }
}
