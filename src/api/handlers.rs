//! Request handlers for the HTTP surface.

use axum::Json;
use axum::extract::State;
use axum::http::Uri;
use axum::response::Html;
use serde::Serialize;

use super::error::ApiError;
use super::state::AppState;

/// The chat page, embedded at compile time.
const INDEX_HTML: &str = include_str!("../../assets/index.html");

/// Serve the chat page.
///
/// GET /
pub async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    /// Number of currently connected clients.
    pub connections: usize,
}

/// Health check endpoint.
///
/// GET /health
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        connections: state.hub.connection_count(),
    })
}

/// Fallback for unknown routes.
pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("no route for {uri}"))
}
