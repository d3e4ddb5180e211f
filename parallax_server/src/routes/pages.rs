//! HTML page handlers.

use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::Html;
use tracing::debug;

use crate::state::AppState;

/// Serve the landing page.
pub async fn landing_page(State(state): State<Arc<AppState>>) -> Html<Bytes> {
    Html(state.landing.clone())
}

/// Serve the 404 page for any path without a route.
pub async fn not_found(State(state): State<Arc<AppState>>, uri: Uri) -> (StatusCode, Html<Bytes>) {
    debug!(path = %uri.path(), "no route");
    (StatusCode::NOT_FOUND, Html(state.not_found.clone()))
}
