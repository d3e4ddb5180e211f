//! HTTP routes.
//!
//! - `GET /` - the landing page
//! - `GET /health` - liveness probe
//! - anything else - the 404 page

pub mod health;
pub mod pages;

use std::sync::Arc;

use axum::Router;
use axum::http::{HeaderName, HeaderValue};
use axum::routing::get;
use tower_http::set_header::SetResponseHeaderLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the complete router with middleware.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(pages::landing_page))
        .route("/health", get(health::health))
        .fallback(pages::not_found)
        .layer(SetResponseHeaderLayer::overriding(
            HeaderName::from_static("x-content-type-options"),
            HeaderValue::from_static("nosniff"),
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
