//! Shared application state.

use axum::body::Bytes;
use parallax_pages::{render_landing, render_not_found};
use tracing::info;

use crate::config::ServerConfig;

/// Pre-rendered documents. The content is static, so each page is
/// rendered once at startup and handlers only clone the buffer.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The landing page served at `/`.
    pub landing: Bytes,
    /// The 404 page served for every unknown path.
    pub not_found: Bytes,
}

impl AppState {
    /// Render every page for the given configuration.
    pub fn render(config: &ServerConfig) -> Self {
        let landing = render_landing(config.title.as_deref(), &config.assets);
        let not_found = render_not_found(&config.assets);

        info!(
            landing_bytes = landing.len(),
            not_found_bytes = not_found.len(),
            title = config.title.as_deref().unwrap_or(parallax_pages::DEFAULT_TITLE),
            "pages rendered"
        );

        Self {
            landing: Bytes::from(landing),
            not_found: Bytes::from(not_found),
        }
    }
}
