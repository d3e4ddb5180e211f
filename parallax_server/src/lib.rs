//! # parallax_server
//!
//! Serves the Parallax Landing page over HTTP and renders it to a static
//! file.
//!
//! ## Usage
//!
//! ```bash
//! # Serve on the default address (127.0.0.1:8080)
//! parallax-landing
//!
//! # Serve with a custom title on all interfaces
//! parallax-landing serve --bind 0.0.0.0:8080 --title "Осенний запуск"
//!
//! # Write the static document
//! parallax-landing render --out public/index.html
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod routes;
pub mod state;

pub use config::{Cli, Command, ServeArgs, ServerConfig};
pub use error::ServerError;
pub use state::AppState;

use std::io::Write;
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;

/// Bind to `addr` and serve until Ctrl-C or SIGTERM.
pub async fn serve(config: &ServerConfig, addr: SocketAddr) -> error::Result<()> {
    let state = Arc::new(AppState::render(config));
    let app = routes::router(state);

    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| ServerError::Bind { addr, source })?;

    info!(addr = %addr, "parallax landing listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("server stopped");
    Ok(())
}

/// Render the landing page and write it to `out`, or stdout when `None`.
pub fn render_to(config: &ServerConfig, out: Option<&Path>) -> error::Result<()> {
    let html = parallax_pages::render_landing(config.title.as_deref(), &config.assets);

    match out {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent).map_err(|source| ServerError::Write {
                    path: parent.to_path_buf(),
                    source,
                })?;
            }
            std::fs::write(path, &html).map_err(|source| ServerError::Write {
                path: path.to_path_buf(),
                source,
            })?;
            info!(path = %path.display(), bytes = html.len(), "landing page written");
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(html.as_bytes())
                .and_then(|()| stdout.flush())
                .map_err(|source| ServerError::Write {
                    path: "<stdout>".into(),
                    source,
                })?;
        }
    }
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c().await.ok();
    };

    #[cfg(unix)]
    let terminate = async {
        if let Ok(mut sig) =
            tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
        {
            sig.recv().await;
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    info!("shutdown signal received, stopping server");
}
