//! Operational errors of the server and the static renderer.
//!
//! Page rendering itself cannot fail; everything here is I/O around it.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Errors raised while loading configuration, binding, serving or writing.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// The assets override file could not be read.
    #[error("failed to read assets file {}: {source}", path.display())]
    AssetsRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The assets override file is not valid JSON for `ExternalAssets`.
    #[error("invalid assets file {}: {source}", path.display())]
    AssetsParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The listener could not bind.
    #[error("failed to bind to {addr}: {source}")]
    Bind {
        addr: SocketAddr,
        #[source]
        source: std::io::Error,
    },

    /// The HTTP server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),

    /// The rendered document could not be written.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
