//! `parallax-landing` entry point.

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;

use parallax_server::{Cli, Command, ServerConfig, logging};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(&cli.log_level, cli.log_json);

    let command = cli.command().unwrap_or_else(|e| e.exit());
    let config = ServerConfig::from_cli(&cli).context("invalid configuration")?;

    match command {
        Command::Serve(args) => {
            info!(version = env!("CARGO_PKG_VERSION"), "parallax landing starting");
            parallax_server::serve(&config, args.bind)
                .await
                .context("server failed")?;
        }
        Command::Render { out } => {
            parallax_server::render_to(&config, out.as_deref())
                .context("failed to render landing page")?;
        }
    }

    Ok(())
}
