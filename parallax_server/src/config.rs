//! Command line and environment configuration.
//!
//! Every flag can also be set through a `PARALLAX_*` environment variable;
//! `RUST_LOG` takes precedence over `--log-level`. The listen address belongs
//! to `serve` alone, so `render` never reads or validates it.

use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use clap::builder::FalseyValueParser;
use clap::{ArgAction, Args, FromArgMatches, Parser, Subcommand};
use parallax_pages::ExternalAssets;

use crate::error::{Result, ServerError};

/// Default listen address.
pub const DEFAULT_BIND: &str = "127.0.0.1:8080";

#[derive(Parser, Debug)]
#[command(name = "parallax-landing")]
#[command(about = "Serve or render the Parallax Landing page")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Document title (defaults to "Parallax Landing")
    #[arg(long, global = true, env = "PARALLAX_TITLE")]
    pub title: Option<String>,

    /// JSON file overriding the external asset URLs
    #[arg(long, global = true, env = "PARALLAX_ASSETS")]
    pub assets: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true, env = "PARALLAX_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Emit logs as JSON lines
    #[arg(
        long,
        global = true,
        env = "PARALLAX_LOG_JSON",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub log_json: bool,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the landing page over HTTP (default)
    Serve(ServeArgs),
    /// Write the landing page as a static HTML document
    Render {
        /// Output file (stdout when omitted)
        #[arg(short, long)]
        out: Option<PathBuf>,
    },
}

/// Options only the HTTP server reads.
#[derive(Args, Debug, Clone, PartialEq, Eq)]
pub struct ServeArgs {
    /// Address to listen on
    #[arg(long, env = "PARALLAX_BIND_ADDR", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,
}

impl ServeArgs {
    /// `serve` options as if the subcommand were given without flags:
    /// `PARALLAX_BIND_ADDR` when set, [`DEFAULT_BIND`] otherwise.
    pub fn from_env() -> std::result::Result<Self, clap::Error> {
        let matches = Self::augment_args(clap::Command::new("serve")).try_get_matches_from(["serve"])?;
        Self::from_arg_matches(&matches)
    }
}

impl Cli {
    /// The selected command; no subcommand means `serve`.
    pub fn command(&self) -> std::result::Result<Command, clap::Error> {
        match &self.command {
            Some(command) => Ok(command.clone()),
            None => ServeArgs::from_env().map(Command::Serve),
        }
    }
}

/// Page settings shared by `serve` and `render`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerConfig {
    /// Title override; `None` keeps the page default.
    pub title: Option<String>,
    /// Where the browser loads the CSS framework, JS bundle and font from.
    pub assets: ExternalAssets,
}

impl ServerConfig {
    /// Resolve the parsed command line, loading the assets file if given.
    pub fn from_cli(cli: &Cli) -> Result<Self> {
        let assets = match &cli.assets {
            Some(path) => load_assets(path)?,
            None => ExternalAssets::default(),
        };

        Ok(Self {
            title: normalize_title(cli.title.as_deref()),
            assets,
        })
    }
}

/// Blank titles count as "no override".
fn normalize_title(title: Option<&str>) -> Option<String> {
    title
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

/// Read an assets override file. Missing keys keep their CDN defaults.
pub fn load_assets(path: &Path) -> Result<ExternalAssets> {
    let raw = std::fs::read_to_string(path).map_err(|source| ServerError::AssetsRead {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&raw).map_err(|source| ServerError::AssetsParse {
        path: path.to_path_buf(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("parallax-landing").chain(args.iter().copied()))
            .unwrap()
    }

    #[test]
    fn no_subcommand_means_serve() {
        let cli = parse(&[]);
        assert_eq!(cli.command, None);
        assert!(matches!(cli.command(), Ok(Command::Serve(_))));
    }

    #[test]
    fn serve_accepts_bind_address() {
        let cli = parse(&["serve", "--bind", "0.0.0.0:9000"]);
        assert_eq!(
            cli.command().unwrap(),
            Command::Serve(ServeArgs {
                bind: SocketAddr::from(([0, 0, 0, 0], 9000))
            })
        );
    }

    #[test]
    fn render_accepts_output_path_and_global_title() {
        let cli = parse(&["render", "--out", "site/index.html", "--title", "Промо"]);

        assert_eq!(
            cli.command().unwrap(),
            Command::Render {
                out: Some(PathBuf::from("site/index.html"))
            }
        );
        assert_eq!(cli.title.as_deref(), Some("Промо"));
    }

    #[test]
    fn rejects_invalid_bind_address() {
        let result = Cli::try_parse_from(["parallax-landing", "serve", "--bind", "not-an-addr"]);
        assert!(result.is_err());
    }

    #[test]
    fn bind_is_not_a_render_option() {
        let result = Cli::try_parse_from(["parallax-landing", "render", "--bind", "127.0.0.1:1"]);
        assert!(result.is_err());
    }

    #[test]
    fn log_json_flag_sets_json_output() {
        assert!(parse(&["render", "--log-json"]).log_json);
        assert!(parse(&["--log-json"]).log_json);
    }

    #[test]
    fn blank_title_is_ignored() {
        assert_eq!(normalize_title(Some("   ")), None);
        assert_eq!(normalize_title(Some("")), None);
        assert_eq!(normalize_title(None), None);
        assert_eq!(normalize_title(Some(" Лендинг ")), Some("Лендинг".to_string()));
    }

    #[test]
    fn config_from_cli_without_assets_uses_defaults() {
        let cli = parse(&["render"]);
        let config = ServerConfig::from_cli(&cli).unwrap();

        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.title, None);
        assert_eq!(config.assets, ExternalAssets::default());
    }

    #[test]
    fn assets_file_overrides_only_given_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"bootstrap_css": "/static/bootstrap.min.css"}}"#).unwrap();

        let assets = load_assets(file.path()).unwrap();
        assert_eq!(assets.bootstrap_css, "/static/bootstrap.min.css");
        assert_eq!(assets.font_css, ExternalAssets::default().font_css);
    }

    #[test]
    fn missing_assets_file_is_a_read_error() {
        let err = load_assets(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ServerError::AssetsRead { .. }));
    }

    #[test]
    fn malformed_assets_file_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "{{ not json").unwrap();

        let err = load_assets(file.path()).unwrap_err();
        assert!(matches!(err, ServerError::AssetsParse { .. }));
        assert!(err.to_string().contains("invalid assets file"));
    }
}
