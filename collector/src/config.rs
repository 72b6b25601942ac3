use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SourceKind {
    /// Request every log from the site's JSON endpoint.
    Web,
    /// Read `<dir>/<id>.json` files saved earlier.
    Dir,
}

/// Turns match logs into training tables.
#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// File with one log id per line
    #[arg(long, env = "LOGS_IDS")]
    pub ids: PathBuf,

    #[arg(long, value_enum, default_value_t = SourceKind::Web, env = "LOGS_SOURCE")]
    pub source: SourceKind,

    #[arg(long, default_value = crate::logs_api::DEFAULT_BASE_URL, env = "LOGS_BASE_URL")]
    pub base_url: String,

    /// Folder of saved logs, required with `--source dir`
    #[arg(long, env = "LOGS_DIR", required_if_eq("source", "dir"))]
    pub dir: Option<PathBuf>,

    /// Only accept logs where every player is listed in this file
    #[arg(long, env = "LOGS_PLAYERS")]
    pub players: Option<PathBuf>,

    /// Skip TLS certificate verification
    #[arg(long, env = "LOGS_INSECURE")]
    pub insecure: bool,

    /// Write the tables as JSON to this file
    #[arg(long, short, env = "LOGS_OUTPUT")]
    pub output: Option<PathBuf>,

    #[arg(long, default_value_t = tracing::Level::INFO, env = "LOGS_LOG_LEVEL")]
    pub log_level: tracing::Level,

    /// Only log warnings and errors
    #[arg(long, short)]
    pub silent: bool,
}
