use clap::Parser;
use std::path::PathBuf;

/// Terminal editor for your PasseVerde profile card.
#[derive(Debug, Parser)]
#[command(name = "passcard", version, about)]
pub struct Args {
    /// Path to a config file (default: ~/.config/passcard/config.toml).
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Profile service base URL; overrides the config file and PASSCARD_API_URL.
    #[arg(long, value_name = "URL")]
    pub api_url: Option<String>,
}
