use anyhow::Context;
use clap::Parser;
use passcard::cli::Args;
use passcard::config::Config;

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    passcard::logging::init_tracing();

    let config = Config::resolve(args.config.as_deref(), args.api_url.as_deref())
        .context("invalid configuration")?;
    tracing::info!(
        base_url = config.api.base_url.as_deref().unwrap_or_default(),
        "starting passcard"
    );

    passcard::ui::run(config)
}
