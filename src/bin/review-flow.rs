use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use review_flow::config::{ActionConfig, ActionOpts};
use review_flow::run_action;

fn try_main(opts: ActionOpts) -> anyhow::Result<()> {
    let config = ActionConfig::try_from(opts).context("Cannot load configuration")?;

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("Cannot build tokio runtime")?;

    runtime.block_on(run_action(&config))?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(false)
        .init();

    let opts = match ActionOpts::try_parse() {
        Ok(opts) => opts,
        Err(error) if error.use_stderr() => {
            tracing::error!("Cannot load configuration\n{error}");
            std::process::exit(1);
        }
        // --help or --version
        Err(error) => error.exit(),
    };

    if let Err(error) = try_main(opts) {
        tracing::error!("Error: {error:?}");
        std::process::exit(1);
    }
}
