//! Tic Tac Toe - terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use strictly_tictactoe::{App, Cli, Console, GameConfig};
use tracing::{info, instrument};
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    initialize_tracing();

    let config = load_config(&cli)?;
    let mut console = Console::stdio();
    let mut app = App::new(config);

    app.run(&mut console, cli.mode).await
}

/// Logs go to stderr so they never interleave with the prompts on stdout.
fn initialize_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();
}

#[instrument(skip(cli), fields(config_path = %cli.config.display()))]
fn load_config(cli: &Cli) -> Result<GameConfig> {
    let mut config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Failed to load {}", cli.config.display()))?;

    if let Some(strategy) = cli.strategy {
        info!(%strategy, "Overriding strategy");
        config = config.with_strategy(strategy);
    }
    if let Some(seed) = cli.seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(Some(seed));
    }
    if cli.computer_first {
        config = config.with_computer_first(true);
    }

    Ok(config)
}
