#![warn(clippy::all, clippy::pedantic)]

use anyhow::Result;
use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use triagent::cli::Cli;
use triagent::commands;
use triagent::config::Config;

fn main() -> Result<()> {
    // Initialize logging
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    let cli = Cli::parse();
    let mut config = Config::load_or_init()?;
    config.apply_env_overrides();
    commands::dispatch(cli, config)
}
