use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};
use whittaker::WhittakerConfig;

mod cli;
mod commands;

use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .init();

    let cli = Cli::parse();
    let config = effective_config(&cli)?;

    match cli.command {
        Commands::Project {
            seed,
            truncation,
            shifts,
        } => commands::project::run(config, &seed, truncation, &shifts),
        Commands::Minor { rows, cols, shift } => commands::minor::run(config, &rows, &cols, shift),
        Commands::Config => commands::config::run(&config),
    }
}

/// Config file (or defaults) with command-line overrides applied
fn effective_config(cli: &Cli) -> Result<WhittakerConfig> {
    let mut config = match &cli.config {
        Some(path) => WhittakerConfig::from_file(path)
            .with_context(|| format!("failed to load {}", path.display()))?,
        None => WhittakerConfig::default(),
    };
    if let Some(rank) = cli.rank {
        config.rank = rank;
    }
    if cli.asymptotic {
        config.asymptotic = true;
    }
    if !cli.prefixes.is_empty() {
        config.prefixes = cli.prefixes.clone();
    }
    config.validate()?;
    Ok(config)
}
