mod cli;
mod commands;

use anyhow::Result;
use casefile_config::Config;
use clap::Parser;

fn main() -> Result<()> {
    let cli = cli::Cli::parse();

    // Initialize tracing
    let default_filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_filter)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load().unwrap_or_else(|e| {
            tracing::warn!("Using default config: {}", e);
            Config::default()
        }),
    };

    match cli.command {
        cli::Commands::Extract {
            share,
            output,
            max_case_studies,
            max_team_profiles,
            established_since,
        } => commands::extract::handle(
            &config,
            commands::extract::ExtractArgs {
                share,
                output,
                max_case_studies,
                max_team_profiles,
                established_since,
            },
        ),
        cli::Commands::Scan { share, json } => commands::scan::handle(&config, &share, json),
        cli::Commands::Anonymize { file } => commands::anonymize::handle(&file),
    }
}
