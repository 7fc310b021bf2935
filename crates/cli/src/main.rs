mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

use automation_core::config::{load_dotenv, Config};

use crate::cli::{CliArgs, Command};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .init();

    let args = CliArgs::parse();

    load_dotenv();
    let mut config = Config::from_env();
    if args.compact {
        config.output.pretty = false;
    }
    config.log_summary();

    match args.command {
        Command::Convert { file } => commands::convert(&config, &file),
        Command::List { dir } => commands::list(&dir),
        Command::Metrics { insight } => commands::metrics(&config, &insight),
        Command::Edit {
            file,
            id,
            insight,
            metric,
            operator,
            value,
            destination,
        } => commands::edit(
            &config,
            commands::EditArgs {
                file: &file,
                id: &id,
                insight: &insight,
                metric: metric.as_deref(),
                operator: operator.as_deref(),
                value,
                destination: destination.as_deref(),
            },
        ),
    }
}
