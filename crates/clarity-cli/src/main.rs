use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use clarity_cli::commands::{cat, dates, show, status, write};
use clarity_cli::{Cli, Commands, Config};
use clarity_store::PlanStore;

/// Load config and open the plan store it points at.
fn open_store(config_path: Option<&Path>) -> Result<PlanStore> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    Ok(PlanStore::new(config.plans_dir))
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Some(Commands::Show { date, json }) => {
            let store = open_store(cli.config.as_deref())?;
            show::run(&mut out, &store, date.unwrap_or_else(today), *json)?;
        }
        Some(Commands::Status { date, at, json }) => {
            let store = open_store(cli.config.as_deref())?;
            let date = date.unwrap_or_else(today);
            let instant =
                status::resolve_instant(date, at.as_deref(), Local::now().naive_local())?;
            status::run(&mut out, &store, date, instant, *json)?;
        }
        Some(Commands::Write { date }) => {
            let store = open_store(cli.config.as_deref())?;
            write::run(
                &mut io::stdin().lock(),
                &mut out,
                &store,
                date.unwrap_or_else(today),
            )?;
        }
        Some(Commands::Cat { date }) => {
            let store = open_store(cli.config.as_deref())?;
            cat::run(&mut out, &store, date.unwrap_or_else(today))?;
        }
        Some(Commands::Dates { json }) => {
            let store = open_store(cli.config.as_deref())?;
            dates::run(&mut out, &store, *json)?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
