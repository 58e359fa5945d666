//! Command-line argument definitions.

use std::path::PathBuf;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// Plan your day in plain text and see where the time goes.
///
/// Each line of a day's plan is `H:MM - H:MM name words #tags`, for example
/// `9:00 - 10:30 Deep work #project/focus`.
#[derive(Debug, Parser)]
#[command(name = "clarity", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show time planned per tag for a day.
    Show {
        /// Day to show (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Show the task that is active right now.
    Status {
        /// Day to look at (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<NaiveDate>,

        /// Time of day to resolve instead of the current time (e.g. 9:15).
        #[arg(long)]
        at: Option<String>,

        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Save a day's plan read from stdin.
    Write {
        /// Day to write (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// Print a day's plan as stored.
    Cat {
        /// Day to print (YYYY-MM-DD). Defaults to today.
        #[arg(short, long)]
        date: Option<NaiveDate>,
    },

    /// List days that have a plan.
    Dates {
        /// Output as JSON.
        #[arg(long)]
        json: bool,
    },
}
