//! clarity CLI library.
//!
//! This crate provides the command-line interface over the plan store and
//! the core schedule engine.

mod cli;
pub mod commands;
mod config;
pub mod format;

pub use cli::{Cli, Commands};
pub use config::Config;
