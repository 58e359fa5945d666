//! CLI subcommand implementations.

pub mod cat;
pub mod dates;
pub mod show;
pub mod status;
pub mod write;

use anyhow::{Context, Result};
use chrono::NaiveDate;

use clarity_core::{Schedule, parse_schedule};
use clarity_store::PlanStore;

/// Reads and parses the stored plan for `date`.
fn load_schedule(store: &PlanStore, date: NaiveDate) -> Result<Schedule> {
    let text = store.read(date)?;
    parse_schedule(&text, date).with_context(|| {
        format!(
            "failed to parse plan for {date} ({})",
            store.path_for(date).display()
        )
    })
}
