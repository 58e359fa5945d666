//! Cat command for printing a day's plan as stored.

use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;

use clarity_store::PlanStore;

/// Runs the cat command.
pub fn run<W: Write>(writer: &mut W, store: &PlanStore, date: NaiveDate) -> Result<()> {
    let text = store.read(date)?;
    writer.write_all(text.as_bytes())?;
    Ok(())
}
