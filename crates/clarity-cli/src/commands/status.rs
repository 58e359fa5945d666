//! Status command for showing the task that is active now.

use std::io::Write;

use anyhow::{Context, Result};
use chrono::{NaiveDate, NaiveDateTime};

use clarity_core::{CurrentStatus, current_status, parse_timestamp};
use clarity_store::PlanStore;

use crate::format::{format_percent, format_timespan};

/// Decides which instant to resolve for `date`.
///
/// An explicit `--at` time always wins. Otherwise only today has a "now";
/// any other day has no current task.
pub fn resolve_instant(
    date: NaiveDate,
    at: Option<&str>,
    clock: NaiveDateTime,
) -> Result<Option<NaiveDateTime>> {
    if let Some(at) = at {
        let instant =
            parse_timestamp(at, date).with_context(|| format!("invalid --at time {at:?}"))?;
        return Ok(Some(instant));
    }

    Ok((clock.date() == date).then_some(clock))
}

/// Formats a status line, e.g. `Deep work • 1h 15m left (83% remaining)`.
pub fn format_status(status: Option<&CurrentStatus>) -> String {
    let Some(status) = status else {
        return "No current task.".to_string();
    };

    let name = if status.name.is_empty() {
        "(unnamed)"
    } else {
        status.name.as_str()
    };

    format!(
        "{name} • {} left ({} remaining)",
        format_timespan(status.remaining),
        format_percent(status.progress)
    )
}

/// Runs the status command.
pub fn run<W: Write>(
    writer: &mut W,
    store: &PlanStore,
    date: NaiveDate,
    instant: Option<NaiveDateTime>,
    json: bool,
) -> Result<()> {
    let schedule = super::load_schedule(store, date)?;
    let status = instant.and_then(|now| current_status(&schedule, now));
    tracing::debug!(%date, ?instant, active = status.is_some(), "resolved status");

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&status)?)?;
    } else {
        writeln!(writer, "{}", format_status(status.as_ref()))?;
    }

    Ok(())
}
