//! Show command: time planned per tag for one day.

use std::fmt::Write as _;
use std::io::Write;

use anyhow::Result;
use chrono::NaiveDate;
use serde::Serialize;

use clarity_core::{Schedule, TagTotals, tag_totals};
use clarity_store::PlanStore;

use crate::format::{bar, format_date, format_timespan};

/// JSON shape of a day.
#[derive(Serialize)]
struct JsonDay<'a> {
    date: NaiveDate,
    spans: &'a Schedule,
    totals: &'a TagTotals,
}

/// Formats per-tag totals as a table with bars scaled to the largest tag.
pub fn format_totals(date: NaiveDate, totals: &TagTotals) -> String {
    let mut output = String::new();
    writeln!(output, "{}", format_date(date)).unwrap();
    writeln!(output).unwrap();

    if totals.is_empty() {
        writeln!(output, "No tagged time planned.").unwrap();
        return output;
    }

    let max = totals.max().unwrap_or(0);
    let width = totals
        .iter()
        .map(|(tag, _)| tag.chars().count())
        .max()
        .unwrap_or(0);
    for (tag, seconds) in totals.iter() {
        writeln!(
            output,
            "{tag:<width$}  {}  {}",
            bar(seconds, max),
            format_timespan(seconds)
        )
        .unwrap();
    }

    output
}

/// Formats a day's spans and totals as JSON.
pub fn format_day_json(
    date: NaiveDate,
    schedule: &Schedule,
    totals: &TagTotals,
) -> Result<String> {
    let day = JsonDay {
        date,
        spans: schedule,
        totals,
    };
    Ok(serde_json::to_string_pretty(&day)?)
}

/// Runs the show command.
pub fn run<W: Write>(writer: &mut W, store: &PlanStore, date: NaiveDate, json: bool) -> Result<()> {
    let schedule = super::load_schedule(store, date)?;
    let totals = tag_totals(&schedule);
    tracing::debug!(%date, spans = schedule.len(), tags = totals.len(), "computed totals");

    if json {
        writeln!(writer, "{}", format_day_json(date, &schedule, &totals)?)?;
    } else {
        write!(writer, "{}", format_totals(date, &totals))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use insta::assert_snapshot;
    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    const DAY: &str = "\
9:00 - 10:30 Deep work #project/focus
10:30 - 11:15 Review #project/review
12:00 - 12:30 Lunch #break
";

    #[test]
    fn test_show_renders_table() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        store.write(date(), DAY).unwrap();

        let mut output = Vec::new();
        run(&mut output, &store, date(), false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_snapshot!(output.trim_end(), @r"
        Monday, January 01, 2024

        #break           ████░░░░░░░░░░░░░░░░  30m
        #project/focus   █████████████░░░░░░░  1h 30m
        #project/review  ███████░░░░░░░░░░░░░  45m
        project          ████████████████████  2h 15m
        ");
    }

    #[test]
    fn test_show_empty_day() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());

        let mut output = Vec::new();
        run(&mut output, &store, date(), false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output, "Monday, January 01, 2024\n\nNo tagged time planned.\n");
    }

    #[test]
    fn test_show_json() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        store.write(date(), "9:00 - 9:30 Standup #team/sync\n").unwrap();

        let mut output = Vec::new();
        run(&mut output, &store, date(), true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "date": "2024-01-01",
                "spans": [{
                    "start": "2024-01-01T09:00:00",
                    "end": "2024-01-01T09:30:00",
                    "name": "Standup",
                    "tags": ["#team/sync", "team"],
                }],
                "totals": { "#team/sync": 1800, "team": 1800 },
            })
        );
    }

    #[test]
    fn test_show_reports_parse_failure() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        store.write(date(), "9:00 - 10:00 Fine\n9:00 Deep work\n").unwrap();

        let mut output = Vec::new();
        let err = run(&mut output, &store, date(), false).unwrap_err();

        assert!(output.is_empty());
        assert!(err.to_string().starts_with("failed to parse plan for 2024-01-01"));
        assert_eq!(
            err.root_cause().to_string(),
            r#"invalid timestamp: "work""#
        );
    }
}
