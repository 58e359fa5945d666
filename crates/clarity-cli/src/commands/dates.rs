//! Dates command for listing days that have a plan.

use std::io::Write;

use anyhow::Result;

use clarity_store::{PlanStore, date_key};

use crate::format::format_date;

/// Runs the dates command.
pub fn run<W: Write>(writer: &mut W, store: &PlanStore, json: bool) -> Result<()> {
    let dates = store.dates()?;

    if json {
        writeln!(writer, "{}", serde_json::to_string_pretty(&dates)?)?;
        return Ok(());
    }

    if dates.is_empty() {
        writeln!(writer, "No plans in {}.", store.root().display())?;
        return Ok(());
    }

    for date in dates {
        writeln!(writer, "{}  {}", date_key(date), format_date(date))?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;
    use insta::assert_snapshot;
    use tempfile::TempDir;

    #[test]
    fn test_dates_lists_stored_days() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        for day in [3, 1] {
            let date = NaiveDate::from_ymd_opt(2024, 1, day).unwrap();
            store.write(date, "").unwrap();
        }

        let mut output = Vec::new();
        run(&mut output, &store, false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_snapshot!(output.trim_end(), @r"
        2024-01-01  Monday, January 01, 2024
        2024-01-03  Wednesday, January 03, 2024
        ");
    }

    #[test]
    fn test_dates_json() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        store
            .write(NaiveDate::from_ymd_opt(2024, 2, 29).unwrap(), "")
            .unwrap();

        let mut output = Vec::new();
        run(&mut output, &store, true).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&output).unwrap();

        assert_eq!(value, serde_json::json!(["2024-02-29"]));
    }

    #[test]
    fn test_dates_empty() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());

        let mut output = Vec::new();
        run(&mut output, &store, false).unwrap();
        let output = String::from_utf8(output).unwrap();

        assert_eq!(output, format!("No plans in {}.\n", temp.path().display()));
    }
}
