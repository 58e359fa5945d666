//! Write command for saving a day's plan from stdin.
//!
//! The text is saved even if it does not parse, so work in progress is never
//! lost; the parse error is still reported and the command fails.

use std::io::{Read, Write};

use anyhow::{Context, Result};
use chrono::NaiveDate;

use clarity_core::{parse_schedule, tag_totals};
use clarity_store::PlanStore;

use super::show::format_totals;

/// Runs the write command.
pub fn run<R: Read, W: Write>(
    reader: &mut R,
    writer: &mut W,
    store: &PlanStore,
    date: NaiveDate,
) -> Result<()> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .context("failed to read plan from stdin")?;

    store.write(date, &text)?;
    let path = store.path_for(date);

    let schedule = parse_schedule(&text, date)
        .with_context(|| format!("saved {}, but it does not parse", path.display()))?;

    writeln!(
        writer,
        "Saved {} span(s) to {}",
        schedule.len(),
        path.display()
    )?;
    writeln!(writer)?;
    write!(writer, "{}", format_totals(date, &tag_totals(&schedule)))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use tempfile::TempDir;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    #[test]
    fn test_write_saves_and_summarizes() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        let text = "9:00 - 10:00 Plan #admin\n";

        let mut output = Vec::new();
        run(&mut text.as_bytes(), &mut output, &store, date()).unwrap();

        assert_eq!(store.read(date()).unwrap(), text);
        let output = String::from_utf8(output).unwrap();
        let path = store.path_for(date());
        assert_eq!(
            output,
            format!(
                "Saved 1 span(s) to {}\n\nMonday, January 01, 2024\n\n#admin  {}  1h\n",
                path.display(),
                "█".repeat(20)
            )
        );
    }

    #[test]
    fn test_write_keeps_text_that_does_not_parse() {
        let temp = TempDir::new().unwrap();
        let store = PlanStore::new(temp.path());
        let text = "9:00 - 10:00 Fine\n9:00 half typed";

        let mut output = Vec::new();
        let err = run(&mut text.as_bytes(), &mut output, &store, date()).unwrap_err();

        assert_eq!(store.read(date()).unwrap(), text);
        assert!(output.is_empty());
        assert!(err.to_string().contains("does not parse"));
    }
}
