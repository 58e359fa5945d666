//! A whole day of plan text.

use std::ops::Index;
use std::slice;

use chrono::NaiveDate;
use serde::Serialize;

use crate::{ParseError, TimeSpan, parse_span};

/// The spans of one day, ordered by start time.
///
/// Spans that start at the same time keep their order from the text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Schedule {
    spans: Vec<TimeSpan>,
}

impl Schedule {
    /// Parses a day's text. See [`parse_schedule`].
    pub fn parse(text: &str, date: NaiveDate) -> Result<Self, ParseError> {
        parse_schedule(text, date)
    }

    /// Returns the spans in start order.
    pub fn spans(&self) -> &[TimeSpan] {
        &self.spans
    }

    /// Returns an iterator over the spans in start order.
    pub fn iter(&self) -> slice::Iter<'_, TimeSpan> {
        self.spans.iter()
    }

    /// Number of spans.
    pub fn len(&self) -> usize {
        self.spans.len()
    }

    /// Returns true if the day has no spans.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }
}

impl From<Vec<TimeSpan>> for Schedule {
    /// Builds a schedule from spans in any order.
    fn from(mut spans: Vec<TimeSpan>) -> Self {
        spans.sort_by_key(|span| span.start);
        Self { spans }
    }
}

impl Index<usize> for Schedule {
    type Output = TimeSpan;

    fn index(&self, index: usize) -> &Self::Output {
        &self.spans[index]
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = &'a TimeSpan;
    type IntoIter = slice::Iter<'a, TimeSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for Schedule {
    type Item = TimeSpan;
    type IntoIter = std::vec::IntoIter<TimeSpan>;

    fn into_iter(self) -> Self::IntoIter {
        self.spans.into_iter()
    }
}

/// Parses every line of a day's text into a [`Schedule`].
///
/// This is all-or-nothing: if any line fails, the error names the first bad
/// line and no spans are returned. Blank lines at the end of the text are
/// ignored, and empty text yields an empty schedule.
pub fn parse_schedule(text: &str, date: NaiveDate) -> Result<Schedule, ParseError> {
    let spans = text
        .trim_end()
        .lines()
        .enumerate()
        .map(|(index, line)| {
            parse_span(line, date).map_err(|source| ParseError::Line {
                number: index + 1,
                source: Box::new(source),
            })
        })
        .collect::<Result<Vec<_>, _>>()
        .inspect_err(|err| tracing::debug!(%date, error = %err, "failed to parse schedule"))?;

    tracing::debug!(%date, spans = spans.len(), "parsed schedule");
    Ok(Schedule::from(spans))
}
