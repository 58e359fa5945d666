//! A single line of a day plan.

use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;

use crate::tags::{TAG_MARKER, expand_tags};
use crate::{ParseError, parse_timestamp};

/// Index of the end time token; the separator sits between start and end.
const END_TOKEN: usize = 2;

/// Index of the first word of the activity name.
const NAME_START: usize = 3;

/// One contiguous interval of time attributed to a named activity.
///
/// `start <= end` is expected but not enforced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimeSpan {
    /// When the activity starts.
    pub start: NaiveDateTime,

    /// When the activity ends.
    pub end: NaiveDateTime,

    /// Activity name; may be empty.
    pub name: String,

    /// Tags with hierarchical parents already expanded.
    pub tags: Vec<String>,
}

impl TimeSpan {
    /// Whole seconds from start to end. Negative if the span ends before it starts.
    pub fn elapsed_seconds(&self) -> i64 {
        (self.end - self.start).num_seconds()
    }

    /// Returns true if `at` falls within `[start, end)`.
    pub fn contains(&self, at: NaiveDateTime) -> bool {
        self.start <= at && at < self.end
    }
}

/// Parses one plan line: `<start> <separator> <end> <name words...> <#tags...>`.
///
/// The separator token can be anything. Tags run from the first token starting
/// with `#` to the end of the line; the name is every token between the end
/// time and the first tag.
pub fn parse_span(line: &str, date: NaiveDate) -> Result<TimeSpan, ParseError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() <= END_TOKEN {
        return Err(ParseError::MissingFields {
            found: tokens.len(),
        });
    }

    let tag_index = tokens
        .iter()
        .position(|token| token.starts_with(TAG_MARKER))
        .unwrap_or(tokens.len());

    let start = parse_timestamp(tokens[0], date)?;
    let end = parse_timestamp(tokens[END_TOKEN], date)?;

    let name = if tag_index > NAME_START {
        tokens[NAME_START..tag_index].join(" ")
    } else {
        String::new()
    };
    let tags = expand_tags(&tokens[tag_index..]);

    Ok(TimeSpan {
        start,
        end,
        name,
        tags,
    })
}
