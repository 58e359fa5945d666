//! Parse errors for plan text.

use thiserror::Error;

/// Failure to turn plan text into spans.
///
/// A single bad line fails the whole day, so the schedule parser wraps the
/// underlying cause in [`ParseError::Line`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// A time token was not `H:MM` / `H.MM` or was out of range.
    #[error("invalid timestamp: {token:?}")]
    InvalidTimestamp { token: String },

    /// The line is too short to hold `<start> <separator> <end>`.
    #[error("expected at least 3 fields (start, separator, end), found {found}")]
    MissingFields { found: usize },

    /// A line of the day failed to parse.
    #[error("line {number}: {source}")]
    Line {
        number: usize,
        #[source]
        source: Box<ParseError>,
    },
}

impl ParseError {
    /// Returns the 1-based line number, if the error came from a day's text.
    pub const fn line_number(&self) -> Option<usize> {
        match self {
            Self::Line { number, .. } => Some(*number),
            _ => None,
        }
    }
}
