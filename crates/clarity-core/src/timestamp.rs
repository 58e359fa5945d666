//! Hour:minute tokens anchored to a reference day.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use crate::ParseError;

/// Parses a `H:MM` or `H.MM` token into a point in time on `date`.
///
/// `.` and `:` are interchangeable. Seconds are always zero.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use clarity_core::parse_timestamp;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
/// let at = parse_timestamp("14.05", date).unwrap();
/// assert_eq!(at, date.and_hms_opt(14, 5, 0).unwrap());
/// ```
pub fn parse_timestamp(token: &str, date: NaiveDate) -> Result<NaiveDateTime, ParseError> {
    let invalid = || ParseError::InvalidTimestamp {
        token: token.to_string(),
    };

    let normalized = token.replace('.', ":");
    let (hour, minute) = normalized.split_once(':').ok_or_else(invalid)?;

    let hour: u32 = hour.parse().map_err(|_| invalid())?;
    let minute: u32 = minute.parse().map_err(|_| invalid())?;
    let time = NaiveTime::from_hms_opt(hour, minute, 0).ok_or_else(invalid)?;

    Ok(date.and_time(time))
}
