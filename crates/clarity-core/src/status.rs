//! Status resolver for finding the span active at a point in time.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::TimeSpan;

/// The span active at a given instant.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrentStatus {
    /// Name of the active span.
    pub name: String,

    /// Whole seconds until the span ends.
    pub remaining: i64,

    /// Fraction of the span still remaining, in `[0, 1]`.
    pub progress: f64,
}

/// Finds the first span containing `now` and reports the time left in it.
///
/// Spans are half-open: a span is active from its start up to, but not
/// including, its end. Returns `None` if no span is active.
#[expect(
    clippy::cast_precision_loss,
    reason = "span lengths are bounded by a single day"
)]
pub fn current_status<'a, I>(spans: I, now: NaiveDateTime) -> Option<CurrentStatus>
where
    I: IntoIterator<Item = &'a TimeSpan>,
{
    // `contains` excludes zero-length spans, so the division below is safe.
    let span = spans.into_iter().find(|span| span.contains(now))?;

    let remaining = (span.end - now).num_seconds();
    let progress = remaining as f64 / span.elapsed_seconds() as f64;

    Some(CurrentStatus {
        name: span.name.clone(),
        remaining,
        progress,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use chrono::NaiveDate;

    use crate::{Schedule, parse_schedule};

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
    }

    fn at(hour: u32, minute: u32) -> NaiveDateTime {
        date().and_hms_opt(hour, minute, 0).unwrap()
    }

    fn deep_work() -> Schedule {
        parse_schedule("9:00 - 10:30 Deep work #project/focus", date()).unwrap()
    }

    #[test]
    fn test_inside_span() {
        let status = current_status(&deep_work(), at(9, 15)).unwrap();

        assert_eq!(status.name, "Deep work");
        assert_eq!(status.remaining, 4500);
        assert!((status.progress - 4500.0 / 5400.0).abs() < 1e-9);
    }

    #[test]
    fn test_start_is_inclusive() {
        let status = current_status(&deep_work(), at(9, 0)).unwrap();

        assert_eq!(status.remaining, 5400);
        assert!((status.progress - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_end_is_exclusive() {
        assert_eq!(current_status(&deep_work(), at(10, 30)), None);
    }

    #[test]
    fn test_outside_span() {
        assert_eq!(current_status(&deep_work(), at(8, 59)), None);
        assert_eq!(current_status(&deep_work(), at(10, 31)), None);
    }

    #[test]
    fn test_empty_schedule() {
        assert_eq!(current_status(&Schedule::default(), at(12, 0)), None);
    }

    #[test]
    fn test_gap_between_spans() {
        let schedule = parse_schedule("9:00 - 10:00 A\n11:00 - 12:00 B", date()).unwrap();

        assert_eq!(current_status(&schedule, at(10, 30)), None);
        assert_eq!(current_status(&schedule, at(11, 0)).unwrap().name, "B");
    }

    #[test]
    fn test_first_overlapping_span_wins() {
        let schedule =
            parse_schedule("9:30 - 11:00 Meeting\n9:00 - 12:00 Focus block", date()).unwrap();

        let status = current_status(&schedule, at(10, 0)).unwrap();
        assert_eq!(status.name, "Focus block");
        assert_eq!(status.remaining, 2 * 3600);
    }

    #[test]
    fn test_zero_length_span_never_matches() {
        let schedule = parse_schedule("9:00 - 9:00 Blink", date()).unwrap();

        assert_eq!(current_status(&schedule, at(9, 0)), None);
    }

    #[test]
    fn test_backwards_span_never_matches() {
        let schedule = parse_schedule("10:00 - 9:00 Backwards", date()).unwrap();

        assert_eq!(current_status(&schedule, at(9, 30)), None);
        assert_eq!(current_status(&schedule, at(10, 0)), None);
    }

    #[test]
    fn test_sub_second_before_end_has_zero_remaining() {
        let now = date().and_hms_milli_opt(10, 29, 59, 500).unwrap();
        let status = current_status(&deep_work(), now).unwrap();

        assert_eq!(status.remaining, 0);
        assert!(status.progress.abs() < f64::EPSILON);
    }

    #[test]
    fn test_seconds_in_now_are_counted() {
        let now = date().and_hms_opt(10, 29, 30).unwrap();
        let status = current_status(&deep_work(), now).unwrap();

        assert_eq!(status.remaining, 30);
    }
}
