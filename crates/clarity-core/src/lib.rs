//! Core domain logic for clarity.
//!
//! A day plan is plain text, one time span per line:
//!
//! ```text
//! 9:00 - 10:30 Deep work #project/focus
//! 10.30 - 11.00 Email #admin
//! ```
//!
//! This crate turns that text into a [`Schedule`] and derives the two views
//! built on top of it:
//! - [`TagTotals`]: elapsed seconds per tag, with hierarchical tags also
//!   counted towards their parent
//! - [`CurrentStatus`]: the span active at a given instant
//!
//! Everything here is pure. The reference date and the clock reading are
//! always supplied by the caller.

mod error;
pub mod schedule;
pub mod span;
pub mod status;
pub mod tags;
pub mod timestamp;
pub mod totals;

pub use error::ParseError;
pub use schedule::{Schedule, parse_schedule};
pub use span::{TimeSpan, parse_span};
pub use status::{CurrentStatus, current_status};
pub use tags::{TAG_MARKER, expand_tags};
pub use timestamp::parse_timestamp;
pub use totals::{TagTotals, tag_totals};
