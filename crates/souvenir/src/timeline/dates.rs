//! Whole-day date arithmetic.
//!
//! Counting is inclusive of the start day: a span from a date to itself is
//! one day, not zero. Working on [`NaiveDate`] values keeps the count
//! independent of time-of-day and daylight-saving offsets.

use chrono::NaiveDate;

use crate::error::{Error, Result};

/// The strict date format used everywhere in the data.
const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a `YYYY-MM-DD` literal.
///
/// # Errors
///
/// Returns [`Error::InvalidDate`] for anything that is not a valid calendar
/// date in strict `YYYY-MM-DD` form.
pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|source| Error::invalid_date(value, source))
}

/// Whole days from `start` to `end`, counting the start day itself.
///
/// `span_days(d, d)` is `1`. When `end` precedes `start` the result is zero
/// or negative; callers decide whether such spans are meaningful.
#[must_use]
pub fn span_days(start: NaiveDate, end: NaiveDate) -> i64 {
    end.signed_duration_since(start).num_days() + 1
}
