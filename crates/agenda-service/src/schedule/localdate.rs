//! Civil-date to UTC-range resolution.
//!
//! A "local calendar date" such as `2025-01-15` in `America/Los_Angeles`
//! corresponds to an inclusive window of UTC instants. The window depends on
//! the timezone's offset rules at that specific date, so both day boundaries
//! are converted independently; across a DST transition the two offsets can
//! differ and the day spans 23 or 25 real-world hours.

use std::str::FromStr;

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

/// Last representable wall-clock reading of a civil day.
const END_OF_DAY: NaiveTime = match NaiveTime::from_hms_milli_opt(23, 59, 59, 999) {
    Some(time) => time,
    None => panic!("23:59:59.999 is a valid wall-clock time"),
};

/// Error during local-date range resolution.
#[derive(Debug, thiserror::Error)]
pub enum RangeError {
    /// Civil date string does not parse as `YYYY-MM-DD`.
    #[error("Invalid date format: {0}")]
    InvalidDateFormat(String),

    /// Unknown or invalid IANA timezone identifier.
    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Inclusive UTC window corresponding to one civil date in one timezone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl UtcRange {
    /// Inclusive at both ends: an instant exactly on either boundary is in.
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant <= self.end
    }
}

/// ## Summary
/// Resolves the inclusive UTC instant range spanned by one civil date in the
/// given IANA timezone: local `00:00:00.000` through local `23:59:59.999`,
/// each converted with the offset in force at that wall-clock moment.
///
/// DST days are not special-cased; whatever real-world duration falls out of
/// the two independent conversions is the answer.
///
/// ## Errors
/// Returns `RangeError::InvalidDateFormat` if `date` is not a `YYYY-MM-DD`
/// civil date, `RangeError::UnknownTimezone` if `timezone` is not a
/// recognized IANA identifier.
pub fn resolve_local_date_range(date: &str, timezone: &str) -> Result<UtcRange, RangeError> {
    let civil = parse_civil_date(date)?;
    let tz = parse_timezone(timezone)?;

    Ok(UtcRange {
        start: wall_clock_to_utc(civil.and_time(NaiveTime::MIN), tz),
        end: wall_clock_to_utc(civil.and_time(END_OF_DAY), tz),
    })
}

/// ## Summary
/// Reports whether a UTC instant falls on the given civil date in the given
/// timezone, inclusive at both day boundaries.
///
/// Pure and uncached; every call re-resolves the range.
///
/// ## Errors
/// Propagates `RangeError` from range resolution unchanged.
pub fn is_within_local_date(
    timestamp: DateTime<Utc>,
    date: &str,
    timezone: &str,
) -> Result<bool, RangeError> {
    let range = resolve_local_date_range(date, timezone)?;
    Ok(range.contains(timestamp))
}

fn parse_civil_date(date: &str) -> Result<NaiveDate, RangeError> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .map_err(|_e| RangeError::InvalidDateFormat(date.to_string()))
}

fn parse_timezone(timezone: &str) -> Result<Tz, RangeError> {
    Tz::from_str(timezone).map_err(|_e| RangeError::UnknownTimezone(timezone.to_string()))
}

/// Interprets a wall-clock reading in `tz` and converts it to UTC.
///
/// A DST fold (the reading occurs twice) takes the first occurrence. A DST
/// gap (the reading does not exist) shifts the clock forward an hour at a
/// time until it lands on a representable reading; gaps are bounded, so the
/// loop terminates.
fn wall_clock_to_utc(local: NaiveDateTime, tz: Tz) -> DateTime<Utc> {
    let mut reading = local;
    loop {
        match tz.from_local_datetime(&reading) {
            LocalResult::Single(instant) => return instant.with_timezone(&Utc),
            LocalResult::Ambiguous(first, _second) => return first.with_timezone(&Utc),
            LocalResult::None => reading += Duration::hours(1),
        }
    }
}
