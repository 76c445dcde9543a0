//! Date/time conversions around the Windows FILETIME epoch.
//!
//! Chrome records visit timestamps as microsecond offsets from
//! 1601-01-01T00:00:00 (the Windows FILETIME epoch). This module converts
//! those offsets into calendar values and provides the small set of
//! parse/format helpers the export tools need.

use anyhow::{Context, Result, anyhow, bail};
use chrono::{Duration, Local, NaiveDate, NaiveDateTime, NaiveTime};

/// The Windows FILETIME epoch: 1601-01-01T00:00:00.
///
/// Chrome's internal timestamps are microsecond offsets from this point.
#[must_use]
pub fn win_epoch() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(1601, 1, 1)
        .map_or(NaiveDateTime::MIN, |d| d.and_time(NaiveTime::MIN))
}

/// Convert a Chrome timestamp (microseconds since the FILETIME epoch) to a
/// calendar date/time.
///
/// Negative offsets are not rejected and simply yield a date before the
/// epoch.
#[must_use]
pub fn add_microseconds_to_win_epoch(microseconds: i64) -> NaiveDateTime {
    win_epoch() + Duration::microseconds(microseconds)
}

/// Current local date/time.
#[must_use]
pub fn now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Current local date/time rendered with a chrono format pattern.
///
/// `fmt` must be a valid [`chrono::format::strftime`] pattern.
#[must_use]
pub fn now_formatted(fmt: &str) -> String {
    now().format(fmt).to_string()
}

/// Parse a date/time string against a caller-supplied pattern.
///
/// # Errors
///
/// Returns an error if `text` does not match `fmt`.
pub fn convert_to_datetime(text: &str, fmt: &str) -> Result<NaiveDateTime> {
    NaiveDateTime::parse_from_str(text, fmt)
        .with_context(|| format!("Failed to parse {text:?} with format {fmt:?}"))
}

/// Render a date/time with a caller-supplied pattern.
///
/// `fmt` must be a valid [`chrono::format::strftime`] pattern.
#[must_use]
pub fn convert_datetime_to_str(dt: &NaiveDateTime, fmt: &str) -> String {
    dt.format(fmt).to_string()
}

/// Construct a date/time at midnight for the given calendar date.
///
/// # Errors
///
/// Returns an error if `year`/`month`/`day` do not form a real calendar
/// date (e.g. February 30th).
pub fn get_datetime(year: i32, month: u32, day: u32) -> Result<NaiveDateTime> {
    let date = NaiveDate::from_ymd_opt(year, month, day)
        .ok_or_else(|| anyhow!("Invalid calendar date: {year:04}-{month:02}-{day:02}"))?;
    Ok(date.and_time(NaiveTime::MIN))
}

/// Combine a date with the minimum or maximum time of day.
///
/// With `min_time` the result is `date` at 00:00:00.000000; with `max_time`
/// it is `date` at 23:59:59.999999. When both flags are set, `min_time`
/// takes precedence.
///
/// # Errors
///
/// Returns an invalid-argument error when neither flag is set.
pub fn get_datetime_from_date(
    date: NaiveDate,
    min_time: bool,
    max_time: bool,
) -> Result<NaiveDateTime> {
    if !min_time && !max_time {
        bail!("Either min_time or max_time must be set");
    }

    if min_time {
        return Ok(date.and_time(NaiveTime::MIN));
    }

    date.and_hms_micro_opt(23, 59, 59, 999_999)
        .ok_or_else(|| anyhow!("Failed to combine {date} with the maximum time of day"))
}
