// SPDX-FileCopyrightText: 2026 Holidaze Contributors
//
// SPDX-License-Identifier: Apache-2.0

//! Date-interval helpers shared by the calendar, the selection and the API boundary.

use jiff::civil::Date;
use jiff::tz::TimeZone;
use jiff::{Timestamp, Zoned};

/// Formats the local calendar date of `dt` as `YYYY-MM-DD`.
///
/// Reads the year/month/day fields in the datetime's own time zone. The value
/// is never converted to UTC first, which would move late-evening dates west
/// of Greenwich onto the next day.
pub fn to_local_iso_date(dt: &Zoned) -> String {
    format!("{:04}-{:02}-{:02}", dt.year(), dt.month(), dt.day())
}

/// Formats a civil date as `YYYY-MM-DD`.
pub fn format_iso_date(date: Date) -> String {
    format!("{:04}-{:02}-{:02}", date.year(), date.month(), date.day())
}

/// Whether the inclusive ranges `[start_a, end_a]` and `[start_b, end_b]` share a point.
///
/// Ranges that touch on the same day overlap.
pub fn ranges_overlap<T: PartialOrd>(start_a: T, end_a: T, start_b: T, end_b: T) -> bool {
    start_a <= end_b && start_b <= end_a
}

/// Number of nights between two dates; negative when `to` is before `from`.
pub fn nights_between(from: Date, to: Date) -> i64 {
    from.until(to).map_or(0, |span| i64::from(span.get_days()))
}

/// Parses a date sent by the API.
///
/// Accepts either `YYYY-MM-DD` or an RFC 3339 timestamp. A timestamp is
/// reduced to its calendar date in `tz`.
///
/// # Errors
///
/// Returns an error if the text is neither form.
pub fn parse_api_date(text: &str, tz: &TimeZone) -> Result<Date, jiff::Error> {
    match text.parse::<Timestamp>() {
        Ok(ts) => Ok(ts.to_zoned(tz.clone()).date()),
        Err(_) => text.trim().parse::<Date>(),
    }
}
