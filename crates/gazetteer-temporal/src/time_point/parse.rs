//! Time stamp and signal parsing.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use gazetteer_core::config::temporal_config::GREGORIAN_CALENDAR;
use gazetteer_core::errors::TemporalError;
use gazetteer_core::models::{Precision, RawTimeSignal, TimeSignal};

/// Parse an ISO 8601 stamp into a UTC instant.
///
/// Accepts RFC 3339, a leading `+` sign, negative years, and truncated
/// forms (`YYYY-MM-DD`, `YYYY-MM`, `YYYY`). Month or day fields written as
/// `00`, as Wikidata does for coarse precisions, read as `01`. A date
/// without a time may carry a zone designator (`1850-03-01Z`,
/// `1850-03-01+01:00`); the zone is ignored.
pub fn parse_stamp(stamp: &str) -> Result<DateTime<Utc>, TemporalError> {
    let unparsable = || TemporalError::UnparsableStamp {
        stamp: stamp.to_string(),
    };

    let trimmed = stamp.trim();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);

    if let Ok(dt) = DateTime::parse_from_rfc3339(unsigned) {
        return Ok(dt.with_timezone(&Utc));
    }

    let (date_part, time_part) = match unsigned.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (strip_zone(unsigned), None),
    };

    let date = parse_date(date_part).ok_or_else(unparsable)?;
    let time = match time_part {
        Some(part) => parse_time(part).ok_or_else(unparsable)?,
        None => NaiveTime::MIN,
    };

    Ok(date.and_time(time).and_utc())
}

/// Parse a raw row signal, checking its precision code and calendar.
///
/// A signal without a calendar is accepted under any expected calendar.
pub fn resolve_signal(
    raw: &RawTimeSignal,
    expected_calendar: Option<&str>,
) -> Result<TimeSignal, TemporalError> {
    let precision =
        Precision::from_code(&raw.precision).ok_or_else(|| TemporalError::UnknownPrecision {
            code: raw.precision.clone(),
        })?;

    if let (Some(expected), Some(found)) = (expected_calendar, raw.calendar.as_deref()) {
        if !same_calendar(expected, found) {
            return Err(TemporalError::CalendarMismatch {
                expected: expected.to_string(),
                found: found.to_string(),
            });
        }
    }

    let instant = parse_stamp(&raw.stamp)?;

    Ok(TimeSignal {
        stamp: raw.stamp.clone(),
        instant,
        precision,
        calendar: raw.calendar.clone(),
    })
}

fn same_calendar(a: &str, b: &str) -> bool {
    let canonical = |c: &str| {
        let c = c.trim();
        if c.eq_ignore_ascii_case("gregorian") {
            GREGORIAN_CALENDAR.to_string()
        } else {
            c.to_string()
        }
    };
    canonical(a) == canonical(b)
}

// Drops a trailing `Z` or `±hh:mm` from a date-only stamp.
fn strip_zone(date: &str) -> &str {
    if let Some(rest) = date.strip_suffix(['Z', 'z']) {
        return rest;
    }
    let bytes = date.as_bytes();
    let n = bytes.len();
    let is_offset = n > 6
        && matches!(bytes[n - 6], b'+' | b'-')
        && bytes[n - 3] == b':'
        && [n - 5, n - 4, n - 2, n - 1]
            .iter()
            .all(|&i| bytes[i].is_ascii_digit());
    if is_offset {
        &date[..n - 6]
    } else {
        date
    }
}

fn parse_date(part: &str) -> Option<NaiveDate> {
    let (negative, digits) = match part.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, part),
    };

    let mut fields = digits.split('-');
    let year: i32 = fields.next()?.parse().ok()?;
    let month = parse_field(fields.next())?;
    let day = parse_field(fields.next())?;
    if fields.next().is_some() {
        return None;
    }

    let year = if negative { -year } else { year };
    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_field(field: Option<&str>) -> Option<u32> {
    match field {
        None => Some(1),
        Some(digits) => digits.parse::<u32>().ok().map(|v| v.max(1)),
    }
}

// Only reached when RFC 3339 parsing failed; a trailing zone offset is ignored.
fn parse_time(part: &str) -> Option<NaiveTime> {
    let clock = part.trim_end_matches('Z');
    let clock = match clock.find(['+', '-']) {
        Some(idx) => &clock[..idx],
        None => clock,
    };
    NaiveTime::parse_from_str(clock, "%H:%M:%S%.f")
        .or_else(|_| NaiveTime::parse_from_str(clock, "%H:%M"))
        .ok()
}
