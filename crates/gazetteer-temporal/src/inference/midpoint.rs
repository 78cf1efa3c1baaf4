//! Representative instants for resolved boundaries.

use chrono::{DateTime, Utc};

use gazetteer_core::models::{Boundary, Precision, TimePoint};

/// Mean of two instants, truncated to day precision.
///
/// This is an approximation, not a recorded fact: points built from it are
/// flagged `approximate` and labelled as such.
pub fn midpoint(a: DateTime<Utc>, b: DateTime<Utc>) -> DateTime<Utc> {
    let mean = a.checked_add_signed((b - a) / 2).unwrap_or(a);
    Precision::Day.truncate(mean)
}

/// A single instant standing in for the boundary.
///
/// Exact and one-sided boundaries use their signal truncated to its own
/// precision; brackets use the day-precision midpoint of their bounds.
pub fn representative_point(boundary: &Boundary) -> Option<TimePoint> {
    match boundary {
        Boundary::Exact(signal)
        | Boundary::UpperOnly { before: signal }
        | Boundary::LowerOnly { after: signal } => Some(TimePoint {
            instant: signal.precision.truncate(signal.instant),
            precision: signal.precision,
            approximate: false,
        }),
        Boundary::Bracket { before, after } => Some(TimePoint {
            instant: midpoint(before.instant, after.instant),
            precision: Precision::Day,
            approximate: true,
        }),
        Boundary::Unknown => None,
    }
}
