//! Per-variant validity rules for start and end boundaries.
//!
//! `after` is the earliest and `before` the latest moment a change can have
//! happened. A start is reached optimistically once `after` has passed and
//! for certain once `before` has passed; an end mirrors this with strict
//! comparisons, since an entity is gone once its end is not after T.

use chrono::{DateTime, Utc};

use gazetteer_core::models::{Boundary, TimeSignal, ValidityVerdict};

/// Admissible look-around `[T - N, T + N]` for loose bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayWindow {
    pub low: DateTime<Utc>,
    pub high: DateTime<Utc>,
}

pub fn start_verdict(
    boundary: &Boundary,
    at: DateTime<Utc>,
    window: Option<&DelayWindow>,
) -> ValidityVerdict {
    match boundary {
        Boundary::Exact(exact) => start_exact(exact, at),
        Boundary::Bracket { before, after } => start_bracket(before, after, at, window),
        Boundary::UpperOnly { before } => start_upper_only(before, at, window),
        Boundary::LowerOnly { after } => start_lower_only(after, at),
        Boundary::Unknown => ValidityVerdict::CERTAIN,
    }
}

pub fn end_verdict(
    boundary: &Boundary,
    at: DateTime<Utc>,
    window: Option<&DelayWindow>,
) -> ValidityVerdict {
    match boundary {
        Boundary::Exact(exact) => end_exact(exact, at),
        Boundary::Bracket { before, after } => end_bracket(before, after, at, window),
        Boundary::LowerOnly { after } => end_lower_only(after, at, window),
        Boundary::UpperOnly { before } => end_upper_only(before, at),
        Boundary::Unknown => ValidityVerdict::CERTAIN,
    }
}

fn start_exact(exact: &TimeSignal, at: DateTime<Utc>) -> ValidityVerdict {
    ValidityVerdict::new(exact.instant <= at, true)
}

fn start_bracket(
    before: &TimeSignal,
    after: &TimeSignal,
    at: DateTime<Utc>,
    window: Option<&DelayWindow>,
) -> ValidityVerdict {
    let reached = after.instant <= at;
    let surely_reached = before.instant <= at;
    // A window drops brackets whose latest start lies too far past T.
    let admissible = surely_reached || window.map_or(true, |w| before.instant <= w.high);
    ValidityVerdict::new(reached && admissible, reached && surely_reached)
}

fn start_upper_only(
    before: &TimeSignal,
    at: DateTime<Utc>,
    window: Option<&DelayWindow>,
) -> ValidityVerdict {
    let surely_reached = before.instant <= at;
    let possibly_reached = window.is_some_and(|w| before.instant <= w.high);
    ValidityVerdict::new(surely_reached || possibly_reached, surely_reached)
}

fn start_lower_only(after: &TimeSignal, at: DateTime<Utc>) -> ValidityVerdict {
    ValidityVerdict::new(after.instant <= at, false)
}

fn end_exact(exact: &TimeSignal, at: DateTime<Utc>) -> ValidityVerdict {
    ValidityVerdict::new(exact.instant > at, true)
}

fn end_bracket(
    before: &TimeSignal,
    after: &TimeSignal,
    at: DateTime<Utc>,
    window: Option<&DelayWindow>,
) -> ValidityVerdict {
    let pending = before.instant > at;
    let surely_pending = after.instant > at;
    // A window drops brackets whose earliest end lies too far before T.
    let admissible = surely_pending || window.map_or(true, |w| after.instant >= w.low);
    ValidityVerdict::new(pending && admissible, pending && surely_pending)
}

fn end_lower_only(
    after: &TimeSignal,
    at: DateTime<Utc>,
    window: Option<&DelayWindow>,
) -> ValidityVerdict {
    let surely_pending = after.instant > at;
    let possibly_pending = window.is_some_and(|w| after.instant >= w.low);
    ValidityVerdict::new(surely_pending || possibly_pending, surely_pending)
}

fn end_upper_only(before: &TimeSignal, at: DateTime<Utc>) -> ValidityVerdict {
    ValidityVerdict::new(before.instant > at, false)
}
