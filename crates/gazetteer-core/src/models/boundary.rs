//! Resolved validity boundaries and representative time points.

use chrono::{DateTime, Datelike, Utc};
use serde::{Deserialize, Serialize};

use super::{Precision, TimeSignal};

/// What is known about one boundary (start or end) of an entity's validity.
///
/// Exactly one shape applies. `before` is the latest moment the change can
/// have happened and `after` the earliest.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Boundary {
    /// The change happened at this instant.
    Exact(TimeSignal),
    /// The change happened somewhere between the two bounds.
    Bracket { before: TimeSignal, after: TimeSignal },
    /// Only the latest possible moment is known.
    UpperOnly { before: TimeSignal },
    /// Only the earliest possible moment is known.
    LowerOnly { after: TimeSignal },
    /// No usable signal.
    Unknown,
}

/// A single instant standing in for a boundary, e.g. to place it on a timeline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimePoint {
    pub instant: DateTime<Utc>,
    pub precision: Precision,
    /// Inferred rather than recorded (bracket midpoint).
    pub approximate: bool,
}

/// Calendar fields of a [`TimePoint`], with fields finer than its precision cleared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeComponents {
    pub year: i32,
    pub month: Option<u32>,
    pub day: Option<u32>,
}

impl TimePoint {
    pub fn components(&self) -> TimeComponents {
        TimeComponents {
            year: self.instant.year(),
            month: self
                .precision
                .keeps_month()
                .then(|| self.instant.month()),
            day: self.precision.keeps_day().then(|| self.instant.day()),
        }
    }
}
