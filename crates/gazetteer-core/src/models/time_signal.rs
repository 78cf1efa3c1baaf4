//! Time signals as they arrive in query rows, and their parsed form.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Precision;

/// A time signal exactly as bound in a query result row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTimeSignal {
    /// ISO 8601 stamp, possibly with a leading `+` (`+1850-03-01T00:00:00Z`).
    pub stamp: String,
    /// Precision code (OWL-Time unit URI, unit name or Wikidata precision).
    pub precision: String,
    #[serde(default)]
    pub calendar: Option<String>,
}

/// A parsed, usable time signal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSignal {
    /// The stamp as received, kept for display and tracing.
    pub stamp: String,
    pub instant: DateTime<Utc>,
    pub precision: Precision,
    pub calendar: Option<String>,
}

/// Up to three raw signals describing one boundary of validity.
///
/// `after` is the earliest moment the change can have happened, `before`
/// the latest. When `exact` is present the other two are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryEvidence {
    pub exact: Option<RawTimeSignal>,
    pub before: Option<RawTimeSignal>,
    pub after: Option<RawTimeSignal>,
}

impl BoundaryEvidence {
    pub fn is_empty(&self) -> bool {
        self.exact.is_none() && self.before.is_none() && self.after.is_none()
    }

    /// Number of signals present, usable or not.
    pub fn signal_count(&self) -> usize {
        [&self.exact, &self.before, &self.after]
            .iter()
            .filter(|s| s.is_some())
            .count()
    }
}

/// Start and end evidence for one entity.
///
/// For landmarks the start is the appearance change and the end the
/// disappearance; for attribute versions, make-effective and outdate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimeEvidence {
    pub start: BoundaryEvidence,
    pub end: BoundaryEvidence,
}
