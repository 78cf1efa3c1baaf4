//! Boundary resolution.

use tracing::debug;

use gazetteer_core::models::{Boundary, BoundaryEvidence, RawTimeSignal, TimeEvidence, TimeSignal};

use crate::time_point::resolve_signal;

/// Both boundaries of one entity, plus how many signals had to be discarded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedEvidence {
    pub start: Boundary,
    pub end: Boundary,
    pub rejected: usize,
}

/// Pick the boundary shape for up to three parsed signals. `exact` dominates.
pub fn resolve_boundary(
    exact: Option<TimeSignal>,
    before: Option<TimeSignal>,
    after: Option<TimeSignal>,
) -> Boundary {
    match (exact, before, after) {
        (Some(exact), _, _) => Boundary::Exact(exact),
        (None, Some(before), Some(after)) => Boundary::Bracket { before, after },
        (None, Some(before), None) => Boundary::UpperOnly { before },
        (None, None, Some(after)) => Boundary::LowerOnly { after },
        (None, None, None) => Boundary::Unknown,
    }
}

/// Parse and resolve both boundaries of an entity.
///
/// Unusable signals (bad stamp, unknown precision, other calendar) are
/// treated as absent and counted in `rejected`.
pub fn resolve_evidence(evidence: &TimeEvidence, calendar: Option<&str>) -> ResolvedEvidence {
    let mut rejected = 0;
    let start = resolve_raw_boundary(&evidence.start, calendar, &mut rejected);
    let end = resolve_raw_boundary(&evidence.end, calendar, &mut rejected);
    ResolvedEvidence {
        start,
        end,
        rejected,
    }
}

fn resolve_raw_boundary(
    evidence: &BoundaryEvidence,
    calendar: Option<&str>,
    rejected: &mut usize,
) -> Boundary {
    let mut usable = |raw: &Option<RawTimeSignal>| -> Option<TimeSignal> {
        let raw = raw.as_ref()?;
        match resolve_signal(raw, calendar) {
            Ok(signal) => Some(signal),
            Err(error) => {
                *rejected += 1;
                debug!(stamp = %raw.stamp, precision = %raw.precision, %error, "ignoring unusable time signal");
                None
            }
        }
    };

    // All three are parsed so every unusable signal is counted, even when
    // `exact` wins.
    let exact = usable(&evidence.exact);
    let before = usable(&evidence.before);
    let after = usable(&evidence.after);
    resolve_boundary(exact, before, after)
}
