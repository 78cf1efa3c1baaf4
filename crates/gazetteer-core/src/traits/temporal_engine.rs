//! ITemporalEngine: the temporal validity resolution interface.

use chrono::{DateTime, Utc};

use crate::models::{
    AttributeVersionRow, Interval, LandmarkLifetime, LandmarkRow, Snapshot, TimeEvidence,
    ValidityVerdict,
};

/// Temporal validity resolution over already-fetched event rows.
///
/// Every method is a pure function of its arguments and the engine's
/// configuration: no I/O, no state carried between calls. Bad rows degrade
/// to "no constraint" instead of failing the call.
pub trait ITemporalEngine: Send + Sync {
    /// Verdict for one entity's evidence at `at`.
    fn evaluate_at(&self, evidence: &TimeEvidence, at: DateTime<Utc>) -> ValidityVerdict;

    /// Landmarks valid at `at`, with the values of their valid attribute versions.
    fn snapshot_at(
        &self,
        landmarks: &[LandmarkRow],
        versions: &[AttributeVersionRow],
        at: DateTime<Utc>,
    ) -> Snapshot;

    /// One interval per attribute version, ordered by start.
    fn lifetime(&self, versions: &[AttributeVersionRow]) -> Vec<Interval>;

    /// Appearance and disappearance bounds of one landmark.
    fn landmark_lifetime(&self, landmark: &LandmarkRow) -> LandmarkLifetime;
}
