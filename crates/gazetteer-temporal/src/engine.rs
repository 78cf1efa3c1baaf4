//! TemporalEngine: facade implementing ITemporalEngine.

use chrono::{DateTime, Utc};
use rayon::prelude::*;

use gazetteer_core::config::TemporalConfig;
use gazetteer_core::models::{
    AttributeVersionRow, Interval, LandmarkLifetime, LandmarkRow, Snapshot, TimeEvidence,
    ValidityVerdict,
};
use gazetteer_core::traits::ITemporalEngine;

use crate::inference::resolve_evidence;
use crate::lifetime;
use crate::snapshot;
use crate::validity::ValidityEvaluator;

/// The temporal validity resolution engine.
///
/// Stateless apart from its configuration; every call is a pure function of
/// its input rows.
#[derive(Debug, Clone, Default)]
pub struct TemporalEngine {
    config: TemporalConfig,
    evaluator: ValidityEvaluator,
}

impl TemporalEngine {
    pub fn new(config: TemporalConfig) -> Self {
        Self {
            evaluator: ValidityEvaluator::from_config(&config),
            config,
        }
    }

    pub fn config(&self) -> &TemporalConfig {
        &self.config
    }

    pub fn evaluator(&self) -> &ValidityEvaluator {
        &self.evaluator
    }

    /// Snapshots at several instants, computed in parallel.
    ///
    /// Results are returned in the order of `instants`.
    pub fn snapshot_series(
        &self,
        landmarks: &[LandmarkRow],
        versions: &[AttributeVersionRow],
        instants: &[DateTime<Utc>],
    ) -> Vec<Snapshot> {
        instants
            .par_iter()
            .map(|&at| self.snapshot_at(landmarks, versions, at))
            .collect()
    }
}

impl ITemporalEngine for TemporalEngine {
    fn evaluate_at(&self, evidence: &TimeEvidence, at: DateTime<Utc>) -> ValidityVerdict {
        let resolved = resolve_evidence(evidence, self.config.calendar.as_deref());
        self.evaluator.evaluate(&resolved.start, &resolved.end, at)
    }

    fn snapshot_at(
        &self,
        landmarks: &[LandmarkRow],
        versions: &[AttributeVersionRow],
        at: DateTime<Utc>,
    ) -> Snapshot {
        snapshot::assemble_snapshot(landmarks, versions, at, &self.config)
    }

    fn lifetime(&self, versions: &[AttributeVersionRow]) -> Vec<Interval> {
        lifetime::assemble_lifetime(versions, &self.config)
    }

    fn landmark_lifetime(&self, landmark: &LandmarkRow) -> LandmarkLifetime {
        lifetime::landmark_lifetime(landmark, &self.config)
    }
}
