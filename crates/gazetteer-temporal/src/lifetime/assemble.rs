//! Interval assembly: one validity interval per attribute version.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use gazetteer_core::config::TemporalConfig;
use gazetteer_core::models::{AttributeVersionRow, Interval, LandmarkLifetime, LandmarkRow};

use crate::inference::{representative_point, resolve_evidence};
use crate::validity::ValidityEvaluator;

/// Build one [`Interval`] per attribute version, ordered by start.
///
/// Rows sharing a version id contribute their values in arrival order; the
/// first row's evidence is used. Intervals sort by their representative
/// start point (versions with no usable start first), then by version id.
/// No certainty filtering: every version is returned.
pub fn assemble_lifetime(
    versions: &[AttributeVersionRow],
    config: &TemporalConfig,
) -> Vec<Interval> {
    let calendar = config.calendar.as_deref();
    let mut rejected = 0;

    let (mut intervals, _) = versions.iter().fold(
        (Vec::<Interval>::new(), HashMap::<&str, usize>::new()),
        |(mut intervals, mut index), row| {
            if let Some(&pos) = index.get(row.version_id.as_str()) {
                if let Some(value) = &row.value {
                    intervals[pos].values.push(value.clone());
                }
                return (intervals, index);
            }

            let resolved = resolve_evidence(&row.evidence, calendar);
            rejected += resolved.rejected;

            index.insert(row.version_id.as_str(), intervals.len());
            intervals.push(Interval {
                version_id: row.version_id.clone(),
                landmark_id: row.landmark_id.clone(),
                attribute_type: row.attribute_type.clone(),
                values: row.value.iter().cloned().collect(),
                start_point: representative_point(&resolved.start),
                end_point: representative_point(&resolved.end),
                start: resolved.start,
                end: resolved.end,
            });
            (intervals, index)
        },
    );

    intervals.sort_by(|a, b| {
        let a_start = a.start_point.map(|p| p.instant);
        let b_start = b.start_point.map(|p| p.instant);
        a_start
            .cmp(&b_start)
            .then_with(|| a.version_id.cmp(&b.version_id))
    });

    info!(
        rows = versions.len(),
        intervals = intervals.len(),
        unusable_signals = rejected,
        "lifetime assembled"
    );
    intervals
}

/// Whether the interval covers `at`, with the evaluator's rules and no delay window.
pub fn interval_contains(interval: &Interval, at: DateTime<Utc>) -> bool {
    ValidityEvaluator::new(None)
        .evaluate(&interval.start, &interval.end, at)
        .valid
}

/// Appearance and disappearance bounds of a landmark.
pub fn landmark_lifetime(row: &LandmarkRow, config: &TemporalConfig) -> LandmarkLifetime {
    let resolved = resolve_evidence(&row.evidence, config.calendar.as_deref());
    if resolved.rejected > 0 {
        debug!(landmark = %row.landmark_id, rejected = resolved.rejected, "landmark has unusable time signals");
    }
    LandmarkLifetime {
        landmark_id: row.landmark_id.clone(),
        label: row.label.clone(),
        start: resolved.start,
        end: resolved.end,
    }
}
