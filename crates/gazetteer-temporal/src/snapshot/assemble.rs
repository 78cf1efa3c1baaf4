//! Snapshot assembly: fold landmark rows, then attribute-version rows, into
//! the state of the gazetteer at one instant.

use std::collections::{BTreeMap, BTreeSet, HashSet};

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use gazetteer_core::config::TemporalConfig;
use gazetteer_core::models::{
    AttributeVersionRow, LandmarkRow, Snapshot, SnapshotLandmark, SnapshotStats,
};

use crate::inference::resolve_evidence;
use crate::validity::ValidityEvaluator;

struct LandmarkFold<'a> {
    landmarks: BTreeMap<String, SnapshotLandmark>,
    seen: HashSet<&'a str>,
    stats: SnapshotStats,
}

struct VersionFold {
    landmarks: BTreeMap<String, SnapshotLandmark>,
    valid_versions: BTreeSet<String>,
    stats: SnapshotStats,
}

/// Assemble the snapshot at `at`.
///
/// 1. Every distinct landmark is evaluated on its appearance/disappearance
///    evidence; invalid ones are left out, the rest keep their certainty.
/// 2. Every attribute-version row valid at `at` appends its value to its
///    landmark's property list (arrival order, no dedup). Geometry values
///    also feed the geometry list.
///
/// Bad rows never abort assembly; every skipped or degraded row is counted
/// in [`SnapshotStats`].
pub fn assemble_snapshot(
    landmarks: &[LandmarkRow],
    versions: &[AttributeVersionRow],
    at: DateTime<Utc>,
    config: &TemporalConfig,
) -> Snapshot {
    let evaluator = ValidityEvaluator::from_config(config);
    let calendar = config.calendar.as_deref();

    let initial = LandmarkFold {
        landmarks: BTreeMap::new(),
        seen: HashSet::new(),
        stats: SnapshotStats {
            landmark_rows: landmarks.len(),
            version_rows: versions.len(),
            ..SnapshotStats::default()
        },
    };

    let landmark_state = landmarks.iter().fold(initial, |mut state, row| {
        if !state.seen.insert(row.landmark_id.as_str()) {
            state.stats.duplicate_landmark_rows += 1;
            return state;
        }

        let resolved = resolve_evidence(&row.evidence, calendar);
        state.stats.unusable_signals += resolved.rejected;

        let verdict = evaluator.evaluate(&resolved.start, &resolved.end, at);
        if !verdict.valid {
            state.stats.excluded_landmarks += 1;
            debug!(landmark = %row.landmark_id, "landmark not valid at snapshot time");
            return state;
        }

        state.landmarks.insert(
            row.landmark_id.clone(),
            SnapshotLandmark {
                id: row.landmark_id.clone(),
                label: row.label.clone(),
                relatum_label: row.relatum_label.clone(),
                certain: verdict.certain,
                properties: BTreeMap::new(),
                geometries: Vec::new(),
            },
        );
        state
    });

    let initial = VersionFold {
        landmarks: landmark_state.landmarks,
        valid_versions: BTreeSet::new(),
        stats: landmark_state.stats,
    };

    let state = versions.iter().fold(initial, |mut state, row| {
        let resolved = resolve_evidence(&row.evidence, calendar);
        state.stats.unusable_signals += resolved.rejected;

        if !evaluator.evaluate(&resolved.start, &resolved.end, at).valid {
            state.stats.excluded_versions += 1;
            return state;
        }
        state.valid_versions.insert(row.version_id.clone());

        let Some(landmark) = state.landmarks.get_mut(&row.landmark_id) else {
            state.stats.orphan_versions += 1;
            debug!(version = %row.version_id, landmark = %row.landmark_id, "attribute version without a valid landmark");
            return state;
        };

        let attribute = row.attribute_name();
        let values = landmark.properties.entry(attribute.to_string()).or_default();
        match &row.value {
            Some(value) => {
                values.push(value.clone());
                if attribute == config.geometry_attribute {
                    landmark.geometries.push(value.clone());
                }
            }
            None => state.stats.empty_values += 1,
        }
        state
    });

    let certain = state.landmarks.values().filter(|lm| lm.certain).count();
    info!(
        at = %at,
        landmarks = state.landmarks.len(),
        certain,
        uncertain = state.landmarks.len() - certain,
        excluded = state.stats.excluded_landmarks,
        unusable_signals = state.stats.unusable_signals,
        "snapshot assembled"
    );

    Snapshot {
        at,
        landmarks: state.landmarks,
        valid_versions: state.valid_versions,
        stats: state.stats,
        name_attribute: config.name_attribute.clone(),
    }
}
