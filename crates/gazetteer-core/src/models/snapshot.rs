//! Point-in-time snapshot of the gazetteer.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A landmark valid at the snapshot instant, with its current attribute values.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotLandmark {
    pub id: String,
    pub label: String,
    pub relatum_label: Option<String>,
    /// False when the landmark is shown although its bounds do not guarantee existence.
    pub certain: bool,
    /// Attribute name → values of the versions valid at the snapshot instant, in arrival order.
    pub properties: BTreeMap<String, Vec<String>>,
    pub geometries: Vec<String>,
}

impl SnapshotLandmark {
    /// First value of the given attribute, if any.
    pub fn first_value(&self, attribute: &str) -> Option<&str> {
        self.properties
            .get(attribute)
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}

/// One geometry of a landmark, ready for a spatial layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotFeature {
    pub landmark_id: String,
    pub name: Option<String>,
    pub geometry: String,
    pub certain: bool,
}

/// Bookkeeping of everything the assembler skipped or degraded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStats {
    pub landmark_rows: usize,
    pub version_rows: usize,
    pub excluded_landmarks: usize,
    pub duplicate_landmark_rows: usize,
    pub excluded_versions: usize,
    pub orphan_versions: usize,
    pub empty_values: usize,
    pub unusable_signals: usize,
}

/// Landmarks valid at `at`, keyed by landmark id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub at: DateTime<Utc>,
    pub landmarks: BTreeMap<String, SnapshotLandmark>,
    /// Ids of the attribute versions valid at `at`, attached or not.
    pub valid_versions: BTreeSet<String>,
    pub stats: SnapshotStats,
    /// Attribute holding the landmark name, used by [`Snapshot::features`].
    pub name_attribute: String,
}

impl Snapshot {
    pub fn len(&self) -> usize {
        self.landmarks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.landmarks.is_empty()
    }

    pub fn get(&self, landmark_id: &str) -> Option<&SnapshotLandmark> {
        self.landmarks.get(landmark_id)
    }

    /// Split landmarks into (certain, uncertain).
    pub fn partition(&self) -> (Vec<&SnapshotLandmark>, Vec<&SnapshotLandmark>) {
        self.landmarks.values().partition(|lm| lm.certain)
    }

    /// One feature per landmark geometry. Landmarks without geometry contribute nothing.
    pub fn features(&self) -> Vec<SnapshotFeature> {
        self.landmarks
            .values()
            .flat_map(|lm| {
                let name = lm.first_value(&self.name_attribute).map(str::to_string);
                lm.geometries.iter().map(move |geometry| SnapshotFeature {
                    landmark_id: lm.id.clone(),
                    name: name.clone(),
                    geometry: geometry.clone(),
                    certain: lm.certain,
                })
            })
            .collect()
    }
}
