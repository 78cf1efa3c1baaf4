//! Lifetime (timeline) models.

use serde::{Deserialize, Serialize};

use super::rows::short_name;
use super::{Boundary, TimePoint};

/// Validity interval of one attribute version across all time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interval {
    pub version_id: String,
    pub landmark_id: String,
    pub attribute_type: String,
    pub values: Vec<String>,
    pub start: Boundary,
    pub end: Boundary,
    /// Representative start instant; the ordering key.
    pub start_point: Option<TimePoint>,
    pub end_point: Option<TimePoint>,
}

impl Interval {
    /// Timeline group: the attribute type's short name.
    pub fn group(&self) -> &str {
        short_name(&self.attribute_type)
    }

    /// Timeline headline: the version id's last segment.
    pub fn headline(&self) -> &str {
        short_name(&self.version_id)
    }

    /// Timeline body: one value per line.
    pub fn text(&self) -> String {
        self.values.join("\n")
    }
}

/// Appearance and disappearance of one landmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkLifetime {
    pub landmark_id: String,
    pub label: String,
    pub start: Boundary,
    pub end: Boundary,
}
