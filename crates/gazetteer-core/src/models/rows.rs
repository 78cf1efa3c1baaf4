//! Flat input rows, one per query result binding.

use serde::{Deserialize, Serialize};

use super::TimeEvidence;

/// A landmark with its appearance (start) and disappearance (end) evidence.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LandmarkRow {
    pub landmark_id: String,
    #[serde(default)]
    pub label: String,
    /// Label of the landmark this one belongs to (e.g. the street of an address).
    #[serde(default)]
    pub relatum_label: Option<String>,
    #[serde(default)]
    pub evidence: TimeEvidence,
}

/// One value of an attribute version with its make-effective (start) and
/// outdate (end) evidence. A version with several values spans several rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttributeVersionRow {
    pub version_id: String,
    pub landmark_id: String,
    /// Attribute type identifier, usually a URI ending in the type name.
    pub attribute_type: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub evidence: TimeEvidence,
}

impl AttributeVersionRow {
    /// Short attribute type name, e.g. `Name` for `.../attributeType/Name`.
    pub fn attribute_name(&self) -> &str {
        short_name(&self.attribute_type)
    }
}

/// Last segment of an identifier after `/` or `#`.
pub fn short_name(id: &str) -> &str {
    let trimmed = id.trim_end_matches(['/', '#']);
    trimmed
        .rsplit(['/', '#'])
        .next()
        .unwrap_or(trimmed)
}
