use serde::{Deserialize, Serialize};

use crate::models::Locale;

/// Settings for human-readable labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct DisplayConfig {
    pub locale: Locale,
}
