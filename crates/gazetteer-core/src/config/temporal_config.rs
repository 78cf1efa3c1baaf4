//! Temporal subsystem configuration.

use serde::{Deserialize, Serialize};

use crate::errors::{GazetteerResult, TemporalError};

/// Gregorian calendar identifier used by the fact graph.
pub const GREGORIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q1985727";

/// Largest accepted delay window, in years.
pub const MAX_DELAY_WINDOW_YEARS: u32 = 10_000;

/// Configuration for validity evaluation and row assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TemporalConfig {
    /// Delay window in years. `None` means no window: loose bounds are read strictly.
    pub delay_window_years: Option<u32>,
    /// Calendar the query instant is expressed in. Signals in another calendar are ignored.
    pub calendar: Option<String>,
    /// Attribute type whose values are landmark geometries.
    pub geometry_attribute: String,
    /// Attribute type whose first value names a landmark.
    pub name_attribute: String,
}

impl Default for TemporalConfig {
    fn default() -> Self {
        Self {
            delay_window_years: None,
            calendar: Some(GREGORIAN_CALENDAR.to_string()),
            geometry_attribute: "Geometry".to_string(),
            name_attribute: "Name".to_string(),
        }
    }
}

impl TemporalConfig {
    /// Reject settings the evaluator cannot honour.
    pub fn validate(&self) -> GazetteerResult<()> {
        if let Some(years) = self.delay_window_years {
            if years > MAX_DELAY_WINDOW_YEARS {
                return Err(TemporalError::InvalidDelayWindow(format!(
                    "{years} years exceeds the maximum of {MAX_DELAY_WINDOW_YEARS}"
                ))
                .into());
            }
        }
        Ok(())
    }
}
