pub mod display_config;
pub mod temporal_config;

use serde::{Deserialize, Serialize};

use crate::errors::GazetteerResult;

pub use display_config::DisplayConfig;
pub use temporal_config::TemporalConfig;

/// Top-level configuration aggregating all subsystem configs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GazetteerConfig {
    pub temporal: TemporalConfig,
    pub display: DisplayConfig,
}

impl GazetteerConfig {
    /// Load config from a TOML string, falling back to defaults for missing fields.
    pub fn from_toml(toml_str: &str) -> GazetteerResult<Self> {
        let config: Self = toml::from_str(toml_str)?;
        config.temporal.validate()?;
        Ok(config)
    }
}
