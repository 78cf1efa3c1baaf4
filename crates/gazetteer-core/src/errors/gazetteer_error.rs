use super::TemporalError;

/// Top-level error type for the gazetteer engine.
/// Subsystem errors convert into this via `From` impls.
#[derive(Debug, thiserror::Error)]
pub enum GazetteerError {
    #[error("temporal error: {0}")]
    TemporalError(#[from] TemporalError),

    #[error("config error: {0}")]
    ConfigError(String),

    #[error("config parse error: {0}")]
    ConfigParseError(#[from] toml::de::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Convenience type alias.
pub type GazetteerResult<T> = Result<T, GazetteerError>;
