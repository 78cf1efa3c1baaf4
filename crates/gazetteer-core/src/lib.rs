//! # gazetteer-core
//!
//! Shared types for the gazetteer temporal engine: time signals and
//! evidence rows, resolved boundaries, snapshot and lifetime models,
//! configuration, errors, and the engine trait.

pub mod config;
pub mod errors;
pub mod models;
pub mod traits;

pub use config::{DisplayConfig, GazetteerConfig, TemporalConfig};
pub use errors::{GazetteerError, GazetteerResult, TemporalError};
pub use traits::ITemporalEngine;
