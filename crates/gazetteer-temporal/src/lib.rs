//! # gazetteer-temporal
//!
//! Temporal validity resolution for an event-sourced gazetteer.
//! Parses approximately dated change events, infers representative
//! instants, decides existence and certainty at a query instant, and
//! assembles point-in-time snapshots and per-version lifetimes.

pub mod engine;
pub mod inference;
pub mod lifetime;
pub mod snapshot;
pub mod time_point;
pub mod validity;

pub use engine::TemporalEngine;
