mod temporal_engine;

pub use temporal_engine::ITemporalEngine;
