mod gazetteer_error;
mod temporal_error;

pub use gazetteer_error::{GazetteerError, GazetteerResult};
pub use temporal_error::TemporalError;
