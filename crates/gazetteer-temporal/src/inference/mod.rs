//! Boundary inference: from raw signals to a resolved boundary and a representative instant.

pub mod midpoint;
pub mod resolve;

pub use midpoint::{midpoint, representative_point};
pub use resolve::{resolve_boundary, resolve_evidence, ResolvedEvidence};
