//! Lifetime reconstruction for timelines.

pub mod assemble;
pub mod describe;

pub use assemble::{assemble_lifetime, interval_contains, landmark_lifetime};
pub use describe::{circa_label, describe_boundary, describe_lifetime};
