//! Point-in-time snapshot assembly.

pub mod assemble;

pub use assemble::assemble_snapshot;
