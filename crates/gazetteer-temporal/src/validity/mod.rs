//! Validity and certainty of an entity at a query instant.

pub mod evaluator;
pub mod rules;

pub use evaluator::ValidityEvaluator;
pub use rules::DelayWindow;
