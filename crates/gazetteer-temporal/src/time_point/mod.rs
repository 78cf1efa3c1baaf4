//! Time stamp parsing and localized labels.

pub mod label;
pub mod parse;

pub use label::{format_instant, format_label, format_point};
pub use parse::{parse_stamp, resolve_signal};
