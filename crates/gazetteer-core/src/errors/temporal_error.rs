/// Temporal subsystem errors.
///
/// None of these abort an assembly: callers inside the engine catch them per
/// signal and treat the signal as absent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TemporalError {
    #[error("unparsable time stamp: {stamp:?}")]
    UnparsableStamp { stamp: String },

    #[error("unknown time precision code: {code:?}")]
    UnknownPrecision { code: String },

    #[error("calendar mismatch: expected {expected}, found {found}")]
    CalendarMismatch { expected: String, found: String },

    #[error("invalid delay window: {0}")]
    InvalidDelayWindow(String),
}
