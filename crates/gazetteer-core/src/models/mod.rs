mod boundary;
mod lifetime;
mod locale;
pub mod precision;
pub mod rows;
mod snapshot;
mod time_signal;
mod verdict;

pub use boundary::{Boundary, TimeComponents, TimePoint};
pub use lifetime::{Interval, LandmarkLifetime};
pub use locale::Locale;
pub use precision::Precision;
pub use rows::{AttributeVersionRow, LandmarkRow};
pub use snapshot::{Snapshot, SnapshotFeature, SnapshotLandmark, SnapshotStats};
pub use time_signal::{BoundaryEvidence, RawTimeSignal, TimeEvidence, TimeSignal};
pub use verdict::ValidityVerdict;
