use serde::{Deserialize, Serialize};

/// Whether an entity is valid at a query instant, and whether that answer is guaranteed.
///
/// `valid && !certain` means the entity is shown optimistically: the
/// available bounds neither rule it in nor out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ValidityVerdict {
    pub valid: bool,
    pub certain: bool,
}

impl ValidityVerdict {
    pub const CERTAIN: Self = Self {
        valid: true,
        certain: true,
    };

    pub fn new(valid: bool, certain: bool) -> Self {
        Self { valid, certain }
    }

    /// Combine the start and end verdicts of one entity.
    pub fn and(self, other: Self) -> Self {
        Self {
            valid: self.valid && other.valid,
            certain: self.certain && other.certain,
        }
    }
}
