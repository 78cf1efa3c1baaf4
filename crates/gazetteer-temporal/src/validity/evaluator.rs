//! Entity validity evaluation at a query instant.

use chrono::{DateTime, Months, Utc};

use gazetteer_core::config::TemporalConfig;
use gazetteer_core::models::{Boundary, ValidityVerdict};

use super::rules::{end_verdict, start_verdict, DelayWindow};

/// Decides whether an entity is valid at an instant, and whether that is certain.
///
/// Holds only the delay window setting, so one evaluator can be shared
/// freely across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidityEvaluator {
    delay_window_years: Option<u32>,
}

impl ValidityEvaluator {
    pub fn new(delay_window_years: Option<u32>) -> Self {
        Self { delay_window_years }
    }

    pub fn from_config(config: &TemporalConfig) -> Self {
        Self::new(config.delay_window_years)
    }

    pub fn delay_window_years(&self) -> Option<u32> {
        self.delay_window_years
    }

    /// `[at - N years, at + N years]`, clamped to the representable range.
    pub fn window_at(&self, at: DateTime<Utc>) -> Option<DelayWindow> {
        let years = self.delay_window_years?;
        let span = Months::new(years.saturating_mul(12));
        Some(DelayWindow {
            low: at.checked_sub_months(span).unwrap_or(DateTime::<Utc>::MIN_UTC),
            high: at.checked_add_months(span).unwrap_or(DateTime::<Utc>::MAX_UTC),
        })
    }

    pub fn evaluate_start(&self, start: &Boundary, at: DateTime<Utc>) -> ValidityVerdict {
        start_verdict(start, at, self.window_at(at).as_ref())
    }

    pub fn evaluate_end(&self, end: &Boundary, at: DateTime<Utc>) -> ValidityVerdict {
        end_verdict(end, at, self.window_at(at).as_ref())
    }

    /// Combined verdict: valid only if both boundaries allow it, certain only if both are certain.
    pub fn evaluate(&self, start: &Boundary, end: &Boundary, at: DateTime<Utc>) -> ValidityVerdict {
        let window = self.window_at(at);
        start_verdict(start, at, window.as_ref()).and(end_verdict(end, at, window.as_ref()))
    }
}
