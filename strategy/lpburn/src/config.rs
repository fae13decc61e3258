//! Configuration types for the LP burn monitor.

use std::fmt;

use alloy::primitives::Address;
use serde::Serialize;
use thiserror::Error;

/// Resolution of [`BurnThreshold`]: one millionth of a percent.
pub const MICROS_PER_PERCENT: u64 = 1_000_000;

/// Threshold used when none is configured.
pub const DEFAULT_THRESHOLD_PERCENT: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ThresholdError {
    #[error("threshold must be a finite number, got {0}")]
    NotFinite(f64),
    #[error("threshold must be within 0..=100 percent, got {0}")]
    OutOfRange(f64),
    #[error("threshold supports at most 6 decimal places, got {0}")]
    TooPrecise(f64),
}

/// Slack allowed when checking that a threshold lands on a whole millionth of a percent.
const MICROS_TOLERANCE: f64 = 1e-6;

/// Minimum share of the LP supply, in percent, that has to disappear between two
/// readings before an alert is raised.
///
/// Stored as an integer count of millionths of a percent so comparisons against
/// on-chain integers stay exact.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct BurnThreshold {
    micros: u64,
}

impl BurnThreshold {
    pub fn from_percent(percent: f64) -> Result<Self, ThresholdError> {
        if !percent.is_finite() {
            return Err(ThresholdError::NotFinite(percent));
        }
        if !(0.0..=100.0).contains(&percent) {
            return Err(ThresholdError::OutOfRange(percent));
        }
        let scaled = percent * MICROS_PER_PERCENT as f64;
        let micros = scaled.round();
        // float noise such as 49.999999 * 1e6 = 49999999.000000004 is accepted
        if (scaled - micros).abs() > MICROS_TOLERANCE {
            return Err(ThresholdError::TooPrecise(percent));
        }
        Ok(Self {
            micros: micros as u64,
        })
    }

    /// Threshold in millionths of a percent.
    pub fn micros(&self) -> u64 {
        self.micros
    }

    pub fn as_percent(&self) -> f64 {
        self.micros as f64 / MICROS_PER_PERCENT as f64
    }
}

impl Default for BurnThreshold {
    fn default() -> Self {
        Self {
            micros: (DEFAULT_THRESHOLD_PERCENT as u64) * MICROS_PER_PERCENT,
        }
    }
}

impl fmt::Display for BurnThreshold {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_percent())
    }
}

/// Configuration for PollScheduler (parameters only; clients are passed to `PollScheduler::new`).
#[derive(Debug, Clone)]
pub struct PollSchedulerConfig {
    /// Pair contracts to watch, checked in this order on every pass
    pub pairs: Vec<Address>,
    /// Alert when a single drop reaches this share of the previous supply
    pub threshold: BurnThreshold,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_fractional_percentages_exactly() {
        let threshold = BurnThreshold::from_percent(49.999999).unwrap();
        assert_eq!(threshold.micros(), 49_999_999);

        let threshold = BurnThreshold::from_percent(0.5).unwrap();
        assert_eq!(threshold.micros(), 500_000);
        assert_eq!(threshold.as_percent(), 0.5);
    }

    #[test]
    fn rejects_more_than_six_decimals() {
        assert_eq!(
            BurnThreshold::from_percent(50.0000004),
            Err(ThresholdError::TooPrecise(50.0000004))
        );
        assert_eq!(
            BurnThreshold::from_percent(12.3456789).map_err(|e| e.to_string()),
            Err("threshold supports at most 6 decimal places, got 12.3456789".to_string())
        );
        assert_eq!(
            BurnThreshold::from_percent(33.333333).unwrap().micros(),
            33_333_333
        );
    }

    #[test]
    fn accepts_bounds() {
        assert_eq!(BurnThreshold::from_percent(0.0).unwrap().micros(), 0);
        assert_eq!(
            BurnThreshold::from_percent(100.0).unwrap().micros(),
            100 * MICROS_PER_PERCENT
        );
    }

    #[test]
    fn rejects_invalid_values() {
        assert_eq!(
            BurnThreshold::from_percent(f64::NAN).map_err(|e| e.to_string()),
            Err("threshold must be a finite number, got NaN".to_string())
        );
        assert!(matches!(
            BurnThreshold::from_percent(f64::INFINITY),
            Err(ThresholdError::NotFinite(_))
        ));
        assert_eq!(
            BurnThreshold::from_percent(-1.0),
            Err(ThresholdError::OutOfRange(-1.0))
        );
        assert_eq!(
            BurnThreshold::from_percent(100.5),
            Err(ThresholdError::OutOfRange(100.5))
        );
    }

    #[test]
    fn default_is_fifty_percent() {
        let threshold = BurnThreshold::default();
        assert_eq!(threshold, BurnThreshold::from_percent(50.0).unwrap());
        assert_eq!(threshold.to_string(), "50");
    }
}
