use crate::*;

/// Smoothing factor of the gravity estimate used when none is configured.
pub const DEFAULT_ALPHA: f32 = 0.8;

/// In m/s²; linear acceleration magnitude a sample must exceed to count as a step.
pub const DEFAULT_THRESHOLD: f32 = 10.0;

/// In nanoseconds; 250ms between steps, i.e. at most four steps a second.
pub const DEFAULT_MIN_STEP_INTERVAL_NS: i64 = 250_000_000;

/// Tuning of the step detector. Fields can only be set through [`DetectorConfig::new`], which
/// rejects values that would make the filter output meaningless, so every detector is built
/// from a valid config.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetectorConfig
{
    alpha: f32,
    threshold: f32,
    min_step_interval_ns: i64,
}

impl DetectorConfig {

    /// Validates and builds a config.
    ///
    /// * `alpha` - Weight the previous gravity estimate keeps for every new sample, `[0, 1]`.
    /// * `threshold` - In m/s²; magnitude the filtered acceleration must exceed, `> 0`.
    /// * `min_step_interval_ns` - Debounce interval between two accepted steps, `>= 0`.
    ///
    pub fn new(alpha: f32, threshold: f32, min_step_interval_ns: i64) -> Result<Self, ConfigError> {
        if !(0.0..=1.0).contains(&alpha) {
            return Err(ConfigError::AlphaOutOfRange(alpha));
        }
        if !threshold.is_finite() || threshold <= 0.0 {
            return Err(ConfigError::ThresholdNotPositive(threshold));
        }
        if min_step_interval_ns < 0 {
            return Err(ConfigError::NegativeInterval(min_step_interval_ns));
        }
        Ok(DetectorConfig { alpha, threshold, min_step_interval_ns })
    }

    #[inline]
    pub fn alpha(&self) -> f32 {
        self.alpha
    }

    #[inline]
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    #[inline]
    pub fn min_step_interval_ns(&self) -> i64 {
        self.min_step_interval_ns
    }
}

impl Default for DetectorConfig {
    fn default() -> Self {
        DetectorConfig {
            alpha: DEFAULT_ALPHA,
            threshold: DEFAULT_THRESHOLD,
            min_step_interval_ns: DEFAULT_MIN_STEP_INTERVAL_NS,
        }
    }
}
