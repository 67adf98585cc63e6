use core::{error::Error, fmt};


/// Reasons a [`crate::DetectorConfig`] can be rejected at construction time.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConfigError
{
    /// The smoothing factor is NaN or outside of `[0, 1]`.
    AlphaOutOfRange(f32),

    /// The magnitude threshold is zero, negative, NaN or infinite.
    ThresholdNotPositive(f32),

    /// The debounce interval (in nanoseconds) is negative.
    NegativeInterval(i64),
}

impl Error for ConfigError {}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::AlphaOutOfRange(alpha) => write!(f, "Smoothing factor must be within [0, 1], got {}", alpha),
            Self::ThresholdNotPositive(threshold) => write!(f, "Step threshold must be a positive finite number, got {}", threshold),
            Self::NegativeInterval(ns) => write!(f, "Minimum step interval cannot be negative, got {}ns", ns),
        }
    }
}
