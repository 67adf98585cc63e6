use cfg_if::cfg_if;
use crate::*;

/// Counts steps in a stream of accelerometer samples.
///
/// Every sample updates a low-pass estimate of gravity; the remaining (linear) acceleration is a
/// step candidate when its magnitude exceeds the configured threshold. Candidates closer than
/// the debounce interval to the previous accepted step are dropped, since one footfall usually
/// stays above the threshold for several samples.
///
/// The gravity estimate starts at zero, so right after construction or [`StepDetector::reset`]
/// the first samples see (nearly) their full raw magnitude. The debounce check is also measured
/// from timestamp zero at that point.
///
/// Samples are not checked for NaN or infinite axes. One such sample turns the gravity estimate
/// non-finite for good, and no step is counted again until [`StepDetector::reset`].
///
/// Calls must be serialized by the host; `process` takes `&mut self` and never blocks.
///
pub struct StepDetector
{
    config: DetectorConfig,

    /// Running low-pass estimate of the gravity component of the signal.
    gravity: Vector,

    /// In nanoseconds; timestamp of the sample that triggered the last accepted step.
    last_step_timestamp: i64,

    /// Steps accepted since construction or the last reset.
    step_count: u32,

    /// Linear acceleration (sample minus gravity estimate) of the most recent sample.
    #[cfg(feature = "debug")]
    pub linear_acceleration: Vector,

    /// Magnitude of `linear_acceleration`.
    #[cfg(feature = "debug")]
    pub magnitude: f32,
}

impl StepDetector {

    #[inline]
    pub fn new(config: DetectorConfig) -> Self {
        StepDetector {
            config,
            gravity: Vector::zero(),
            last_step_timestamp: 0,
            step_count: 0,
            #[cfg(feature = "debug")]
            linear_acceleration: Vector::zero(),
            #[cfg(feature = "debug")]
            magnitude: 0.0,
        }
    }

    /// Feeds one sample through the filter, returns the step it completes if there is one.
    ///
    pub fn process(&mut self, sample: &Sample) -> Option<StepEvent> {
        // Gravity is whatever survives the low-pass filter, the rest is body motion.
        self.gravity = self.gravity.low_pass(&sample.accel, self.config.alpha());
        let linear = sample.accel - self.gravity;
        let magnitude = linear.magnitude();

        cfg_if!{ if #[cfg(feature = "debug")] {
            self.linear_acceleration = linear;
            self.magnitude = magnitude;
        }}

        log::trace!(
            "t={}ns gravity=({}, {}, {}) magnitude={}",
            sample.timestamp, self.gravity.x, self.gravity.y, self.gravity.z, magnitude
        );

        let elapsed = sample.timestamp.saturating_sub(self.last_step_timestamp);
        if magnitude > self.config.threshold() && elapsed > self.config.min_step_interval_ns() {
            self.last_step_timestamp = sample.timestamp;
            self.step_count = self.step_count.saturating_add(1);
            log::debug!("Step {} at {}ns (magnitude {})", self.step_count, sample.timestamp, magnitude);
            return Some(StepEvent { timestamp: sample.timestamp });
        }

        None
    }

    /// Lazily runs [`StepDetector::process`] over a slice of samples, yielding the steps found.
    /// Samples are only consumed as the iterator is advanced.
    ///
    pub fn process_batch<'a>(&'a mut self, samples: &'a [Sample]) -> impl Iterator<Item = StepEvent> + 'a {
        samples.iter().filter_map(move |sample| self.process(sample))
    }

    /// Processes every sample and returns how many steps they contained.
    ///
    pub fn count_steps(&mut self, samples: &[Sample]) -> usize {
        self.process_batch(samples).count()
    }

    /// Returns the detector to its cold start, the config is kept.
    ///
    pub fn reset(&mut self) {
        log::info!("Resetting step detector after {} steps", self.step_count);
        self.gravity = Vector::zero();
        self.last_step_timestamp = 0;
        self.step_count = 0;

        cfg_if!{ if #[cfg(feature = "debug")] {
            self.linear_acceleration = Vector::zero();
            self.magnitude = 0.0;
        }}
    }

    #[inline]
    pub fn config(&self) -> &DetectorConfig {
        &self.config
    }

    /// Current gravity estimate.
    #[inline]
    pub fn gravity(&self) -> Vector {
        self.gravity
    }

    /// In nanoseconds; zero until the first step is accepted.
    #[inline]
    pub fn last_step_timestamp(&self) -> i64 {
        self.last_step_timestamp
    }

    /// Number of steps returned by `process` since construction or the last reset.
    #[inline]
    pub fn step_count(&self) -> u32 {
        self.step_count
    }
}

impl Default for StepDetector {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
