use crate::*;

/// A tracking session around a [`StepDetector`]. Readings only reach the detector between
/// [`Pedometer::start`] and [`Pedometer::stop`]; stopping keeps the count and the filter state so
/// tracking can be resumed.
///
pub struct Pedometer
{
    detector: StepDetector,
    tracking: bool,
}

impl Pedometer {

    #[inline]
    pub fn new(config: DetectorConfig) -> Self {
        Pedometer {
            detector: StepDetector::new(config),
            tracking: false,
        }
    }

    pub fn start(&mut self) {
        if !self.tracking {
            log::info!("Step tracking started");
            self.tracking = true;
        }
    }

    pub fn stop(&mut self) {
        if self.tracking {
            log::info!("Step tracking stopped at {} steps", self.detector.step_count());
            self.tracking = false;
        }
    }

    #[inline]
    pub fn is_tracking(&self) -> bool {
        self.tracking
    }

    /// Handles one sensor callback. Readings that arrive while tracking is off, and readings from
    /// sensors other than the accelerometer, are dropped without touching any state.
    ///
    pub fn on_reading(&mut self, reading: &SensorReading) -> Option<StepEvent> {
        if !self.tracking {
            return None;
        }
        self.detector.process(reading.accelerometer()?)
    }

    /// Zeroes the step count and puts the detector back in its cold start. Whether tracking is on
    /// is left as is.
    ///
    pub fn reset(&mut self) {
        self.detector.reset();
    }

    #[inline]
    pub fn step_count(&self) -> u32 {
        self.detector.step_count()
    }

    #[inline]
    pub fn detector(&self) -> &StepDetector {
        &self.detector
    }
}

impl Default for Pedometer {
    fn default() -> Self {
        Self::new(DetectorConfig::default())
    }
}
