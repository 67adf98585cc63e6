use crate::*;


/// One millisecond in nanoseconds.
pub const MS: i64 = 1_000_000;

/// Sensor cadence used by the recorded walks below, 50Hz.
pub const SAMPLE_PERIOD: i64 = 20 * MS;

/// The tuning the pedometer app shipped with.
pub fn app_config() -> DetectorConfig {
    DetectorConfig::new(0.8, 10.0, 250 * MS).unwrap()
}

/// Phone lying still, gravity on the z axis.
pub fn at_rest(timestamp: i64) -> Sample {
    Sample::new(timestamp, 0.0, 0.0, 9.8)
}

/// A sharp sideways jolt on top of gravity.
pub fn footfall(timestamp: i64) -> Sample {
    Sample::new(timestamp, 20.0, 0.0, 9.8)
}

/// Samples at `SAMPLE_PERIOD` from zero up to (excluding) `until`, at rest except at the given
/// footfall times.
pub fn walk(until: i64, footfalls: &[i64]) -> Vec<Sample> {
    (0..until)
        .step_by(SAMPLE_PERIOD as usize)
        .map(|t| if footfalls.contains(&t) { footfall(t) } else { at_rest(t) })
        .collect()
}

pub fn run(detector: &mut StepDetector, samples: &[Sample]) -> Vec<StepEvent> {
    samples.iter().filter_map(|s| detector.process(s)).collect()
}
