use std::io::{Read, Write};
use serde::{Deserialize, Serialize};
use processing::{Sample, StepDetector};
use crate::error::ReplayError;

/// One row of a recorded accelerometer CSV.
///
#[derive(Debug, Deserialize)]
pub struct SampleRecord
{
    /// In nanoseconds.
    pub time: i64,
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<SampleRecord> for Sample {
    fn from(record: SampleRecord) -> Self {
        Sample::new(record.time, record.x, record.y, record.z)
    }
}

#[derive(Debug, Serialize)]
struct StepRecord
{
    time: i64,
    count: u32,
}

/// Filter state after every sample, for plotting.
#[derive(Debug, Serialize)]
struct FilterRecord
{
    time: i64,
    gravity_x: f32,
    gravity_y: f32,
    gravity_z: f32,
    magnitude: f32,
    step: u8,
}

#[derive(Debug, Default, PartialEq, Eq)]
pub struct Summary
{
    pub samples: usize,
    pub steps: u32,

    /// Readings with a NaN or infinite axis. These are still fed to the detector, so the gravity
    /// estimate will be garbage from that point on.
    pub non_finite: usize,
}

/// Runs every sample in `input` through `detector`. Every accepted step is written to `steps`,
/// the filter state after every sample to `filter`.
///
pub fn replay<R, S, F>(detector: &mut StepDetector, input: R, steps: S, filter: F) -> Result<Summary, ReplayError>
where
    R: Read,
    S: Write,
    F: Write,
{
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(input);

    let mut steps_writer = csv::WriterBuilder::new().has_headers(false).from_writer(steps);
    steps_writer.write_record(["time", "count"])?;

    let mut filter_writer = csv::WriterBuilder::new().has_headers(false).from_writer(filter);
    filter_writer.write_record(["time", "gravity.x", "gravity.y", "gravity.z", "magnitude", "step"])?;

    let mut summary = Summary::default();

    // Loop over every line in the input CSV.
    for result in reader.deserialize::<SampleRecord>() {
        let sample = Sample::from(result?);
        summary.samples += 1;

        if !sample.accel.is_finite() {
            summary.non_finite += 1;
            log::warn!("Non-finite reading at {}ns: {:?}", sample.timestamp, sample.accel);
        }

        let step = detector.process(&sample);

        let gravity = detector.gravity();
        filter_writer.serialize(FilterRecord {
            time: sample.timestamp,
            gravity_x: gravity.x,
            gravity_y: gravity.y,
            gravity_z: gravity.z,
            magnitude: detector.magnitude,
            step: step.is_some() as u8,
        })?;

        if let Some(event) = step {
            summary.steps += 1;
            steps_writer.serialize(StepRecord {
                time: event.timestamp,
                count: summary.steps,
            })?;
        }
    }

    steps_writer.flush()?;
    filter_writer.flush()?;

    Ok(summary)
}

#[cfg(test)]
mod tests
{
    use super::*;
    use processing::DetectorConfig;

    const MS: i64 = 1_000_000;

    /// 50Hz recording at rest with footfalls at 1000ms, 1100ms and 1400ms.
    fn recording() -> String {
        let mut csv = String::from("time,x,y,z\n");
        for t in (0..2000 * MS).step_by(20 * MS as usize) {
            let x = if [1000 * MS, 1100 * MS, 1400 * MS].contains(&t) { 20.0 } else { 0.0 };
            csv.push_str(&format!("{}, {}, 0.0, 9.8\n", t, x));
        }
        csv
    }

    fn replay_str(input: &str) -> (Result<Summary, ReplayError>, String, String) {
        let mut detector = StepDetector::new(DetectorConfig::default());
        let mut steps = Vec::new();
        let mut filter = Vec::new();
        let result = replay(&mut detector, input.as_bytes(), &mut steps, &mut filter);
        (result, String::from_utf8(steps).unwrap(), String::from_utf8(filter).unwrap())
    }

    #[test]
    pub fn test_replay_writes_debounced_steps() {
        let (result, steps, filter) = replay_str(&recording());

        assert_eq!(result.unwrap(), Summary { samples: 100, steps: 2, non_finite: 0 });
        assert_eq!(steps, format!("time,count\n{},1\n{},2\n", 1000 * MS, 1400 * MS));

        let mut lines = filter.lines();
        assert_eq!(lines.next(), Some("time,gravity.x,gravity.y,gravity.z,magnitude,step"));
        assert_eq!(lines.count(), 100);
    }

    #[test]
    pub fn test_replay_counts_only_its_own_steps() {
        let mut detector = StepDetector::new(DetectorConfig::default());
        detector.process(&Sample::new(500 * MS, 20.0, 0.0, 9.8));
        assert_eq!(detector.step_count(), 1);

        // Continue the same detector on a recording that starts well after that step.
        let mut input = String::from("time,x,y,z\n");
        for t in (1000 * MS..2000 * MS).step_by(20 * MS as usize) {
            let x = if t == 1400 * MS { 20.0 } else { 0.0 };
            input.push_str(&format!("{},{},0.0,9.8\n", t, x));
        }

        let mut steps = Vec::new();
        let summary = replay(&mut detector, input.as_bytes(), &mut steps, Vec::new()).unwrap();

        assert_eq!(summary.steps, 1);
        assert_eq!(String::from_utf8(steps).unwrap(), format!("time,count\n{},1\n", 1400 * MS));
        assert_eq!(detector.step_count(), 2);
    }

    #[test]
    pub fn test_replay_without_samples_writes_headers_only() {
        let (result, steps, filter) = replay_str("time,x,y,z\n");

        assert_eq!(result.unwrap(), Summary::default());
        assert_eq!(steps, "time,count\n");
        assert_eq!(filter.lines().count(), 1);
    }

    #[test]
    pub fn test_replay_counts_non_finite_readings() {
        let (result, _, _) = replay_str("time,x,y,z\n0,NaN,0,9.8\n20000000,0,0,9.8\n");
        let summary = result.unwrap();
        assert_eq!(summary.samples, 2);
        assert_eq!(summary.non_finite, 1);
    }

    #[test]
    pub fn test_replay_rejects_malformed_rows() {
        let (result, _, _) = replay_str("time,x,y,z\n0,zero,0,9.8\n");
        assert!(matches!(result, Err(ReplayError::Csv(_))));
    }
}
