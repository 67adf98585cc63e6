//! Replays a recorded accelerometer CSV through the step detector, for tuning the detector
//! without a device in the loop.
//!
//! Usage:
//!   test-processing recordings/walk.csv
//!   test-processing recordings/walk.csv --threshold 8.5 --min-step-interval-ms 300 -o ./out

use std::{fs::{self, File}, path::PathBuf, process::ExitCode};
use clap::Parser;
use processing::{DetectorConfig, StepDetector, DEFAULT_ALPHA, DEFAULT_MIN_STEP_INTERVAL_NS, DEFAULT_THRESHOLD};

mod error;
mod replay;

use error::ReplayError;

static RESULTS_DIR: &str = "analysis";

const NS_PER_MS: i64 = 1_000_000;

/// Count steps in a recorded `time,x,y,z` accelerometer CSV (time in nanoseconds, axes in m/s²)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// CSV file to read samples from
    input: PathBuf,

    /// Weight the gravity estimate keeps for every new sample, within [0, 1]
    #[arg(long, default_value_t = DEFAULT_ALPHA)]
    alpha: f32,

    /// Linear acceleration magnitude (m/s²) a sample has to exceed to count as a step
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    threshold: f32,

    /// Minimum time between two steps in milliseconds
    #[arg(long, default_value_t = DEFAULT_MIN_STEP_INTERVAL_NS / NS_PER_MS, allow_negative_numbers = true)]
    min_step_interval_ms: i64,

    /// Every input file gets its own folder in this directory
    #[arg(short, long, default_value = RESULTS_DIR)]
    output: PathBuf,
}

impl Args {
    fn detector_config(&self) -> Result<DetectorConfig, ReplayError> {
        let interval = self.min_step_interval_ms
            .checked_mul(NS_PER_MS)
            .ok_or(ReplayError::IntervalOverflow(self.min_step_interval_ms))?;
        Ok(DetectorConfig::new(self.alpha, self.threshold, interval)?)
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), ReplayError> {
    let config = args.detector_config()?;
    log::debug!("Using {:?}", config);

    // Open the input CSV file.
    let in_file = File::open(&args.input)?;

    // Every input CSV file gets its own folder in the results directory.
    let name = args.input
        .file_stem()
        .and_then(|stem| stem.to_str())
        .ok_or_else(|| ReplayError::InvalidInputPath(args.input.display().to_string()))?;
    let out_dir = args.output.join(name);
    fs::create_dir_all(&out_dir)?;

    let steps_file = File::create(out_dir.join("steps.csv"))?;
    let filter_file = File::create(out_dir.join("filter.csv"))?;

    let mut detector = StepDetector::new(config);
    let summary = replay::replay(&mut detector, in_file, steps_file, filter_file)?;

    if summary.non_finite > 0 {
        log::warn!("{} readings had non-finite values", summary.non_finite);
    }
    log::info!(
        "Replayed {} samples from {}: {} steps",
        summary.samples, args.input.display(), summary.steps
    );
    log::info!("Results written to {}", out_dir.display());
    Ok(())
}
