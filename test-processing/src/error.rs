use std::{error::Error, fmt, io};

use processing::ConfigError;


#[derive(Debug)]
pub enum ReplayError
{
    Config(ConfigError),
    Csv(csv::Error),
    Io(io::Error),
    InvalidInputPath(String),

    /// Minimum step interval in milliseconds that doesn't fit in `i64` nanoseconds.
    IntervalOverflow(i64),
}

impl Error for ReplayError {}

impl fmt::Display for ReplayError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Config(err) => write!(f, "Invalid detector config: {}", err),
            Self::Csv(err) => write!(f, "CSV error: {}", err),
            Self::Io(err) => write!(f, "I/O error: {}", err),
            Self::InvalidInputPath(path) => write!(f, "Input path has no file name: {}", path),
            Self::IntervalOverflow(ms) => write!(f, "Minimum step interval of {}ms is too large", ms),
        }
    }
}

impl From<ConfigError> for ReplayError
{
    fn from(err: ConfigError) -> Self {
        ReplayError::Config(err)
    }
}

impl From<csv::Error> for ReplayError
{
    fn from(err: csv::Error) -> Self {
        ReplayError::Csv(err)
    }
}

impl From<io::Error> for ReplayError
{
    fn from(err: io::Error) -> Self {
        ReplayError::Io(err)
    }
}
