use math::Vector;

/// One raw accelerometer reading.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample
{
    /// In nanoseconds; monotonic time the reading was taken.
    pub timestamp: i64,

    /// In m/s²; raw acceleration including gravity.
    pub accel: Vector,
}

impl Sample {
    #[inline]
    pub const fn new(timestamp: i64, x: f32, y: f32, z: f32) -> Self {
        Sample { timestamp, accel: Vector::new(x, y, z) }
    }
}

/// Emitted once for every accepted step.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepEvent
{
    /// In nanoseconds; timestamp of the sample that triggered the step.
    pub timestamp: i64,
}

/// A reading as delivered by a host sensor callback that may be subscribed to more than one
/// sensor. Only accelerometer readings take part in step detection.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SensorReading
{
    Accelerometer(Sample),
    Gyroscope(Sample),
}

impl SensorReading {
    /// The accelerometer sample carried by this reading, if any.
    pub fn accelerometer(&self) -> Option<&Sample> {
        match self {
            Self::Accelerometer(sample) => Some(sample),
            Self::Gyroscope(_) => None,
        }
    }
}
