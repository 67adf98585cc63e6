use core::ops::{Add, Mul, Sub};

/// A three axis reading or estimate, e.g. an accelerometer sample in m/s².
///
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vector
{
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl From<[f32; 3]> for Vector {
    fn from(values: [f32; 3]) -> Self {
        Self::new(values[0], values[1], values[2])
    }
}

impl From<Vector> for [f32; 3] {
    fn from(v: Vector) -> Self {
        [v.x, v.y, v.z]
    }
}

impl Vector
{
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Vector { x, y, z }
    }

    /// Returns a zero vector.
    ///
    pub const fn zero() -> Self {
        Vector { x: 0.0, y: 0.0, z: 0.0 }
    }

    /// Euclidean length of the vector.
    ///
    pub fn magnitude(&self) -> f32 {
        libm::sqrtf(self.dot(self))
    }

    /// Take the dot product of two vectors.
    ///
    pub fn dot(&self, other: &Vector) -> f32 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// One step of a single pole low-pass filter (exponential moving average) per axis, where
    /// `self` is the previous output and `alpha` the weight it keeps:
    /// `alpha * self + (1 - alpha) * sample`.
    ///
    /// An `alpha` of 1 ignores the sample entirely, 0 replaces the estimate with the sample.
    ///
    pub fn low_pass(&self, sample: &Vector, alpha: f32) -> Vector {
        let beta = 1.0 - alpha;
        Vector {
            x: alpha * self.x + beta * sample.x,
            y: alpha * self.y + beta * sample.y,
            z: alpha * self.z + beta * sample.z,
        }
    }

    /// Approximate equality check with a given tolerance.
    pub fn approx_eq(&self, other: &Vector, tol: f32) -> bool {
        libm::fabsf(self.x - other.x) <= tol
            && libm::fabsf(self.y - other.y) <= tol
            && libm::fabsf(self.z - other.z) <= tol
    }

    /// True when no component is NaN or infinite.
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }
}

impl Add for Vector
{
    type Output = Self;

    fn add(self, other: Self) -> Self::Output {
        Vector {
            x: self.x + other.x,
            y: self.y + other.y,
            z: self.z + other.z,
        }
    }
}

impl Sub for Vector
{
    type Output = Self;

    fn sub(self, other: Self) -> Self::Output {
        Vector {
            x: self.x - other.x,
            y: self.y - other.y,
            z: self.z - other.z,
        }
    }
}

impl Mul<f32> for Vector
{
    type Output = Self;

    fn mul(self, scale: f32) -> Self::Output {
        Vector {
            x: self.x * scale,
            y: self.y * scale,
            z: self.z * scale,
        }
    }
}
