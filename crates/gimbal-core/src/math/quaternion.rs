//! Quaternion value type for attitude representation
//!
//! Stores `w + xi + yj + zk` as plain components. Conversions to and from
//! nalgebra's [`UnitQuaternion`] are provided for callers already working in
//! nalgebra.

use approx::{AbsDiffEq, RelativeEq};
use nalgebra::UnitQuaternion;
use serde::{Deserialize, Serialize};

use crate::error::RotationError;

/// Quaternion `w + xi + yj + zk`
///
/// Only unit quaternions represent rotations. Nothing is enforced on
/// construction; use [`Quaternion::normalize`] to project onto the unit
/// sphere.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// Identity rotation `(1, 0, 0, 0)`
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    pub fn norm_squared(&self) -> f64 {
        self.w * self.w + self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Euclidean norm
    ///
    /// Components are scaled by the largest magnitude first so that the
    /// squares neither overflow nor underflow.
    pub fn norm(&self) -> f64 {
        let scale = self.max_abs();
        if scale == 0.0 || !scale.is_finite() {
            return self.norm_squared().sqrt();
        }
        scale * self.divided_by(scale).norm_squared().sqrt()
    }

    /// Whether `|‖q‖ - 1| <= tolerance`
    pub fn is_unit(&self, tolerance: f64) -> bool {
        (self.norm() - 1.0).abs() <= tolerance
    }

    pub fn is_finite(&self) -> bool {
        self.w.is_finite() && self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Scale to unit norm
    ///
    /// Fails for quaternions with a non-finite component or zero norm, which
    /// have no rotation to recover. Any other magnitude, however large or
    /// small, is accepted.
    pub fn normalize(&self) -> Result<Self, RotationError> {
        if !self.is_finite() {
            return Err(RotationError::NonFinite);
        }

        let scale = self.max_abs();
        if scale == 0.0 {
            return Err(RotationError::ZeroNorm);
        }

        // largest component of `scaled` is ±1, so its norm lies in [1, 2]
        let scaled = self.divided_by(scale);
        let unit = scaled.divided_by(scaled.norm_squared().sqrt());
        if !unit.is_finite() {
            return Err(RotationError::NonFinite);
        }

        Ok(unit)
    }

    fn max_abs(&self) -> f64 {
        self.w.abs().max(self.x.abs()).max(self.y.abs()).max(self.z.abs())
    }

    fn divided_by(&self, divisor: f64) -> Self {
        Self::new(
            self.w / divisor,
            self.x / divisor,
            self.y / divisor,
            self.z / divisor,
        )
    }

    /// `[w, x, y, z]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Convert to an nalgebra unit quaternion (normalizes)
    pub fn to_unit_quaternion(&self) -> UnitQuaternion<f64> {
        UnitQuaternion::from_quaternion(nalgebra::Quaternion::new(
            self.w, self.x, self.y, self.z,
        ))
    }
}

impl From<[f64; 4]> for Quaternion {
    fn from([w, x, y, z]: [f64; 4]) -> Self {
        Self::new(w, x, y, z)
    }
}

impl From<Quaternion> for [f64; 4] {
    fn from(q: Quaternion) -> Self {
        q.to_array()
    }
}

impl From<UnitQuaternion<f64>> for Quaternion {
    fn from(q: UnitQuaternion<f64>) -> Self {
        Self::new(q.w, q.i, q.j, q.k)
    }
}

impl AbsDiffEq for Quaternion {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon)
            && self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

impl RelativeEq for Quaternion {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}
