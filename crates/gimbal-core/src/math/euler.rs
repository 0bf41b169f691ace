//! Intrinsic Z-Y-X Euler angles

use approx::{AbsDiffEq, RelativeEq};
use serde::{Deserialize, Serialize};

/// Euler angle triple [rad]
///
/// Applied intrinsically as yaw about Z, then pitch about the new Y, then
/// roll about the new X. No range is enforced here; angles recovered from a
/// quaternion lie in `pitch ∈ [-π/2, π/2]`, `roll, yaw ∈ (-π, π]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct EulerAngles {
    /// Rotation about the body X axis [rad]
    pub roll: f64,
    /// Rotation about the body Y axis [rad]
    pub pitch: f64,
    /// Rotation about the body Z axis [rad]
    pub yaw: f64,
}

impl EulerAngles {
    pub fn new(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self { roll, pitch, yaw }
    }

    /// No rotation
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from angles given in degrees
    pub fn from_degrees(roll: f64, pitch: f64, yaw: f64) -> Self {
        Self::new(roll.to_radians(), pitch.to_radians(), yaw.to_radians())
    }

    /// `[roll, pitch, yaw]` in degrees
    pub fn to_degrees(&self) -> [f64; 3] {
        [
            self.roll.to_degrees(),
            self.pitch.to_degrees(),
            self.yaw.to_degrees(),
        ]
    }

    /// `[roll, pitch, yaw]` in radians
    pub fn to_array(&self) -> [f64; 3] {
        [self.roll, self.pitch, self.yaw]
    }
}

impl From<[f64; 3]> for EulerAngles {
    fn from([roll, pitch, yaw]: [f64; 3]) -> Self {
        Self::new(roll, pitch, yaw)
    }
}

impl AbsDiffEq for EulerAngles {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.roll.abs_diff_eq(&other.roll, epsilon)
            && self.pitch.abs_diff_eq(&other.pitch, epsilon)
            && self.yaw.abs_diff_eq(&other.yaw, epsilon)
    }
}

impl RelativeEq for EulerAngles {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.roll.relative_eq(&other.roll, epsilon, max_relative)
            && self.pitch.relative_eq(&other.pitch, epsilon, max_relative)
            && self.yaw.relative_eq(&other.yaw, epsilon, max_relative)
    }
}
