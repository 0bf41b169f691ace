//! Euler angle ↔ quaternion conversion
//!
//! Euler → quaternion composes the three half-angle rotations
//! `q = q_z(yaw) ⊗ q_y(pitch) ⊗ q_x(roll)`:
//!
//! ```text
//! w = cr·cp·cy + sr·sp·sy
//! x = sr·cp·cy − cr·sp·sy
//! y = cr·sp·cy + sr·cp·sy
//! z = cr·cp·sy − sr·sp·cy
//! ```
//!
//! Quaternion → Euler reads the angles off the rotation matrix R(q):
//!
//! ```text
//! sin(pitch) = −R₂₀ = 2(wy − zx)
//! roll       = atan2(R₂₁, R₂₂) = atan2(2(wx + yz), 1 − 2(x² + y²))
//! yaw        = atan2(R₁₀, R₀₀) = atan2(2(wz + xy), 1 − 2(y² + z²))
//! ```
//!
//! Both atan2 arguments vanish as cos(pitch) → 0. Near the poles the
//! converter switches to the gimbal-lock branch, pins roll to zero and
//! recovers the combined rotation about the vertical axis from `(w, x)`:
//!
//! ```text
//! pitch = +π/2:  w = cos((roll − yaw)/2)/√2,  x = sin((roll − yaw)/2)/√2  ⇒  yaw' = −2·atan2(x, w)
//! pitch = −π/2:  w = cos((roll + yaw)/2)/√2,  x = sin((roll + yaw)/2)/√2  ⇒  yaw' = +2·atan2(x, w)
//! ```

use std::f64::consts::FRAC_PI_2;
use std::fmt;

use crate::config::ConverterConfig;
use crate::error::RotationError;
use crate::math::{clamp_unit, wrap_angle, EulerAngles, Quaternion};

/// Gimbal-lock pole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pole {
    /// pitch = +π/2
    North,
    /// pitch = −π/2
    South,
}

impl fmt::Display for Pole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pole::North => write!(f, "north"),
            Pole::South => write!(f, "south"),
        }
    }
}

/// Branch taken by a quaternion → Euler conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Regime {
    /// All three angles are determined
    Regular,
    /// Pitch is at a pole; roll is pinned to zero
    GimbalLock(Pole),
}

impl Regime {
    /// Whether the conversion hit a gimbal-lock pole
    pub fn is_singular(&self) -> bool {
        matches!(self, Regime::GimbalLock(_))
    }
}

/// Euler angles together with the branch that produced them
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Decomposition {
    pub angles: EulerAngles,
    pub regime: Regime,
}

/// Configurable converter between [`EulerAngles`] and [`Quaternion`]
///
/// Stateless apart from its configuration; safe to share across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct RotationConverter {
    config: ConverterConfig,
}

impl RotationConverter {
    /// Create a converter, validating the configuration
    pub fn new(config: ConverterConfig) -> Result<Self, RotationError> {
        config.validate()?;
        Ok(Self { config })
    }

    /// Configuration this converter was built with
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Convert intrinsic Z-Y-X Euler angles to a unit quaternion
    ///
    /// Total over all real inputs. The result is renormalized when
    /// `normalize_output` is set to absorb rounding drift.
    ///
    /// # Arguments
    /// * `euler` - Roll, pitch and yaw [rad], any range
    ///
    /// # Returns
    /// Unit quaternion `q = q_z(yaw) ⊗ q_y(pitch) ⊗ q_x(roll)`
    pub fn euler_to_quaternion(&self, euler: &EulerAngles) -> Quaternion {
        let (sr, cr) = (euler.roll * 0.5).sin_cos();
        let (sp, cp) = (euler.pitch * 0.5).sin_cos();
        let (sy, cy) = (euler.yaw * 0.5).sin_cos();

        let q = Quaternion::new(
            cr * cp * cy + sr * sp * sy,
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
        );

        if self.config.normalize_output {
            q.normalize().unwrap_or(q)
        } else {
            q
        }
    }

    /// Convert a quaternion to intrinsic Z-Y-X Euler angles
    ///
    /// Expects a unit quaternion. With `normalize_input` (the default) other
    /// non-zero finite inputs are scaled onto the unit sphere first; without
    /// it a non-unit input gives meaningless but finite angles. Zero or
    /// non-finite inputs are passed through unchanged; use
    /// [`try_quaternion_to_euler`](Self::try_quaternion_to_euler) to reject
    /// them.
    ///
    /// # Arguments
    /// * `q` - Orientation quaternion, expected unit norm
    ///
    /// # Returns
    /// Euler angles [rad] with `pitch ∈ [-π/2, π/2]` and `roll, yaw ∈ (-π, π]`;
    /// roll is exactly 0 at gimbal lock
    pub fn quaternion_to_euler(&self, q: &Quaternion) -> EulerAngles {
        self.decompose(q).angles
    }

    /// Like [`quaternion_to_euler`](Self::quaternion_to_euler) but rejects
    /// inputs that do not describe a rotation
    ///
    /// # Errors
    /// * [`RotationError::NonFinite`] - a component is NaN or infinite
    /// * [`RotationError::ZeroNorm`] - all components are zero
    /// * [`RotationError::NotUnitNorm`] - input normalization is off and
    ///   `|‖q‖ - 1|` exceeds `unit_norm_tolerance`
    pub fn try_quaternion_to_euler(&self, q: &Quaternion) -> Result<EulerAngles, RotationError> {
        // rejects non-finite and zero-norm input
        q.normalize()?;

        if !self.config.normalize_input && !q.is_unit(self.config.unit_norm_tolerance) {
            return Err(RotationError::NotUnitNorm {
                norm: q.norm(),
                tolerance: self.config.unit_norm_tolerance,
            });
        }

        Ok(self.quaternion_to_euler(q))
    }

    /// Which branch a quaternion falls into
    pub fn classify(&self, q: &Quaternion) -> Regime {
        let q = self.prepare(q);
        self.regime(sin_pitch(&q))
    }

    /// Convert to Euler angles and report the branch taken
    pub fn decompose(&self, q: &Quaternion) -> Decomposition {
        let q = self.prepare(q);
        let sin_pitch = sin_pitch(&q);
        let regime = self.regime(sin_pitch);

        let angles = match regime {
            Regime::Regular => regular_angles(&q, sin_pitch),
            Regime::GimbalLock(pole) => {
                let angles = pole_angles(&q, pole);
                log::warn!(
                    "Gimbal lock at {} pole (pitch {:.1}°), roll pinned to 0",
                    pole,
                    angles.pitch.to_degrees()
                );
                angles
            }
        };

        Decomposition { angles, regime }
    }

    fn prepare(&self, q: &Quaternion) -> Quaternion {
        if !self.config.normalize_input {
            return *q;
        }

        match q.normalize() {
            Ok(unit) => {
                if !q.is_unit(self.config.unit_norm_tolerance) {
                    log::debug!("Renormalized quaternion with norm {}", q.norm());
                }
                unit
            }
            Err(_) => *q,
        }
    }

    fn regime(&self, sin_pitch: f64) -> Regime {
        // NaN falls through to Regular
        if sin_pitch.abs() >= 1.0 - self.config.singularity_tolerance {
            if sin_pitch > 0.0 {
                Regime::GimbalLock(Pole::North)
            } else {
                Regime::GimbalLock(Pole::South)
            }
        } else {
            Regime::Regular
        }
    }
}

/// `2(wy − zx)`, the sine of pitch for a unit quaternion
fn sin_pitch(q: &Quaternion) -> f64 {
    2.0 * (q.w * q.y - q.z * q.x)
}

fn regular_angles(q: &Quaternion, sin_pitch: f64) -> EulerAngles {
    let Quaternion { w, x, y, z } = *q;

    let pitch = clamp_unit(sin_pitch).asin();
    let roll = (2.0 * (w * x + y * z)).atan2(1.0 - 2.0 * (x * x + y * y));
    let yaw = (2.0 * (w * z + x * y)).atan2(1.0 - 2.0 * (y * y + z * z));

    // atan2(−0, x < 0) is −π
    EulerAngles::new(wrap_angle(roll), pitch, wrap_angle(yaw))
}

// sin_pitch may exceed 1 here, so no asin.
fn pole_angles(q: &Quaternion, pole: Pole) -> EulerAngles {
    let half_angle = q.x.atan2(q.w);

    let (pitch, yaw) = match pole {
        Pole::North => (FRAC_PI_2, -2.0 * half_angle),
        Pole::South => (-FRAC_PI_2, 2.0 * half_angle),
    };

    EulerAngles::new(0.0, pitch, wrap_angle(yaw))
}
