//! # Gimbal Core
//!
//! Conversions between intrinsic Z-Y-X Euler angles and unit quaternions.
//!
//! Euler angles follow the aerospace convention: yaw about Z, then pitch
//! about the rotated Y, then roll about the twice-rotated X. Recovered angles
//! use the principal ranges `pitch ∈ [-π/2, π/2]` and `roll, yaw ∈ (-π, π]`.
//!
//! At pitch = ±π/2 (gimbal lock) roll and yaw rotate about the same axis and
//! only their combination is observable. The converter resolves this by
//! pinning roll to zero and folding the whole rotation into yaw.
//!
//! ## Modules
//!
//! - [`math`]: value types ([`EulerAngles`], [`Quaternion`]) and numeric helpers
//! - [`convert`]: the configurable [`RotationConverter`]
//! - [`config`]: converter configuration
//! - [`error`]: errors of the checked conversion path
//!
//! ```
//! use gimbal_core::{euler_to_quaternion, quaternion_to_euler, EulerAngles};
//!
//! let q = euler_to_quaternion(&EulerAngles::new(0.3, 0.4, 0.5));
//! let e = quaternion_to_euler(&q);
//! assert!((e.pitch - 0.4).abs() < 1e-9);
//! ```

pub mod config;
pub mod convert;
pub mod error;
pub mod math;

pub use config::{ConverterConfig, SINGULARITY_TOLERANCE};
pub use convert::{Decomposition, Pole, Regime, RotationConverter};
pub use error::RotationError;
pub use math::{EulerAngles, Quaternion};

/// Convert Euler angles to a unit quaternion with the default configuration
///
/// See [`RotationConverter::euler_to_quaternion`].
pub fn euler_to_quaternion(euler: &EulerAngles) -> Quaternion {
    RotationConverter::default().euler_to_quaternion(euler)
}

/// Convert a quaternion to Euler angles with the default configuration
///
/// See [`RotationConverter::quaternion_to_euler`].
pub fn quaternion_to_euler(q: &Quaternion) -> EulerAngles {
    RotationConverter::default().quaternion_to_euler(q)
}
