//! Mathematical utilities
//!
//! Rotation value types and the numeric guards used by the conversions.

pub mod angle;
pub mod euler;
pub mod quaternion;

pub use angle::*;
pub use euler::*;
pub use quaternion::*;
