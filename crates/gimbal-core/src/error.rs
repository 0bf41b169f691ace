//! Errors raised by the checked conversion path

use thiserror::Error;

/// Rotation conversion errors
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum RotationError {
    #[error("Quaternion has zero norm")]
    ZeroNorm,
    #[error("Quaternion has a non-finite component")]
    NonFinite,
    #[error("Quaternion norm {norm} deviates from 1 by more than {tolerance}")]
    NotUnitNorm { norm: f64, tolerance: f64 },
    #[error("Tolerance must be finite and in [0, 1), got {0}")]
    InvalidTolerance(f64),
}
