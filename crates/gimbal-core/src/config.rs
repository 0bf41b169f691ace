//! Converter configuration

use serde::{Deserialize, Serialize};

use crate::error::RotationError;

/// Default gimbal-lock tolerance
///
/// A rotation is treated as singular once `|sin(pitch)| >= 1 - SINGULARITY_TOLERANCE`,
/// i.e. within roughly 1.4e-3 rad of ±π/2.
pub const SINGULARITY_TOLERANCE: f64 = 1e-6;

/// Configuration for [`RotationConverter`](crate::RotationConverter)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ConverterConfig {
    /// ε in the singularity test `|sin(pitch)| >= 1 - ε`
    pub singularity_tolerance: f64,
    /// Normalize quaternions before extracting angles
    pub normalize_input: bool,
    /// Normalize quaternions built from Euler angles
    pub normalize_output: bool,
    /// Allowed `|‖q‖ - 1|` in the checked path when input normalization is off
    pub unit_norm_tolerance: f64,
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            singularity_tolerance: SINGULARITY_TOLERANCE,
            normalize_input: true,
            normalize_output: true,
            unit_norm_tolerance: 1e-6,
        }
    }
}

impl ConverterConfig {
    /// Check that both tolerances are finite and in `[0, 1)`
    pub fn validate(&self) -> Result<(), RotationError> {
        for tolerance in [self.singularity_tolerance, self.unit_norm_tolerance] {
            if !tolerance.is_finite() || !(0.0..1.0).contains(&tolerance) {
                return Err(RotationError::InvalidTolerance(tolerance));
            }
        }
        Ok(())
    }
}
