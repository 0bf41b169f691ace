//! Angle helpers
//!
//! Guards for inverse trigonometry and principal-range wrapping.

use std::f64::consts::{PI, TAU};

/// Clamp a value to `[-1, 1]`
///
/// Arguments of `asin`/`acos` computed in floating point can land just
/// outside the domain even when they are analytically inside it.
pub fn clamp_unit(value: f64) -> f64 {
    value.clamp(-1.0, 1.0)
}

/// Wrap an angle into `(-π, π]`
///
/// In-range angles are returned unchanged.
pub fn wrap_angle(angle: f64) -> f64 {
    if angle > -PI && angle <= PI {
        return angle;
    }

    let wrapped = (angle + PI).rem_euclid(TAU) - PI;
    if wrapped <= -PI {
        wrapped + TAU
    } else {
        wrapped
    }
}
