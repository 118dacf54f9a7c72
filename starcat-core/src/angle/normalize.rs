//! Angle range reduction.
//!
//! | Quantity | Range | Function |
//! |----------|-------|----------|
//! | Right ascension, position angle | [0, 2pi) | [`wrap_0_2pi`] |
//! | Longitude differences | [-pi, +pi) | [`wrap_pm_pi`] |
//!
//! `libm::fmod` keeps the sign of the dividend, so both functions fix up the
//! result after reducing.

use crate::constants::{PI, TWOPI};
use crate::math::fmod;

/// Wraps an angle to [-pi, +pi) radians.
///
/// ```
/// use starcat_core::angle::wrap_pm_pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_pm_pi(3.0 * PI / 2.0);
/// assert!((x + PI / 2.0).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_pm_pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w.abs() >= PI {
        return w - TWOPI.copysign(x);
    }
    w
}

/// Wraps an angle to [0, 2pi) radians.
///
/// ```
/// use starcat_core::angle::wrap_0_2pi;
/// use std::f64::consts::PI;
///
/// let x = wrap_0_2pi(-PI / 2.0);
/// assert!((x - 3.0 * PI / 2.0).abs() < 1e-10);
/// ```
#[inline]
pub fn wrap_0_2pi(x: f64) -> f64 {
    let w = fmod(x, TWOPI);
    if w < 0.0 {
        w + TWOPI
    } else {
        w
    }
}
