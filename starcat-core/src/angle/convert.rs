//! Unit conversions and degree-based trigonometry.

use crate::constants::{
    ARCSEC_PER_RAD, ARCSEC_TO_RAD, DEG_TO_RAD, MILLIARCSEC_TO_RAD, RAD_TO_DEG,
};
use crate::math::atan2_pi;

#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * DEG_TO_RAD
}

#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * RAD_TO_DEG
}

#[inline]
pub fn arcsec_to_rad(arcsec: f64) -> f64 {
    arcsec * ARCSEC_TO_RAD
}

#[inline]
pub fn rad_to_arcsec(rad: f64) -> f64 {
    rad * ARCSEC_PER_RAD
}

#[inline]
pub fn mas_to_rad(mas: f64) -> f64 {
    mas * MILLIARCSEC_TO_RAD
}

/// Hours of right ascension to radians (1h = 15 degrees).
#[inline]
pub fn hours_to_rad(hours: f64) -> f64 {
    deg_to_rad(hours * 15.0)
}

#[inline]
pub fn rad_to_hours(rad: f64) -> f64 {
    rad_to_deg(rad) / 15.0
}

#[inline]
pub fn sin_deg(deg: f64) -> f64 {
    libm::sin(deg_to_rad(deg))
}

#[inline]
pub fn cos_deg(deg: f64) -> f64 {
    libm::cos(deg_to_rad(deg))
}

#[inline]
pub fn tan_deg(deg: f64) -> f64 {
    libm::tan(deg_to_rad(deg))
}

#[inline]
pub fn asin_deg(y: f64) -> f64 {
    rad_to_deg(libm::asin(y))
}

#[inline]
pub fn acos_deg(x: f64) -> f64 {
    rad_to_deg(libm::acos(x))
}

#[inline]
pub fn atan_deg(x: f64) -> f64 {
    rad_to_deg(libm::atan(x))
}

/// [`atan2_pi`] in degrees, range [0, 360).
#[inline]
pub fn atan2_pi_deg(y: f64, x: f64) -> f64 {
    rad_to_deg(atan2_pi(y, x))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_degree_trig() {
        assert!((sin_deg(30.0) - 0.5).abs() < 1e-15);
        assert!((cos_deg(60.0) - 0.5).abs() < 1e-15);
        assert!((tan_deg(45.0) - 1.0).abs() < 1e-15);
        assert!((asin_deg(0.5) - 30.0).abs() < 1e-12);
        assert!((acos_deg(0.5) - 60.0).abs() < 1e-12);
        assert!((atan_deg(1.0) - 45.0).abs() < 1e-12);
    }

    #[test]
    fn test_atan2_pi_deg_never_negative() {
        assert!((atan2_pi_deg(-1.0, 1.0) - 315.0).abs() < 1e-12);
        assert!((atan2_pi_deg(1.0, -1.0) - 135.0).abs() < 1e-12);
    }

    #[test]
    fn test_small_unit_conversions() {
        assert!((rad_to_arcsec(arcsec_to_rad(1.5)) - 1.5).abs() < 1e-12);
        assert!((mas_to_rad(1000.0) - arcsec_to_rad(1.0)).abs() < 1e-20);
        assert!((hours_to_rad(6.0) - core::f64::consts::FRAC_PI_2).abs() < 1e-15);
        assert!((rad_to_hours(core::f64::consts::PI) - 12.0).abs() < 1e-12);
    }
}
