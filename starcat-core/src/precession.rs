//! IAU 1976 (Lieske) precession.
//!
//! Accurate to well under an arcsecond across the few centuries that
//! separate catalog epochs like B1950 from J2000, which is all catalog
//! import needs. The matrix maps the J2000 mean equator to the mean equator
//! of date; its transpose maps back.
//!
//! ```
//! use starcat_core::constants::B1950_JD;
//! use starcat_core::precession::precession_matrix;
//!
//! let to_j2000 = precession_matrix(B1950_JD).transpose();
//! assert!(to_j2000.is_rotation_matrix(1e-14));
//! ```

use crate::constants::{ARCSEC_TO_RAD, DAYS_PER_JULIAN_CENTURY, J2000_JD};
use crate::matrix::RotationMatrix3;

/// Equatorial precession angles `(zeta, z, theta)` in radians, from J2000 to
/// Julian date `jd`.
pub fn precession_angles(jd: f64) -> (f64, f64, f64) {
    let t = (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;

    let zeta = 2306.2181 * t + 0.30188 * t2 + 0.017998 * t3;
    let z = 2306.2181 * t + 1.09468 * t2 + 0.018203 * t3;
    let theta = 2004.3109 * t - 0.42665 * t2 - 0.041833 * t3;

    (zeta * ARCSEC_TO_RAD, z * ARCSEC_TO_RAD, theta * ARCSEC_TO_RAD)
}

/// Rotation from the J2000 mean equator and equinox to those of `jd`.
pub fn precession_matrix(jd: f64) -> RotationMatrix3 {
    let (zeta, z, theta) = precession_angles(jd);
    let mut m = RotationMatrix3::identity();
    m.rotate_z(-zeta);
    m.rotate_y(theta);
    m.rotate_z(-z);
    m
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{deg_to_rad, rad_to_deg, wrap_pm_pi};
    use crate::constants::B1950_JD;
    use crate::matrix::Vector3;

    #[test]
    fn test_identity_at_j2000() {
        let m = precession_matrix(J2000_JD);
        assert_eq!(m, RotationMatrix3::identity());
    }

    #[test]
    fn test_b1950_equinox_moves_east_and_north() {
        let m = precession_matrix(B1950_JD).transpose();
        let (lon, lat) = (m * Vector3::from_spherical(0.0, 0.0)).to_spherical();

        assert!((rad_to_deg(lon) - 0.640).abs() < 0.002, "ra {}", rad_to_deg(lon));
        assert!((rad_to_deg(lat) - 0.278).abs() < 0.002, "dec {}", rad_to_deg(lat));
    }

    #[test]
    fn test_forward_then_back() {
        let p = precession_matrix(B1950_JD);
        let v = Vector3::from_spherical(deg_to_rad(219.9), deg_to_rad(-60.8));
        let (lon, lat) = (p.transpose() * (p * v)).to_spherical();
        assert!((wrap_pm_pi(lon - deg_to_rad(219.9))).abs() < 1e-14);
        assert!((lat - deg_to_rad(-60.8)).abs() < 1e-14);
    }

    #[test]
    fn test_angles_grow_with_time() {
        let (zeta, z, theta) = precession_angles(J2000_JD + DAYS_PER_JULIAN_CENTURY);
        assert!((zeta / ARCSEC_TO_RAD - 2306.538).abs() < 1e-3);
        assert!((z / ARCSEC_TO_RAD - 2307.331).abs() < 1e-3);
        assert!((theta / ARCSEC_TO_RAD - 2003.8424).abs() < 1e-3);
    }
}
