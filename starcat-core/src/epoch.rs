//! Moving a position+motion pair between epochs and frames.
//!
//! Position and motion are always transformed together. Angular rates that
//! are absent stay absent through every step; the radial terms (distance and
//! radial velocity) are frame-invariant and pass through untouched.

use crate::constants::B1950_JD;
use crate::matrix::RotationMatrix3;
use crate::precession::precession_matrix;
use crate::spherical::{SphericalCoords, SphericalMotion};

/// Rotates the direction and the tangential velocity of a star by `m`.
///
/// The rates are recomputed in the rotated frame. A star rotated exactly onto
/// a pole loses its longitude rate, which is undefined there.
pub fn apply_rotation(
    m: &RotationMatrix3,
    coords: &SphericalCoords,
    motion: &SphericalMotion,
) -> (SphericalCoords, SphericalMotion) {
    let p = m * coords.direction();
    let rotated = coords.with_direction(p);

    let rates = motion
        .velocity(coords)
        .and_then(|v| SphericalMotion::rates_from_velocity(p, m * v));

    let moved = match rates {
        Some((lon, lat)) => SphericalMotion::new(Some(lon), Some(lat), motion.rad),
        None => SphericalMotion::new(None, None, motion.rad),
    };
    (rotated, moved)
}

/// Source epoch of a catalog and the frame rotation that takes it to J2000.
///
/// Built once per input file and reused for every record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EpochTransform {
    /// Epoch of the catalog positions, in years.
    pub epoch_year: f64,
    /// Frame rotation applied after propagation; `None` for J2000 input.
    pub rotation: Option<RotationMatrix3>,
}

impl EpochTransform {
    pub fn new(epoch_year: f64, rotation: Option<RotationMatrix3>) -> Self {
        Self {
            epoch_year,
            rotation,
        }
    }

    /// FK4 B1950 positions and motions to the J2000 mean equator.
    pub fn b1950() -> Self {
        Self::new(1950.0, Some(precession_matrix(B1950_JD).transpose()))
    }

    /// Input already at J2000; a no-op.
    pub fn j2000() -> Self {
        Self::new(2000.0, None)
    }

    /// Years from the source epoch to J2000.
    pub fn years_to_j2000(&self) -> f64 {
        2000.0 - self.epoch_year
    }

    pub fn is_identity(&self) -> bool {
        self.rotation.is_none() && self.years_to_j2000() == 0.0
    }

    /// Propagates the position along the space motion to J2000, then
    /// rotates into the J2000 frame. Stars with unknown motion keep their
    /// catalog position and are only rotated.
    pub fn apply(
        &self,
        coords: &SphericalCoords,
        motion: &SphericalMotion,
    ) -> (SphericalCoords, SphericalMotion) {
        let (mut coords, mut motion) = (*coords, *motion);

        let dt = self.years_to_j2000();
        if dt != 0.0 {
            if let Some(v) = motion.velocity(&coords) {
                let p = coords.direction() + v * dt;
                coords = coords.with_direction(p);
                if let Some((lon, lat)) = SphericalMotion::rates_from_velocity(p, v) {
                    motion = SphericalMotion::new(Some(lon), Some(lat), motion.rad);
                }
            }
        }

        match &self.rotation {
            Some(m) => apply_rotation(m, &coords, &motion),
            None => (coords, motion),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::angle::{arcsec_to_rad, deg_to_rad, rad_to_deg};
    use crate::constants::LIGHT_KM_PER_SEC;

    fn star() -> (SphericalCoords, SphericalMotion) {
        (
            SphericalCoords::new(deg_to_rad(165.8), deg_to_rad(35.9), Some(8.3)),
            SphericalMotion::new(
                Some(arcsec_to_rad(-0.58) / libm::cos(deg_to_rad(35.9))),
                Some(arcsec_to_rad(-4.77)),
                Some(-84.7 / LIGHT_KM_PER_SEC),
            ),
        )
    }

    #[test]
    fn test_radial_terms_pass_through() {
        let (coords, motion) = star();
        let (c2, m2) = EpochTransform::b1950().apply(&coords, &motion);
        assert_eq!(c2.rad, coords.rad);
        assert_eq!(m2.rad, motion.rad);
        assert!(m2.has_proper_motion());
    }

    #[test]
    fn test_unknown_motion_stays_unknown() {
        let (coords, _) = star();
        let motion = SphericalMotion::unknown();
        let (c2, m2) = EpochTransform::b1950().apply(&coords, &motion);
        assert_eq!(m2, SphericalMotion::unknown());
        assert!(c2.lon.is_finite() && c2.lat.is_finite());

        let (_, m3) = apply_rotation(&precession_matrix(B1950_JD), &coords, &motion);
        assert!(m3.lon.is_none() && m3.lat.is_none());
    }

    #[test]
    fn test_rotation_preserves_total_motion() {
        let (coords, motion) = star();
        let m = precession_matrix(B1950_JD).transpose();
        let (c2, m2) = apply_rotation(&m, &coords, &motion);

        let speed = |c: &SphericalCoords, mo: &SphericalMotion| {
            mo.velocity(c).map(|v| v.magnitude()).unwrap_or(0.0)
        };
        assert!((speed(&coords, &motion) - speed(&c2, &m2)).abs() < 1e-18);
    }

    #[test]
    fn test_propagation_without_rotation() {
        let coords = SphericalCoords::new(0.0, 0.0, None);
        let motion = SphericalMotion::new(Some(0.0), Some(arcsec_to_rad(10.0)), None);
        let (c2, m2) = EpochTransform::new(1900.0, None).apply(&coords, &motion);

        assert!((rad_to_deg(c2.lat) * 3600.0 - 1000.0).abs() < 0.05);
        assert!(c2.lon.abs() < 1e-15);
        assert!(m2.lat.unwrap() > 0.0);
    }

    #[test]
    fn test_j2000_is_identity() {
        let t = EpochTransform::j2000();
        assert!(t.is_identity());
        let (coords, motion) = star();
        assert_eq!(t.apply(&coords, &motion), (coords, motion));
    }
}
