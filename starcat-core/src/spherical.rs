//! Spherical position and motion pairs.
//!
//! Longitude and latitude are always known for a placed object. The radial
//! terms (distance in light-years, radial velocity as a fraction of light
//! speed) and the angular rates (radians per year) are `Option`s: `None` is
//! "absent", never zero.
//!
//! The angular rates convert to and from a tangential velocity vector on the
//! unit sphere, which is what frame rotations and epoch propagation act on:
//!
//! ```text
//! v = pm_lon * (-cos(lat) sin(lon),  cos(lat) cos(lon), 0)
//!   + pm_lat * (-sin(lat) cos(lon), -sin(lat) sin(lon), cos(lat))
//! ```

use crate::angle::wrap_0_2pi;
use crate::matrix::Vector3;

#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalCoords {
    /// Longitude (right ascension), radians in [0, 2pi).
    pub lon: f64,
    /// Latitude (declination), radians.
    pub lat: f64,
    /// Distance in light-years.
    pub rad: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SphericalMotion {
    /// Rate of longitude in radians per year, not scaled by cos(lat).
    pub lon: Option<f64>,
    /// Rate of latitude in radians per year.
    pub lat: Option<f64>,
    /// Radial velocity as a fraction of light speed.
    pub rad: Option<f64>,
}

impl SphericalCoords {
    pub fn new(lon: f64, lat: f64, rad: Option<f64>) -> Self {
        Self { lon, lat, rad }
    }

    /// Unit vector toward the position; distance is ignored.
    pub fn direction(&self) -> Vector3 {
        Vector3::from_spherical(self.lon, self.lat)
    }

    /// Position at the direction of `v`, keeping this distance.
    pub fn with_direction(&self, v: Vector3) -> Self {
        let (lon, lat) = v.to_spherical();
        Self::new(wrap_0_2pi(lon), lat, self.rad)
    }
}

impl SphericalMotion {
    pub fn new(lon: Option<f64>, lat: Option<f64>, rad: Option<f64>) -> Self {
        Self { lon, lat, rad }
    }

    pub fn unknown() -> Self {
        Self::default()
    }

    /// Both angular rates present.
    pub fn has_proper_motion(&self) -> bool {
        self.lon.is_some() && self.lat.is_some()
    }

    /// Tangential velocity at `coords`, or `None` when either angular rate
    /// is absent.
    pub fn velocity(&self, coords: &SphericalCoords) -> Option<Vector3> {
        let (pm_lon, pm_lat) = (self.lon?, self.lat?);
        let (sin_lon, cos_lon) = libm::sincos(coords.lon);
        let (sin_lat, cos_lat) = libm::sincos(coords.lat);
        Some(Vector3::new(
            -pm_lon * cos_lat * sin_lon - pm_lat * sin_lat * cos_lon,
            pm_lon * cos_lat * cos_lon - pm_lat * sin_lat * sin_lon,
            pm_lat * cos_lat,
        ))
    }

    /// Angular rates of velocity `v` seen at position vector `p`.
    ///
    /// `p` need not be unit length. Returns `None` at the poles, where the
    /// longitude rate is undefined.
    pub fn rates_from_velocity(p: Vector3, v: Vector3) -> Option<(f64, f64)> {
        let rho2 = p.x * p.x + p.y * p.y;
        if rho2 == 0.0 {
            return None;
        }
        let r2 = rho2 + p.z * p.z;
        let pm_lon = (p.x * v.y - p.y * v.x) / rho2;
        let pm_lat = (v.z * rho2 - p.z * (p.x * v.x + p.y * v.y)) / (r2 * libm::sqrt(rho2));
        Some((pm_lon, pm_lat))
    }
}
