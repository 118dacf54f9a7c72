//! Total proper motion and position angle versus per-axis rates.
//!
//! Older catalogs give a star's motion as a total rate `pm` along a position
//! angle `pa` measured from north through east. The per-axis form used
//! everywhere else is the longitude rate (not scaled by cos(dec)) and the
//! latitude rate.
//!
//! ```
//! use starcat_core::proper_motion::{to_components, to_total};
//!
//! let dec = 0.7;
//! let (pm_lon, pm_lat) = to_components(1.0e-5, 2.0, dec);
//! let (pm, pa) = to_total(pm_lon, pm_lat, dec);
//! assert!((pm - 1.0e-5).abs() < 1e-18);
//! assert!((pa - 2.0).abs() < 1e-12);
//! ```
//!
//! Near the poles cos(dec) goes to zero and the longitude rate blows up. No
//! clamping is done; callers see large or non-finite values.

use crate::math::atan2_pi;

/// `(pm, pa, dec)` to `(pm_lon, pm_lat)`, all radians (rates per year).
#[inline]
pub fn to_components(pm: f64, pa: f64, dec: f64) -> (f64, f64) {
    let (sin_pa, cos_pa) = libm::sincos(pa);
    (pm * sin_pa / libm::cos(dec), pm * cos_pa)
}

/// `(pm_lon, pm_lat, dec)` to `(pm, pa)` with `pa` in [0, 2pi).
#[inline]
pub fn to_total(pm_lon: f64, pm_lat: f64, dec: f64) -> (f64, f64) {
    let tangential = pm_lon * libm::cos(dec);
    (libm::hypot(tangential, pm_lat), atan2_pi(tangential, pm_lat))
}
