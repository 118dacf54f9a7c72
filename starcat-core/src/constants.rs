//! Physical and astrometric constants used by catalog import.
//!
//! Angles are radians unless a name says otherwise. Distances inside the
//! catalog pipeline are light-years and velocities are fractions of the
//! speed of light, so the derived light-year/parsec constants live here too.

pub const J2000_JD: f64 = 2451545.0;

/// Julian date of the Besselian epoch B1950.0.
pub const B1950_JD: f64 = 2433282.4235;

pub const DAYS_PER_JULIAN_CENTURY: f64 = 36525.0;

pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const PI: f64 = 3.141592653589793238462643;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const HALF_PI: f64 = 1.5707963267948966192313216;

#[allow(clippy::excessive_precision)]
#[allow(clippy::approx_constant)]
pub const TWOPI: f64 = 6.283185307179586476925287;

#[allow(clippy::excessive_precision)]
pub const DEG_TO_RAD: f64 = 1.745329251994329576923691e-2;

#[allow(clippy::excessive_precision)]
pub const RAD_TO_DEG: f64 = 57.29577951308232087679815;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-6;

#[allow(clippy::excessive_precision)]
pub const MILLIARCSEC_TO_RAD: f64 = 4.848136811095359935899141e-9;

#[allow(clippy::excessive_precision)]
pub const ARCSEC_PER_RAD: f64 = 206264.8062470963551564734;

/// Astronomical Unit in kilometers (IAU 2012, exact).
pub const AU_KM: f64 = 149_597_870.7;

/// Speed of light in kilometers per second.
pub const LIGHT_KM_PER_SEC: f64 = 299_792.458;

/// Speed of light in AU per day (~173.144).
pub const LIGHT_AU_PER_DAY: f64 = LIGHT_KM_PER_SEC * 86_400.0 / AU_KM;

/// AU per parsec. One parsec subtends one arcsecond at one AU.
pub const AU_PER_PARSEC: f64 = ARCSEC_PER_RAD;

/// AU per Julian light-year (~63241.077).
pub const AU_PER_LIGHT_YEAR: f64 = LIGHT_AU_PER_DAY * DAYS_PER_JULIAN_YEAR;

/// Light-years per parsec (~3.2615638).
pub const LIGHT_YEARS_PER_PARSEC: f64 = AU_PER_PARSEC / AU_PER_LIGHT_YEAR;

pub const PARSECS_PER_LIGHT_YEAR: f64 = AU_PER_LIGHT_YEAR / AU_PER_PARSEC;
