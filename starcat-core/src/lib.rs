//! Astrometric primitives for star catalog import.
//!
//! Everything here is pure numeric code with no I/O: angle and unit
//! conversions, rotation matrices, the position+motion pair a star carries,
//! and the transforms that move that pair between epochs and frames.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`angle`] | Degrees/radians/arcseconds, sexagesimal text, range reduction |
//! | [`constants`] | Epochs, unit conversions, light-year/parsec scale |
//! | [`matrix`] | [`RotationMatrix3`] and [`Vector3`] |
//! | [`spherical`] | [`SphericalCoords`] and [`SphericalMotion`] with optional fields |
//! | [`proper_motion`] | Total motion + position angle to per-axis rates and back |
//! | [`precession`] | IAU 1976 precession matrix |
//! | [`epoch`] | [`EpochTransform`] and [`apply_rotation`] |
//!
//! # Absent values
//!
//! Catalog fields are often blank. Distances, radial velocities and angular
//! rates are `Option<f64>`; `None` means the value is unknown and is never
//! replaced by zero.
//!
//! ```
//! use starcat_core::{EpochTransform, SphericalCoords, SphericalMotion};
//!
//! let coords = SphericalCoords::new(0.1, 0.2, None);
//! let (c, m) = EpochTransform::b1950().apply(&coords, &SphericalMotion::unknown());
//! assert!(m.lon.is_none() && m.lat.is_none());
//! assert!(c.rad.is_none());
//! ```
//!
//! # Feature Flags
//!
//! - `serde`: derives `Serialize`/`Deserialize` for the value types.

pub mod angle;
pub mod constants;
pub mod epoch;
pub mod errors;
pub mod math;
pub mod matrix;
pub mod precession;
pub mod proper_motion;
pub mod spherical;

pub use epoch::{apply_rotation, EpochTransform};
pub use errors::{CoreError, CoreResult};
pub use matrix::{RotationMatrix3, Vector3};
pub use spherical::{SphericalCoords, SphericalMotion};
