//! Stateless angle utilities.
//!
//! | Module | Contents |
//! |--------|----------|
//! | [`convert`] | unit conversions and trigonometry in degrees |
//! | [`normalize`] | range reduction to [0, 2pi) and [-pi, +pi) |
//! | [`sexagesimal`] | `DD MM SS.S` text to decimal and back |
//!
//! All functions are pure; values are plain `f64` radians unless the name
//! says degrees, hours, or arcseconds.

pub mod convert;
pub mod normalize;
pub mod sexagesimal;

pub use convert::*;
pub use normalize::{wrap_0_2pi, wrap_pm_pi};
pub use sexagesimal::{format_dms, format_hms, parse_sexagesimal};
