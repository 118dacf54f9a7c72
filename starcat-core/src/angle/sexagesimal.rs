//! Sexagesimal text as found in fixed-width star catalogs.
//!
//! Catalog columns hold angles as `DD MM SS.S`, `DD MM.M` or `DD.D`, with
//! the sign (if any) on the leading field only. The sign applies to the whole
//! value, so `-00 30` is minus half a degree even though the degree field
//! reads as zero.
//!
//! ```
//! use starcat_core::angle::{format_dms, parse_sexagesimal};
//!
//! let dec = parse_sexagesimal("-00 30 00").unwrap();
//! assert_eq!(dec, -0.5);
//! assert_eq!(format_dms(dec, 1), "-00 30 00.0");
//! ```

use crate::errors::{CoreError, CoreResult};
use once_cell::sync::Lazy;
use regex::Regex;

static SEXAGESIMAL_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r#"(?x)
        ^
        ([+-])?                                 # sign of the whole value
        (\d+(?:\.\d*)?|\.\d+)                   # degrees or hours
        (?:
            [\s:]+(\d+(?:\.\d*)?|\.\d+)         # minutes
            (?:
                [\s:]+(\d+(?:\.\d*)?|\.\d+)     # seconds
            )?
        )?
        $
        "#,
    )
    .unwrap()
});

/// Decodes sexagesimal text into a decimal value in the units of the
/// leading field (degrees or hours).
///
/// Fields are separated by whitespace or colons. Only the leading field may
/// carry a sign. Empty text, more than three fields, or anything that is
/// not an unsigned decimal number in a trailing field is an error.
pub fn parse_sexagesimal(text: &str) -> CoreResult<f64> {
    let text = text.trim();
    if text.is_empty() {
        return Err(CoreError::invalid_angle(text, "empty"));
    }
    let caps = SEXAGESIMAL_REGEX
        .captures(text)
        .ok_or_else(|| CoreError::invalid_angle(text, "expected DD [MM [SS.S]]"))?;

    let mut value = 0.0;
    let mut unit = 1.0;
    for field in (2..=4).filter_map(|i| caps.get(i)) {
        let v: f64 = field
            .as_str()
            .parse()
            .map_err(|_| CoreError::invalid_angle(text, "non-numeric field"))?;
        if !v.is_finite() {
            return Err(CoreError::invalid_angle(text, "non-finite field"));
        }
        value += v / unit;
        unit *= 60.0;
    }

    let negative = caps.get(1).is_some_and(|m| m.as_str() == "-");
    Ok(if negative { -value } else { value })
}

/// Formats hours as `HH MM SS.sss`, wrapping into [0, 24).
pub fn format_hms(hours: f64, frac_digits: u32) -> String {
    let (h, m, s) = split(hours.rem_euclid(24.0), frac_digits, Some(24));
    format!("{h:02} {m:02} {s}")
}

/// Formats degrees as `+DD MM SS.ss` with an explicit sign.
pub fn format_dms(degrees: f64, frac_digits: u32) -> String {
    let sign = if degrees < 0.0 { '-' } else { '+' };
    let (d, m, s) = split(degrees.abs(), frac_digits, None);
    format!("{sign}{d:02} {m:02} {s}")
}

/// Rounds once at the requested precision, then splits into whole units,
/// minutes, and a seconds string, so 59.9999 never prints as `60.00`.
fn split(value: f64, frac_digits: u32, wrap: Option<u64>) -> (u64, u64, String) {
    let scale = 10u64.pow(frac_digits);
    let mut ticks = libm::round(value * 3600.0 * scale as f64) as u64;
    if let Some(limit) = wrap {
        ticks %= limit * 3600 * scale;
    }
    let whole = ticks / scale;
    let frac = ticks % scale;
    let units = whole / 3600;
    let minutes = (whole / 60) % 60;
    let seconds = whole % 60;
    let sec_text = if frac_digits == 0 {
        format!("{seconds:02}")
    } else {
        format!("{seconds:02}.{frac:0width$}", width = frac_digits as usize)
    };
    (units, minutes, sec_text)
}
