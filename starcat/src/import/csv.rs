//! Star CSV exchange format.
//!
//! One star per line:
//!
//! ```text
//! SS,RA,Dec,pmRA,pmDec,Vmag,Bmag,dist,RV,spectrum,ident...,name...
//! SS,14 29 42.949,-62 40 46.14,-0.54838,+0.7687,+11.13,+12.95,1.302E0,-22.4,M5.5Ve,V645 Cen,HIP 70890,GJ 551,Proxima Centauri
//! ```
//!
//! | Column | Unit |
//! |--------|------|
//! | RA | `HH MM SS.sss`, J2000 |
//! | Dec | `+DD MM SS.ss`, J2000 |
//! | pmRA | seconds of time per year |
//! | pmDec | arcseconds per year |
//! | Vmag, Bmag | magnitudes |
//! | dist | parsecs |
//! | RV | km/s |
//!
//! An empty column is an absent value. Fields containing a comma or a
//! double quote are double-quoted, with inner quotes written as `""`.
//! After the spectrum, every field that parses as an identifier is one;
//! the rest are names.

use super::open_catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::identifier::Identifier;
use crate::object::{ObjectType, StarRecord};
use log::{debug, info};
use starcat_core::angle::{
    arcsec_to_rad, deg_to_rad, format_dms, format_hms, hours_to_rad, parse_sexagesimal,
    rad_to_arcsec, rad_to_deg, rad_to_hours,
};
use starcat_core::constants::{LIGHT_KM_PER_SEC, LIGHT_YEARS_PER_PARSEC, PARSECS_PER_LIGHT_YEAR};
use starcat_core::{SphericalCoords, SphericalMotion};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const FIXED_FIELDS: usize = 10;

impl StarRecord {
    pub fn to_csv(&self) -> String {
        let mut fields = vec![
            self.object_type.code().to_string(),
            format_hms(rad_to_hours(self.coords.lon), 3),
            format_dms(rad_to_deg(self.coords.lat), 2),
            optional(self.motion.lon, |v| format!("{:+.5}", rad_to_arcsec(v) / 15.0)),
            optional(self.motion.lat, |v| format!("{:+.4}", rad_to_arcsec(v))),
            optional(self.vmag, |v| format!("{v:+.2}")),
            optional(self.bmag, |v| format!("{v:+.2}")),
            optional(self.coords.rad, |ly| format!("{:.3E}", ly * PARSECS_PER_LIGHT_YEAR)),
            optional(self.motion.rad, |v| format!("{:+.1}", v * LIGHT_KM_PER_SEC)),
            quoted(&self.spectrum),
        ];
        fields.extend(self.identifiers.iter().map(|id| quoted(&id.to_string())));
        fields.extend(self.names.iter().map(|name| quoted(name)));
        fields.join(",")
    }

    /// Parses one line written by [`to_csv`](Self::to_csv). Only star type
    /// codes are accepted.
    pub fn from_csv(line: &str) -> CatalogResult<Self> {
        let fields = split_fields(line);
        if fields.len() < FIXED_FIELDS {
            return Err(CatalogError::malformed_csv(format!(
                "expected at least {FIXED_FIELDS} fields, found {}",
                fields.len()
            )));
        }

        let object_type: ObjectType = fields[0].parse()?;
        if !object_type.is_star() {
            return Err(CatalogError::malformed_csv(format!(
                "{object_type} is not a star type"
            )));
        }

        let ra = parse_sexagesimal(&fields[1])
            .map_err(|e| CatalogError::malformed_csv(format!("R.A.: {e}")))?;
        let dec = parse_sexagesimal(&fields[2])
            .map_err(|e| CatalogError::malformed_csv(format!("Dec.: {e}")))?;
        let number = |i: usize| -> CatalogResult<Option<f64>> {
            let text = fields[i].as_str();
            if text.is_empty() {
                return Ok(None);
            }
            text.parse().map(Some).map_err(|_| {
                CatalogError::malformed_csv(format!("field {}: {text:?} is not a number", i + 1))
            })
        };

        let coords = SphericalCoords::new(
            hours_to_rad(ra),
            deg_to_rad(dec),
            number(7)?.map(|pc| pc * LIGHT_YEARS_PER_PARSEC),
        );
        let motion = SphericalMotion::new(
            number(3)?.map(|s| arcsec_to_rad(s * 15.0)),
            number(4)?.map(arcsec_to_rad),
            number(8)?.map(|kms| kms / LIGHT_KM_PER_SEC),
        );

        let mut star = StarRecord::new(coords, motion);
        star.object_type = object_type;
        star.vmag = number(5)?;
        star.bmag = number(6)?;
        star.spectrum = fields[9].clone();
        for field in fields.into_iter().skip(FIXED_FIELDS) {
            if field.is_empty() {
                continue;
            }
            match Identifier::parse(&field) {
                Some(id) => {
                    star.add_identifier(id);
                }
                None => star.names.push(field),
            }
        }
        Ok(star)
    }
}

fn optional(value: Option<f64>, format: impl Fn(f64) -> String) -> String {
    value.map(format).unwrap_or_default()
}

/// Quotes fields holding a comma or a quote; inner quotes are doubled.
fn quoted(text: &str) -> String {
    if text.contains([',', '"']) {
        format!("\"{}\"", text.replace('"', "\"\""))
    } else {
        text.to_string()
    }
}

fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();
    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(c),
        }
    }
    fields.push(current);
    fields.iter_mut().for_each(|f| *f = f.trim().to_string());
    fields
}

/// Writes one line per star. Returns the number written.
pub fn write_stars_csv(path: &Path, stars: &[StarRecord]) -> CatalogResult<usize> {
    let file = File::create(path).map_err(|e| CatalogError::io(path, e))?;
    let mut writer = BufWriter::new(file);
    for star in stars {
        writeln!(writer, "{}", star.to_csv()).map_err(|e| CatalogError::io(path, e))?;
    }
    writer.flush().map_err(|e| CatalogError::io(path, e))?;
    info!("Wrote {} stars to {}", stars.len(), path.display());
    Ok(stars.len())
}

/// Appends the stars in `path` (plain or `.gz`) to `out`. Blank lines and
/// non-star objects are skipped; any other bad line is an error naming its
/// line number. Returns the number appended.
pub fn read_stars_csv(path: &Path, out: &mut Vec<StarRecord>) -> CatalogResult<usize> {
    let lines = open_catalog(path)?;
    let mut count = 0;
    for (n, line) in lines.enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let code = line.split(',').next().unwrap_or_default();
        if ObjectType::from_code(code).is_some_and(|t| !t.is_star()) {
            debug!("{}:{}: skipping {code} object", path.display(), n + 1);
            continue;
        }
        match StarRecord::from_csv(&line) {
            Ok(star) => {
                out.push(star);
                count += 1;
            }
            Err(CatalogError::MalformedCsv(reason)) => {
                return Err(CatalogError::malformed_csv(format!(
                    "{}:{}: {reason}",
                    path.display(),
                    n + 1
                )));
            }
            Err(e) => return Err(e),
        }
    }
    info!("Read {count} stars from {}", path.display());
    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Catalog;

    fn proxima() -> StarRecord {
        let coords = SphericalCoords::new(
            hours_to_rad(14.0 + 29.0 / 60.0 + 42.949 / 3600.0),
            deg_to_rad(-(62.0 + 40.0 / 60.0 + 46.14 / 3600.0)),
            Some(4.2465),
        );
        let motion = SphericalMotion::new(
            Some(arcsec_to_rad(-3.775) / libm::cos(coords.lat)),
            Some(arcsec_to_rad(0.7687)),
            Some(-22.4 / LIGHT_KM_PER_SEC),
        );
        let mut star = StarRecord::new(coords, motion);
        star.vmag = Some(11.13);
        star.bmag = Some(12.95);
        star.spectrum = "M5.5Ve".into();
        for text in ["GJ 551", "HIP 70890", "V645 Cen"] {
            star.add_identifier(Identifier::parse(text).unwrap());
        }
        star.names.push("Proxima Centauri".into());
        star
    }

    #[test]
    fn test_csv_columns() {
        let line = proxima().to_csv();
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields[0], "SS");
        assert_eq!(fields[1], "14 29 42.949");
        assert_eq!(fields[2], "-62 40 46.14");
        assert_eq!(fields[4], "+0.7687");
        assert_eq!(fields[5], "+11.13");
        assert_eq!(fields[7], "1.302E0");
        assert_eq!(fields[8], "-22.4");
        assert_eq!(fields[9], "M5.5Ve");
        assert_eq!(&fields[10..], ["V645 Cen", "HIP 70890", "GJ 551", "Proxima Centauri"]);
    }

    #[test]
    fn test_csv_round_trip_within_print_precision() {
        let star = proxima();
        let back = StarRecord::from_csv(&star.to_csv()).unwrap();

        assert!((back.coords.lon - star.coords.lon).abs() < 1e-7);
        assert!((back.coords.lat - star.coords.lat).abs() < 1e-7);
        assert!((back.coords.rad.unwrap() - 4.2465).abs() < 0.01);
        assert!((back.motion.lon.unwrap() - star.motion.lon.unwrap()).abs() < 1e-9);
        assert!((back.motion.rad.unwrap() - star.motion.rad.unwrap()).abs() < 1e-9);
        assert_eq!(back.vmag, Some(11.13));
        assert_eq!(back.identifiers, star.identifiers);
        assert_eq!(back.names, star.names);
        assert_eq!(back.spectrum, star.spectrum);
    }

    #[test]
    fn test_absent_values_stay_absent() {
        let line = "SS,01 23 45.600,+12 34 56.00,,,,,,,";
        let star = StarRecord::from_csv(line).unwrap();
        assert_eq!(star.motion, SphericalMotion::unknown());
        assert_eq!(star.coords.rad, None);
        assert_eq!(star.vmag, None);
        assert!(star.identifiers.is_empty());
        assert_eq!(star.to_csv(), line);
    }

    #[test]
    fn test_quoted_fields() {
        let mut star = proxima();
        star.spectrum = "K0III,Ba".into();
        let back = StarRecord::from_csv(&star.to_csv()).unwrap();
        assert_eq!(back.spectrum, "K0III,Ba");
        assert_eq!(back.identifiers.get(Catalog::Hip), Identifier::parse("HIP 70890"));
    }

    #[test]
    fn test_embedded_quotes_survive_file_round_trip() {
        let mut star = proxima();
        star.names = vec![
            "The \"Bright\" One".into(),
            "Second, Name".into(),
            "\"Quoted, too\"".into(),
        ];
        star.spectrum = "M5.5\"Ve".into();

        let line = star.to_csv();
        assert!(line.contains("\"The \"\"Bright\"\" One\""), "{line}");

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("quotes.csv");
        write_stars_csv(&path, &[star.clone()]).unwrap();
        let mut out = Vec::new();
        assert_eq!(read_stars_csv(&path, &mut out).unwrap(), 1);
        assert_eq!(out[0].names, star.names);
        assert_eq!(out[0].spectrum, star.spectrum);
        assert_eq!(out[0].identifiers, star.identifiers);
    }

    #[test]
    fn test_malformed_lines() {
        assert!(matches!(
            StarRecord::from_csv("SS,01 00 00,+00 00 00"),
            Err(CatalogError::MalformedCsv(_))
        ));
        assert!(matches!(
            StarRecord::from_csv("XX,01 00 00,+00 00 00,,,,,,,"),
            Err(CatalogError::UnknownObjectType(_))
        ));
        assert!(matches!(
            StarRecord::from_csv("GX,01 00 00,+00 00 00,,,,,,,"),
            Err(CatalogError::MalformedCsv(_))
        ));
        assert!(matches!(
            StarRecord::from_csv("SS,01 00 00,+00 00 00,fast,,,,,,"),
            Err(CatalogError::MalformedCsv(_))
        ));
    }

    #[test]
    fn test_file_round_trip_skips_non_stars() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stars.csv");
        assert_eq!(write_stars_csv(&path, &[proxima(), proxima()]).unwrap(), 2);

        let mut text = std::fs::read_to_string(&path).unwrap();
        text.push_str("\nGX,00 42 44.3,+41 16 09,,,,,,,,\n");
        std::fs::write(&path, text).unwrap();

        let mut out = Vec::new();
        assert_eq!(read_stars_csv(&path, &mut out).unwrap(), 2);
        assert_eq!(out[1].names, ["Proxima Centauri"]);
    }

    #[test]
    fn test_read_reports_line_number() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.csv");
        std::fs::write(&path, format!("{}\nSS,nonsense\n", proxima().to_csv())).unwrap();
        let err = read_stars_csv(&path, &mut Vec::new()).unwrap_err();
        assert!(err.to_string().contains("bad.csv:2"), "{err}");
    }
}
