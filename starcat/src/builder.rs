//! One parsed catalog line to one [`StarRecord`].
//!
//! Units on the way in are the catalogs' own: R.A. in sexagesimal hours,
//! Dec. in sexagesimal degrees, proper motion in arcsec/yr (either total +
//! position angle in degrees, or per axis with the R.A. rate already scaled
//! by cos(dec)), radial velocity in km/s, parallax in milliarcseconds. Any
//! blank or garbled field is absent on the record, never zero.

use crate::columns::{Field, Record};
use crate::identifier::{Catalog, Identifier};
use crate::object::StarRecord;
use starcat_core::angle::{arcsec_to_rad, deg_to_rad, hours_to_rad, parse_sexagesimal};
use starcat_core::constants::{LIGHT_KM_PER_SEC, LIGHT_YEARS_PER_PARSEC};
use starcat_core::proper_motion::to_components;
use starcat_core::{EpochTransform, SphericalCoords, SphericalMotion};

/// Parallaxes at or below this (mas) give no distance.
pub const MIN_PARALLAX_MAS: f64 = 1.0;

/// Capitalized Bayer letters that would otherwise read as GCVS names.
const NOT_VARIABLE_PREFIXES: [&str; 2] = ["MU", "NU"];

/// Builds a star from `record`, moving position and motion to J2000 with
/// `transform`. `None` when R.A. or Dec. is blank or unreadable.
///
/// Catalog root identifiers (GJ numbers) are not added here; see
/// [`expand_components`](crate::components::expand_components).
pub fn build_star(record: &Record<'_>, transform: &EpochTransform) -> Option<StarRecord> {
    let ra = hours_to_rad(angle(record, Field::Ra)?);
    let dec = deg_to_rad(angle(record, Field::Dec)?);

    let (pm_lon, pm_lat) = proper_motion(record, dec);
    let rv = record
        .number::<f64>(Field::RadialVelocity)
        .map(|kms| kms / LIGHT_KM_PER_SEC);

    let coords = SphericalCoords::new(ra, dec, None);
    let motion = SphericalMotion::new(pm_lon, pm_lat, rv);
    let (mut coords, motion) = transform.apply(&coords, &motion);
    coords.rad = record
        .number::<f64>(Field::Parallax)
        .and_then(parallax_to_distance);

    let mut star = StarRecord::new(coords, motion);
    star.vmag = record.number(Field::VMag);
    star.bmag = star
        .vmag
        .zip(record.number::<f64>(Field::ColorIndex))
        .map(|(v, bv)| v + bv);
    star.spectrum = record.get(Field::Spectrum).to_string();

    let ids = [
        record
            .number(Field::Hd)
            .and_then(|n| Identifier::new(Catalog::Hd, n)),
        Identifier::parse(record.get(Field::Dm)),
        hip_identifier(record.get(Field::Hip)),
        variable_identifier(record.get(Field::Name)),
    ];
    star.identifiers.extend(ids.into_iter().flatten());

    Some(star)
}

/// Light-years from a parallax in milliarcseconds.
pub fn parallax_to_distance(plx_mas: f64) -> Option<f64> {
    (plx_mas > MIN_PARALLAX_MAS).then(|| 1000.0 * LIGHT_YEARS_PER_PARSEC / plx_mas)
}

fn angle(record: &Record<'_>, field: Field) -> Option<f64> {
    let text = record.get(field);
    if text.is_empty() {
        return None;
    }
    parse_sexagesimal(text).ok()
}

fn proper_motion(record: &Record<'_>, dec: f64) -> (Option<f64>, Option<f64>) {
    let pm = record.number::<f64>(Field::ProperMotion);
    let pa = record.number::<f64>(Field::PositionAngle);
    if let (Some(pm), Some(pa)) = (pm, pa) {
        let (lon, lat) = to_components(arcsec_to_rad(pm), deg_to_rad(pa), dec);
        return (Some(lon), Some(lat));
    }

    let pm_ra = record
        .number::<f64>(Field::PmRa)
        .map(|v| arcsec_to_rad(v) / libm::cos(dec));
    let pm_dec = record.number::<f64>(Field::PmDec).map(arcsec_to_rad);
    (pm_ra, pm_dec)
}

/// Bare number or "HIP n". Other catalogs in a HIP column are ignored.
fn hip_identifier(text: &str) -> Option<Identifier> {
    if text.is_empty() {
        return None;
    }
    match text.parse::<u64>() {
        Ok(n) => Identifier::new(Catalog::Hip, n),
        Err(_) => Identifier::parse(text).filter(|id| id.catalog() == Catalog::Hip),
    }
}

/// GCVS designation carried in a star's name column, if any.
pub fn variable_identifier(name: &str) -> Option<Identifier> {
    if NOT_VARIABLE_PREFIXES.iter().any(|p| name.starts_with(p)) {
        return None;
    }
    Identifier::parse(name).filter(|id| id.catalog() == Catalog::Gcvs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::{ColumnLayout, Extent};
    use starcat_core::angle::rad_to_deg;

    const LAYOUT: ColumnLayout = ColumnLayout {
        name: "test",
        min_len: 20,
        fields: &[
            (Field::Ra, Extent::new(0, 10)),
            (Field::Dec, Extent::new(11, 9)),
            (Field::ProperMotion, Extent::new(21, 6)),
            (Field::PositionAngle, Extent::new(28, 5)),
            (Field::RadialVelocity, Extent::new(34, 6)),
            (Field::VMag, Extent::new(41, 6)),
            (Field::ColorIndex, Extent::new(48, 5)),
            (Field::Parallax, Extent::new(54, 6)),
            (Field::Hd, Extent::new(61, 6)),
            (Field::Name, Extent::to_end(68)),
        ],
    };

    /// Lays values out at their column offsets.
    fn line(values: &[(usize, &str)]) -> String {
        let mut out = String::new();
        for (start, text) in values {
            while out.len() < *start {
                out.push(' ');
            }
            out.push_str(text);
        }
        while out.len() < LAYOUT.min_len {
            out.push(' ');
        }
        out
    }

    fn build(text: &str) -> Option<StarRecord> {
        build_star(&LAYOUT.parse(text)?, &EpochTransform::j2000())
    }

    #[test]
    fn test_full_record() {
        let text = line(&[
            (0, "14 29 43.0"),
            (11, "-62 40 46"),
            (21, "3.853"),
            (28, "281.5"),
            (34, "-22.4"),
            (41, "11.13"),
            (48, "1.90"),
            (54, "771.6"),
            (61, "128620"),
            (68, "V645 Cen"),
        ]);
        let star = build(&text).unwrap();

        assert!((rad_to_deg(star.coords.lon) - 217.429166).abs() < 1e-5);
        assert!((rad_to_deg(star.coords.lat) + 62.679444).abs() < 1e-5);
        let dist = star.coords.rad.unwrap();
        assert!((dist - 1000.0 * LIGHT_YEARS_PER_PARSEC / 771.6).abs() < 1e-9);
        assert!((star.motion.rad.unwrap() * LIGHT_KM_PER_SEC + 22.4).abs() < 1e-9);
        assert!(star.motion.has_proper_motion());
        assert_eq!(star.vmag, Some(11.13));
        assert!((star.bmag.unwrap() - 13.03).abs() < 1e-9);

        let ids: Vec<String> = star.identifiers.iter().map(ToString::to_string).collect();
        assert_eq!(ids, ["V645 Cen", "HD 128620"]);
    }

    #[test]
    fn test_blank_position_rejected() {
        assert!(build(&line(&[(11, "-62 40 46")])).is_none());
        assert!(build(&line(&[(0, "14 29 43.0")])).is_none());
        assert!(build(&line(&[(0, "xx yy"), (11, "-62 40 46")])).is_none());
    }

    #[test]
    fn test_missing_fields_stay_absent() {
        let star = build(&line(&[(0, "01 23 45.6"), (11, "+12 34 56")])).unwrap();
        assert_eq!(star.coords.rad, None);
        assert_eq!(star.motion, SphericalMotion::unknown());
        assert_eq!(star.vmag, None);
        assert_eq!(star.bmag, None);
        assert!(star.identifiers.is_empty());
        assert!(star.spectrum.is_empty());
    }

    #[test]
    fn test_pm_needs_both_total_and_angle() {
        let star = build(&line(&[(0, "01 23 45.6"), (11, "+12 34 56"), (21, "1.0")])).unwrap();
        assert!(!star.motion.has_proper_motion());
        assert_eq!(star.motion.lon, None);
    }

    #[test]
    fn test_color_index_needs_vmag() {
        let star = build(&line(&[(0, "01 23 45.6"), (11, "+12 34 56"), (48, "0.65")])).unwrap();
        assert_eq!(star.vmag, None);
        assert_eq!(star.bmag, None);
    }

    #[test]
    fn test_small_parallax_gives_no_distance() {
        assert_eq!(parallax_to_distance(1.0), None);
        assert_eq!(parallax_to_distance(-3.0), None);
        let d = parallax_to_distance(1000.0).unwrap();
        assert!((d - LIGHT_YEARS_PER_PARSEC).abs() < 1e-12);
    }

    #[test]
    fn test_mu_nu_not_variable() {
        assert!(variable_identifier("MU Cas").is_none());
        assert!(variable_identifier("NU Oct").is_none());
        assert_eq!(
            variable_identifier("RR Lyr").map(|id| id.to_string()),
            Some("RR Lyr".to_string())
        );
        assert!(variable_identifier("alf Cen").is_none());
        assert!(variable_identifier("").is_none());
    }

    #[test]
    fn test_hip_column() {
        assert_eq!(hip_identifier("70890"), Identifier::parse("HIP 70890"));
        assert_eq!(hip_identifier("HIP 70890"), Identifier::parse("HIP 70890"));
        assert!(hip_identifier("HD 1").is_none());
        assert!(hip_identifier("").is_none());
    }
}
