//! Splitting one catalog line that covers several stars of a system.

use crate::identifier::Identifier;
use crate::object::StarRecord;
use log::debug;

/// Appends one copy of `base` per component letter in `comps`, each tagged
/// with `root` + that letter (`"GJ 551"` + `'A'` → `GJ 551A`). With fewer
/// than two letters a single copy is tagged with `root` + `comps`.
///
/// Returns the number of records appended. A tag that does not parse as an
/// identifier leaves that copy without a root identifier.
pub fn expand_components(
    base: &StarRecord,
    root: &str,
    comps: &str,
    out: &mut Vec<StarRecord>,
) -> usize {
    if comps.chars().count() < 2 {
        out.push(tagged(base, root, comps));
        return 1;
    }

    let mut buf = [0u8; 4];
    for c in comps.chars() {
        out.push(tagged(base, root, c.encode_utf8(&mut buf)));
    }
    comps.chars().count()
}

fn tagged(base: &StarRecord, root: &str, suffix: &str) -> StarRecord {
    let mut star = base.clone();
    let text = format!("{root}{suffix}");
    match Identifier::parse(&text) {
        Some(id) => {
            star.add_identifier(id);
        }
        None => debug!("component tag {text:?} is not an identifier"),
    }
    star
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identifier::Catalog;
    use starcat_core::{SphericalCoords, SphericalMotion};

    fn base() -> StarRecord {
        let mut star = StarRecord::new(
            SphericalCoords::new(1.0, 0.5, Some(4.2)),
            SphericalMotion::unknown(),
        );
        star.add_identifier(Identifier::parse("HD 128620").unwrap());
        star.names.push("Rigil Kentaurus".into());
        star
    }

    fn gj_tags(stars: &[StarRecord]) -> Vec<String> {
        stars
            .iter()
            .map(|s| s.identifiers.get(Catalog::Gj).unwrap().to_string())
            .collect()
    }

    #[test]
    fn test_multiple_components() {
        let mut out = Vec::new();
        assert_eq!(expand_components(&base(), "GJ 559", "ABC", &mut out), 3);
        assert_eq!(gj_tags(&out), ["GJ 559A", "GJ 559B", "GJ 559C"]);
        for star in &out {
            assert_eq!(star.coords, base().coords);
            assert_eq!(star.names, ["Rigil Kentaurus"]);
            assert!(star.identifiers.get(Catalog::Hd).is_some());
        }
    }

    #[test]
    fn test_single_and_empty_components() {
        let mut out = Vec::new();
        assert_eq!(expand_components(&base(), "GJ 551", "", &mut out), 1);
        assert_eq!(expand_components(&base(), "GJ 725", "B", &mut out), 1);
        assert_eq!(gj_tags(&out), ["GJ 551", "GJ 725B"]);
    }

    #[test]
    fn test_single_component_is_stable() {
        let mut first = Vec::new();
        expand_components(&base(), "GJ 65", "A", &mut first);
        let mut second = Vec::new();
        expand_components(&first[0], "GJ 65", "A", &mut second);
        assert_eq!(second.len(), 1);
        assert_eq!(gj_tags(&second), ["GJ 65A"]);
        assert_eq!(second[0].identifiers, first[0].identifiers);
    }

    #[test]
    fn test_copies_are_independent() {
        let mut out = Vec::new();
        expand_components(&base(), "GJ 1", "AB", &mut out);
        out[0].names.push("changed".into());
        out[0].coords.rad = None;
        assert_eq!(out[1].names, ["Rigil Kentaurus"]);
        assert_eq!(out[1].coords.rad, Some(4.2));
    }

    #[test]
    fn test_unparseable_root_still_appends() {
        let mut out = Vec::new();
        assert_eq!(expand_components(&base(), "GJ", "", &mut out), 1);
        assert!(out[0].identifiers.get(Catalog::Gj).is_none());
        assert_eq!(out[0].identifiers.len(), 1);
    }
}
