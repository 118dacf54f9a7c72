//! Gliese-Jahreiss nearby-star catalogs.
//!
//! - CNS3, the Catalogue of Nearby Stars, preliminary 3rd edition (CDS
//!   V/70A). B1950 positions with total proper motion and position angle.
//!   One line may cover several components of a system.
//! - Accurate Coordinates for Gliese Catalog Stars (CDS J/PASP/122/885).
//!   J2000 positions and per-axis proper motion, keyed to Hipparcos.
//!
//! The usual order is: Hipparcos stars (from CSV) → Accurate Coordinates →
//! CNS3, with the Accurate Coordinates collection as the CNS3 secondary.

use super::open_or_warn;
use crate::builder::build_star;
use crate::columns::{ColumnLayout, Extent, Field};
use crate::components::expand_components;
use crate::identifier::Catalog;
use crate::index::ObjectIndex;
use crate::merge::cross_match;
use crate::names::NameMap;
use crate::object::{CatalogEntry, StarRecord};
use log::info;
use once_cell::sync::Lazy;
use regex::Regex;
use starcat_core::EpochTransform;
use std::path::Path;

/// Star count from the full CNS3 file, after splitting multiples.
pub const CNS3_EXPECTED: usize = 3849;
/// Star count from the full Accurate Coordinates file.
pub const ACCURATE_EXPECTED: usize = 4266;

pub const CNS3: ColumnLayout = ColumnLayout {
    name: "CNS3",
    min_len: 119,
    fields: &[
        (Field::Designation, Extent::new(2, 6)),
        (Field::Components, Extent::new(8, 2)),
        (Field::Ra, Extent::new(12, 8)),
        (Field::Dec, Extent::new(21, 8)),
        (Field::ProperMotion, Extent::new(30, 6)),
        (Field::PositionAngle, Extent::new(37, 5)),
        (Field::RadialVelocity, Extent::new(43, 6)),
        (Field::Spectrum, Extent::new(54, 12)),
        (Field::VMag, Extent::new(67, 6)),
        (Field::ColorIndex, Extent::new(76, 5)),
        (Field::Parallax, Extent::new(108, 6)),
        (Field::Hd, Extent::new(146, 6)),
        (Field::Dm, Extent::new(153, 12)),
        (Field::Name, Extent::to_end(188)),
    ],
};

pub const ACCURATE: ColumnLayout = ColumnLayout {
    name: "GJ accurate coordinates",
    min_len: 124,
    fields: &[
        (Field::Designation, Extent::new(2, 20)),
        (Field::Hip, Extent::new(22, 13)),
        (Field::Ra, Extent::new(36, 11)),
        (Field::Dec, Extent::new(48, 11)),
        (Field::PmRa, Extent::new(61, 6)),
        (Field::PmDec, Extent::new(69, 6)),
    ],
};

static GJ_PREFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:GJ|Gl|GL|NN|Wo|WO)\s*").unwrap());

/// Reads any layout that carries a designation and a components column.
///
/// Each line becomes one star per component, tagged `root_prefix` +
/// designation + component letter. Returns the number of stars appended to
/// `out`; an unopenable file appends nothing and returns 0.
pub fn import_fixed_width(
    path: &Path,
    layout: &ColumnLayout,
    transform: &EpochTransform,
    root_prefix: &str,
    out: &mut Vec<StarRecord>,
) -> usize {
    let Some(lines) = open_or_warn(path) else {
        return 0;
    };

    let mut count = 0;
    for line in lines {
        let Some(record) = layout.parse(&line) else {
            continue;
        };
        let Some(star) = build_star(&record, transform) else {
            continue;
        };
        let root = format!("{root_prefix} {}", record.get(Field::Designation));
        count += expand_components(&star, &root, record.get(Field::Components), out);
    }

    info!("{}: {count} stars from {}", layout.name, path.display());
    count
}

/// Imports CNS3 into `out`, then improves each new star from its
/// `accurate` counterpart (matched on GJ designation) and attaches names.
///
/// Returns the number of stars appended; 3849 for the full catalog.
pub fn import_gj_cns3<S: CatalogEntry>(
    path: &Path,
    names: &NameMap,
    accurate: &[S],
    out: &mut Vec<StarRecord>,
) -> usize {
    let start = out.len();
    let count = import_fixed_width(path, &CNS3, &EpochTransform::b1950(), "GJ", out);
    if count > 0 {
        cross_match(&mut out[start..], accurate, Catalog::Gj, names);
    }
    count
}

/// Imports the Accurate Coordinates table into `out`. Distance, radial
/// velocity, magnitudes and Bayer/Flamsteed/GCVS identifiers come from the
/// `hip_stars` entry with the same HIP number.
///
/// Returns the number of stars appended; 4266 for the full catalog.
pub fn import_gj_accurate<S: CatalogEntry>(
    path: &Path,
    hip_stars: &[S],
    out: &mut Vec<StarRecord>,
) -> usize {
    let Some(lines) = open_or_warn(path) else {
        return 0;
    };

    let index = ObjectIndex::build(hip_stars, Catalog::Hip);
    let transform = EpochTransform::j2000();
    let (mut count, mut with_hip) = (0, 0);

    for line in lines {
        let Some(record) = ACCURATE.parse(&line) else {
            continue;
        };
        let Some(mut star) = build_star(&record, &transform) else {
            continue;
        };

        let hip_star = star
            .identifier(Catalog::Hip)
            .and_then(|id| index.lookup(&id, hip_stars));
        if let Some(hip_star) = hip_star {
            add_hipparcos_data(&mut star, hip_star);
            with_hip += 1;
        }

        let (root, comps) = split_designation(record.get(Field::Designation));
        count += expand_components(&star, &root, comps, out);
    }

    info!(
        "{}: {count} stars from {} ({with_hip} lines matched in Hipparcos)",
        ACCURATE.name,
        path.display()
    );
    count
}

fn add_hipparcos_data<S: CatalogEntry + ?Sized>(star: &mut StarRecord, hip: &S) {
    star.coords.rad = hip.coords().rad;
    star.motion.rad = hip.motion().rad;
    star.vmag = hip.vmag();
    star.bmag = hip.bmag();
    star.identifiers.extend(
        hip.identifiers()
            .iter()
            .filter(|id| {
                matches!(
                    id.catalog(),
                    Catalog::Bayer | Catalog::Flamsteed | Catalog::Gcvs
                )
            })
            .copied(),
    );
}

/// Splits `Gl 559 A` into (`GJ 559`, `A`). Components run from the first
/// A-D letter to a `/`, which separates a duplicate designation on a few
/// lines (`GJ 3406 A/3407 B` keeps `A`).
fn split_designation(text: &str) -> (String, &str) {
    let rest = GJ_PREFIX.find(text).map_or(text, |m| &text[m.end()..]);
    let Some(pos) = rest.find(['A', 'B', 'C', 'D']) else {
        return (format!("GJ {}", rest.trim()), "");
    };
    let tail = &rest[pos..];
    let comps = tail.find('/').map_or(tail, |slash| &tail[..slash]);
    (format!("GJ {}", rest[..pos].trim()), comps.trim())
}
