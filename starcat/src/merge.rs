//! Cross-matching a primary catalog against a more accurate secondary one.
//!
//! For each primary star whose key identifier is found in the secondary
//! collection:
//!
//! - position on the sky comes from the secondary star;
//! - distance, radial velocity, the proper-motion rates and the magnitudes
//!   come from the secondary star when it has them, otherwise the primary
//!   values stay;
//! - the secondary's HIP, Bayer, Flamsteed and GCVS identifiers are added.
//!
//! A present value is never replaced by an absent one. Display names are
//! attached afterwards from the full identifier set of every star, matched
//! or not.

use crate::identifier::Catalog;
use crate::index::ObjectIndex;
use crate::names::NameMap;
use crate::object::{CatalogEntry, StarRecord};
use log::{debug, info};

/// Identifier catalogs copied from a secondary match.
pub const MERGED_CATALOGS: [Catalog; 4] =
    [Catalog::Hip, Catalog::Bayer, Catalog::Flamsteed, Catalog::Gcvs];

pub fn merge_secondary<S: CatalogEntry + ?Sized>(primary: &mut StarRecord, secondary: &S) {
    let coords = secondary.coords();
    primary.coords.lon = coords.lon;
    primary.coords.lat = coords.lat;
    primary.coords.rad = coords.rad.or(primary.coords.rad);

    let motion = secondary.motion();
    primary.motion.lon = motion.lon.or(primary.motion.lon);
    primary.motion.lat = motion.lat.or(primary.motion.lat);
    primary.motion.rad = motion.rad.or(primary.motion.rad);

    primary.vmag = primary.vmag.or(secondary.vmag());
    primary.bmag = primary.bmag.or(secondary.bmag());

    primary.identifiers.extend(
        secondary
            .identifiers()
            .iter()
            .filter(|id| MERGED_CATALOGS.contains(&id.catalog()))
            .copied(),
    );
}

/// Adds every name `names` files under one of the star's identifiers.
pub fn attach_names(star: &mut StarRecord, names: &NameMap) {
    for name in names.names_for(&star.identifiers) {
        if !star.names.contains(&name) {
            star.names.push(name);
        }
    }
}

/// Merges each primary star with its `key` counterpart in `secondary`, then
/// attaches names to all primaries. Returns the number of matches.
pub fn cross_match<S: CatalogEntry>(
    primary: &mut [StarRecord],
    secondary: &[S],
    key: Catalog,
    names: &NameMap,
) -> usize {
    let index = ObjectIndex::build(secondary, key);
    let mut matched = 0;

    for star in primary.iter_mut() {
        let counterpart = star
            .identifier(key)
            .and_then(|id| index.lookup(&id, secondary).map(|s| (id, s)));
        if let Some((id, other)) = counterpart {
            debug!("{id}: merging secondary record");
            merge_secondary(star, other);
            matched += 1;
        }
        attach_names(star, names);
    }

    info!(
        "{matched} of {} stars matched on {key} ({} indexed)",
        primary.len(),
        index.len()
    );
    matched
}
