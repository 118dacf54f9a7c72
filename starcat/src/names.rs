//! Identifier → display-name dictionaries.
//!
//! A [`NameMap`] is many-to-many: one name can be filed under several
//! identifiers (`alf Cen`, `HIP 71683`), and one identifier can carry several
//! names. Names come back in the order they were inserted.
//!
//! Two sources fill it:
//!
//! - identifier/name CSV, one identifier per line followed by its names:
//!   `alf CMa,Sirius,Dog Star`
//! - the IAU Catalog of Star Names (WGSN), a fixed-width table keyed by
//!   designation with a HIP fallback

use crate::columns::{ColumnLayout, Extent, Field};
use crate::identifier::{Catalog, Identifier};
use crate::import::open_or_warn;
use log::{info, warn};
use std::collections::HashMap;
use std::path::Path;

#[derive(Debug, Clone, Default)]
pub struct NameMap {
    names: HashMap<Identifier, Vec<String>>,
}

impl NameMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Files `name` under `id`. Returns `false` if it was already there.
    pub fn insert(&mut self, id: Identifier, name: impl Into<String>) -> bool {
        let name = name.into();
        let names = self.names.entry(id).or_default();
        if names.contains(&name) {
            return false;
        }
        names.push(name);
        true
    }

    pub fn names(&self, id: &Identifier) -> &[String] {
        self.names.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Names for every identifier in `ids`, in identifier order, each name
    /// once.
    pub fn names_for<'a, I>(&self, ids: I) -> Vec<String>
    where
        I: IntoIterator<Item = &'a Identifier>,
    {
        let mut out: Vec<String> = Vec::new();
        for id in ids {
            for name in self.names(id) {
                if !out.contains(name) {
                    out.push(name.clone());
                }
            }
        }
        out
    }

    /// Number of identifiers with at least one name.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

/// Reads `ident,name[,name...]` lines into `map`. Lines whose first field
/// is not an identifier are skipped. Returns the number of names added.
pub fn import_name_csv(path: &Path, map: &mut NameMap) -> usize {
    let Some(lines) = open_or_warn(path) else {
        return 0;
    };

    let mut count = 0;
    for line in lines {
        let mut fields = line.split(',').map(str::trim);
        let Some(id) = fields.next().and_then(Identifier::parse) else {
            continue;
        };
        count += fields
            .filter(|name| !name.is_empty())
            .filter(|name| map.insert(id, *name))
            .count();
    }
    info!("{}: {count} names", path.display());
    count
}

const IAU_CSN: ColumnLayout = ColumnLayout {
    name: "IAU-CSN",
    min_len: 96,
    fields: &[
        (Field::Name, Extent::new(0, 18)),
        (Field::Ident, Extent::new(36, 13)),
        (Field::Hip, Extent::new(91, 6)),
    ],
};

/// Reads the IAU Catalog of Star Names into `map`. Each name is filed
/// under its designation, or its HIP number when the designation does not
/// parse. Returns the number of names added.
pub fn import_iau_names(path: &Path, map: &mut NameMap) -> usize {
    let Some(lines) = open_or_warn(path) else {
        return 0;
    };

    let mut count = 0;
    for line in lines {
        let Some(record) = IAU_CSN.parse(&line) else {
            continue;
        };
        let name = record.get(Field::Name);
        let ident = record.get(Field::Ident);
        let id = Identifier::parse(ident).or_else(|| {
            record
                .number(Field::Hip)
                .and_then(|n| Identifier::new(Catalog::Hip, n))
        });
        match id {
            Some(id) if !name.is_empty() => {
                if map.insert(id, name) {
                    count += 1;
                }
            }
            Some(_) => {}
            None => warn!("{}: can't convert {ident:?} for {name}", path.display()),
        }
    }
    info!("{}: {count} IAU names", path.display());
    count
}
