//! Identifier → position lookup over a collection of catalog objects.
//!
//! An [`ObjectIndex`] is keyed on one catalog. Objects with no identifier in
//! that catalog are left out. When two objects share an identifier the later
//! one wins; a collision is logged at debug level since it usually means the
//! source catalog lists one designation for two physical stars.

use crate::identifier::{Catalog, Identifier};
use crate::object::CatalogEntry;
use log::debug;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub struct ObjectIndex {
    catalog: Catalog,
    positions: HashMap<Identifier, usize>,
}

impl ObjectIndex {
    pub fn build<T: CatalogEntry>(objects: &[T], catalog: Catalog) -> Self {
        let mut positions = HashMap::with_capacity(objects.len());
        for (pos, object) in objects.iter().enumerate() {
            let Some(id) = object.identifier(catalog) else {
                continue;
            };
            if let Some(prev) = positions.insert(id, pos) {
                debug!("{id} appears at positions {prev} and {pos}; keeping {pos}");
            }
        }
        Self { catalog, positions }
    }

    pub fn catalog(&self) -> Catalog {
        self.catalog
    }

    /// Zero-based position of `id` in the indexed collection.
    pub fn position(&self, id: &Identifier) -> Option<usize> {
        self.positions.get(id).copied()
    }

    /// The object `id` maps to. `objects` must be the collection the index
    /// was built from.
    pub fn lookup<'a, T>(&self, id: &Identifier, objects: &'a [T]) -> Option<&'a T> {
        self.position(id).and_then(|pos| objects.get(pos))
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }
}
