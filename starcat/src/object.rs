//! Star records and the narrow view of a catalog object that cross-matching
//! needs.
//!
//! The import pipeline only ever asks an object for its identifiers, names,
//! position+motion and magnitudes. [`CatalogEntry`] is exactly that subset,
//! so indexes and merges work over any collection that can answer it.

use crate::error::CatalogError;
use crate::identifier::{Catalog, Identifier};
use starcat_core::{SphericalCoords, SphericalMotion};
use std::fmt;
use std::str::FromStr;

/// Object classes with their two-letter exchange codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ObjectType {
    Nonexistent,
    Planet,
    Moon,
    Asteroid,
    Comet,
    Satellite,
    Spacecraft,
    #[default]
    Star,
    DoubleStar,
    VariableStar,
    DoubleVariableStar,
    OpenCluster,
    GlobularCluster,
    BrightNebula,
    DarkNebula,
    PlanetaryNebula,
    Galaxy,
    Constellation,
    Asterism,
}

const TYPE_CODES: [(ObjectType, &str); 19] = [
    (ObjectType::Nonexistent, "NO"),
    (ObjectType::Planet, "PL"),
    (ObjectType::Moon, "MN"),
    (ObjectType::Asteroid, "AS"),
    (ObjectType::Comet, "CM"),
    (ObjectType::Satellite, "ST"),
    (ObjectType::Spacecraft, "SC"),
    (ObjectType::Star, "SS"),
    (ObjectType::DoubleStar, "DS"),
    (ObjectType::VariableStar, "VS"),
    (ObjectType::DoubleVariableStar, "DV"),
    (ObjectType::OpenCluster, "OC"),
    (ObjectType::GlobularCluster, "GC"),
    (ObjectType::BrightNebula, "BN"),
    (ObjectType::DarkNebula, "DN"),
    (ObjectType::PlanetaryNebula, "PN"),
    (ObjectType::Galaxy, "GX"),
    (ObjectType::Constellation, "CN"),
    (ObjectType::Asterism, "AM"),
];

impl ObjectType {
    pub fn code(self) -> &'static str {
        TYPE_CODES
            .iter()
            .find(|(t, _)| *t == self)
            .map_or("NO", |(_, code)| code)
    }

    pub fn from_code(code: &str) -> Option<Self> {
        TYPE_CODES
            .iter()
            .find(|(_, c)| c.eq_ignore_ascii_case(code.trim()))
            .map(|(t, _)| *t)
    }

    pub fn is_star(self) -> bool {
        matches!(
            self,
            ObjectType::Star
                | ObjectType::DoubleStar
                | ObjectType::VariableStar
                | ObjectType::DoubleVariableStar
        )
    }
}

impl fmt::Display for ObjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.code())
    }
}

impl FromStr for ObjectType {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| CatalogError::UnknownObjectType(s.to_string()))
    }
}

/// Identifiers of one object, always sorted and free of duplicates.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdentifierSet(Vec<Identifier>);

impl IdentifierSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts in order; returns `false` if already present.
    pub fn insert(&mut self, id: Identifier) -> bool {
        match self.0.binary_search(&id) {
            Ok(_) => false,
            Err(pos) => {
                self.0.insert(pos, id);
                true
            }
        }
    }

    /// First identifier from `catalog`, if any.
    pub fn get(&self, catalog: Catalog) -> Option<Identifier> {
        let start = self.0.partition_point(|id| id.catalog() < catalog);
        self.0.get(start).filter(|id| id.catalog() == catalog).copied()
    }

    pub fn contains(&self, id: &Identifier) -> bool {
        self.0.binary_search(id).is_ok()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Identifier> {
        self.0.iter()
    }

    pub fn as_slice(&self) -> &[Identifier] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Extend<Identifier> for IdentifierSet {
    fn extend<I: IntoIterator<Item = Identifier>>(&mut self, iter: I) {
        for id in iter {
            self.insert(id);
        }
    }
}

impl FromIterator<Identifier> for IdentifierSet {
    fn from_iter<I: IntoIterator<Item = Identifier>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl<'a> IntoIterator for &'a IdentifierSet {
    type Item = &'a Identifier;
    type IntoIter = std::slice::Iter<'a, Identifier>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// What cross-matching and name attachment read from an object.
pub trait CatalogEntry {
    fn identifiers(&self) -> &IdentifierSet;
    fn names(&self) -> &[String];
    fn coords(&self) -> &SphericalCoords;
    fn motion(&self) -> &SphericalMotion;
    fn vmag(&self) -> Option<f64>;
    fn bmag(&self) -> Option<f64>;

    fn identifier(&self, catalog: Catalog) -> Option<Identifier> {
        self.identifiers().get(catalog)
    }
}

/// One star as it moves through import and merge.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StarRecord {
    pub object_type: ObjectType,
    pub identifiers: IdentifierSet,
    pub names: Vec<String>,
    /// J2000 position; distance in light-years.
    pub coords: SphericalCoords,
    /// J2000 motion; rates in radians per year, radial velocity as a
    /// fraction of light speed.
    pub motion: SphericalMotion,
    pub vmag: Option<f64>,
    pub bmag: Option<f64>,
    pub spectrum: String,
}

impl StarRecord {
    pub fn new(coords: SphericalCoords, motion: SphericalMotion) -> Self {
        Self {
            object_type: ObjectType::Star,
            identifiers: IdentifierSet::new(),
            names: Vec::new(),
            coords,
            motion,
            vmag: None,
            bmag: None,
            spectrum: String::new(),
        }
    }

    pub fn add_identifier(&mut self, id: Identifier) -> bool {
        self.identifiers.insert(id)
    }

    /// Number of populated optional fields, counting each identifier and
    /// name separately.
    pub fn present_field_count(&self) -> usize {
        let scalars = [
            self.coords.rad,
            self.motion.lon,
            self.motion.lat,
            self.motion.rad,
            self.vmag,
            self.bmag,
        ];
        scalars.iter().filter(|v| v.is_some()).count()
            + usize::from(!self.spectrum.is_empty())
            + self.identifiers.len()
            + self.names.len()
    }
}

impl CatalogEntry for StarRecord {
    fn identifiers(&self) -> &IdentifierSet {
        &self.identifiers
    }

    fn names(&self) -> &[String] {
        &self.names
    }

    fn coords(&self) -> &SphericalCoords {
        &self.coords
    }

    fn motion(&self) -> &SphericalMotion {
        &self.motion
    }

    fn vmag(&self) -> Option<f64> {
        self.vmag
    }

    fn bmag(&self) -> Option<f64> {
        self.bmag
    }
}
