//! Fixed-width star catalog import, cross-matching and merging.
//!
//! Reads survey tables such as the Gliese-Jahreiss Catalogue of Nearby Stars
//! into [`StarRecord`]s with J2000 positions and motions, a sorted set of
//! catalog identifiers, and display names. Lines covering several stars of
//! a system are split into one record per component, and each record can
//! be improved from a more accurate secondary catalog matched on a shared
//! identifier.
//!
//! # Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`columns`] | [`ColumnLayout`](columns::ColumnLayout) tables and the fixed-width [`Record`](columns::Record) reader |
//! | [`identifier`] | [`Catalog`] tags and [`Identifier`] parsing, display and order |
//! | [`constellation`] | The 88 IAU constellation abbreviations |
//! | [`object`] | [`ObjectType`], [`IdentifierSet`], [`StarRecord`], [`CatalogEntry`] |
//! | [`builder`] | One parsed line to one [`StarRecord`] |
//! | [`components`] | Splitting multi-component lines |
//! | [`index`] | [`ObjectIndex`] identifier lookup |
//! | [`merge`] | Secondary-catalog merge and name attachment |
//! | [`names`] | [`NameMap`] and name-table importers |
//! | [`import`] | GJ catalog importers and the star CSV format |
//!
//! # Pipeline
//!
//! ```no_run
//! use starcat::import::csv::{read_stars_csv, write_stars_csv};
//! use starcat::import::gj::{import_gj_accurate, import_gj_cns3};
//! use starcat::names::{import_name_csv, NameMap};
//! use std::path::Path;
//!
//! let mut hipparcos = Vec::new();
//! read_stars_csv(Path::new("hipparcos.csv"), &mut hipparcos)?;
//!
//! let mut names = NameMap::new();
//! import_name_csv(Path::new("names.csv"), &mut names);
//!
//! let mut accurate = Vec::new();
//! import_gj_accurate(Path::new("table1.dat"), &hipparcos, &mut accurate);
//!
//! let mut stars = Vec::new();
//! let n = import_gj_cns3(Path::new("catalog.dat"), &names, &accurate, &mut stars);
//! println!("{n} nearby stars");
//! write_stars_csv(Path::new("gliese.csv"), &stars)?;
//! # Ok::<(), starcat::CatalogError>(())
//! ```
//!
//! Importers never fail: short lines are skipped, blank fields become
//! absent values, and an unopenable file yields a count of zero. Check the
//! returned counts against the catalog's known size.
//!
//! # Features
//!
//! - **`serde`**: derives `Serialize`/`Deserialize` for the value types;
//!   identifiers serialize as their display text.
//! - **`cli`**: builds the `starforge` binary.

pub mod builder;
pub mod columns;
pub mod components;
pub mod constellation;
pub mod error;
pub mod identifier;
pub mod import;
pub mod index;
pub mod merge;
pub mod names;
pub mod object;

pub use error::{CatalogError, CatalogResult};
pub use identifier::{Catalog, Identifier};
pub use index::ObjectIndex;
pub use names::NameMap;
pub use object::{CatalogEntry, IdentifierSet, ObjectType, StarRecord};
