//! Error types for catalog import.
//!
//! Most of the import pipeline never fails: short lines are skipped, blank
//! or garbled fields become absent values, and an unopenable input shows up
//! as a zero count. [`CatalogError`] covers the remaining places where a
//! caller asked for something specific and did not get it.
//!
//! | Variant | Raised by |
//! |---------|-----------|
//! | [`Io`](CatalogError::Io) | CSV export, explicit file access |
//! | [`InvalidIdentifier`](CatalogError::InvalidIdentifier) | `Identifier::from_str` |
//! | [`UnknownObjectType`](CatalogError::UnknownObjectType) | `ObjectType::from_str` |
//! | [`MalformedCsv`](CatalogError::MalformedCsv) | `StarRecord::from_csv` |

use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Unrecognized identifier '{0}'")]
    InvalidIdentifier(String),

    #[error("Unknown object type code '{0}'")]
    UnknownObjectType(String),

    #[error("Malformed star CSV: {0}")]
    MalformedCsv(String),
}

pub type CatalogResult<T> = Result<T, CatalogError>;

impl CatalogError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        Self::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn malformed_csv(reason: impl Into<String>) -> Self {
        Self::MalformedCsv(reason.into())
    }
}
