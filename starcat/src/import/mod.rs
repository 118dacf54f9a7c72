//! Catalog file readers.
//!
//! | Module | Input |
//! |--------|-------|
//! | [`gj`] | Gliese-Jahreiss CNS3 and Accurate Coordinates tables |
//! | [`csv`] | Star CSV exchange files |
//!
//! Inputs ending in `.gz` are decompressed on the fly. Lines are decoded
//! as UTF-8; invalid bytes become U+FFFD instead of ending the read.

pub mod csv;
pub mod gj;

use crate::error::{CatalogError, CatalogResult};
use flate2::read::GzDecoder;
use log::warn;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

/// Line iterator over a plain or gzip-compressed catalog file.
pub struct CatalogLines {
    path: PathBuf,
    reader: Box<dyn BufRead>,
    buf: Vec<u8>,
}

impl CatalogLines {
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Iterator for CatalogLines {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        self.buf.clear();
        match self.reader.read_until(b'\n', &mut self.buf) {
            Ok(0) => None,
            Ok(_) => {
                while matches!(self.buf.last(), Some(b'\n' | b'\r')) {
                    self.buf.pop();
                }
                Some(String::from_utf8_lossy(&self.buf).into_owned())
            }
            Err(e) => {
                warn!("{}: read stopped: {e}", self.path.display());
                None
            }
        }
    }
}

fn is_gzip(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("gz"))
}

pub fn open_catalog(path: &Path) -> CatalogResult<CatalogLines> {
    let file = File::open(path).map_err(|e| CatalogError::io(path, e))?;
    let reader: Box<dyn BufRead> = if is_gzip(path) {
        Box::new(BufReader::new(GzDecoder::new(file)))
    } else {
        Box::new(BufReader::new(file))
    };
    Ok(CatalogLines {
        path: path.to_path_buf(),
        reader,
        buf: Vec::new(),
    })
}

/// Opens `path`, or logs a warning and returns `None`. Importers report an
/// unopenable file as zero records.
pub(crate) fn open_or_warn(path: &Path) -> Option<CatalogLines> {
    match open_catalog(path) {
        Ok(lines) => Some(lines),
        Err(e) => {
            warn!("{e}; nothing imported");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    #[test]
    fn test_plain_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.dat");
        std::fs::write(&path, b"one\r\ntwo\n\nthree").unwrap();
        let lines: Vec<String> = open_catalog(&path).unwrap().collect();
        assert_eq!(lines, ["one", "two", "", "three"]);
    }

    #[test]
    fn test_gzip_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("cat.dat.gz");
        let mut enc = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        enc.write_all(b"alpha\nbeta\n").unwrap();
        enc.finish().unwrap();

        let lines = open_catalog(&path).unwrap();
        assert_eq!(lines.path(), path.as_path());
        assert_eq!(lines.collect::<Vec<_>>(), ["alpha", "beta"]);
    }

    #[test]
    fn test_invalid_utf8_is_replaced() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("latin1.dat");
        std::fs::write(&path, b"caf\xe9\n").unwrap();
        let lines: Vec<String> = open_catalog(&path).unwrap().collect();
        assert_eq!(lines, ["caf\u{fffd}"]);
    }

    #[test]
    fn test_missing_file() {
        let err = open_catalog(Path::new("/nonexistent/cns3.dat")).err().unwrap();
        assert!(matches!(err, CatalogError::Io { .. }));
        assert!(open_or_warn(Path::new("/nonexistent/cns3.dat")).is_none());
    }
}
