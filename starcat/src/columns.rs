//! Fixed-column record parsing.
//!
//! Each catalog's layout is a constant table of `(Field, Extent)` pairs.
//! [`ColumnLayout::parse`] rejects lines shorter than the layout's minimum
//! length (headers, footers, blank lines) and otherwise hands back a
//! [`Record`] whose fields are trimmed column slices. A field that runs
//! past the end of the line reads as empty.
//!
//! ```
//! use starcat::columns::{ColumnLayout, Extent, Field};
//!
//! const LAYOUT: ColumnLayout = ColumnLayout {
//!     name: "demo",
//!     min_len: 8,
//!     fields: &[
//!         (Field::Designation, Extent::new(0, 4)),
//!         (Field::Components, Extent::new(4, 2)),
//!         (Field::Name, Extent::to_end(6)),
//!     ],
//! };
//!
//! let record = LAYOUT.parse("551 AB  Proxima").unwrap();
//! assert_eq!(record.get(Field::Designation), "551");
//! assert_eq!(record.get(Field::Components), "AB");
//! assert_eq!(record.get(Field::Name), "Proxima");
//! assert!(LAYOUT.parse("551").is_none());
//! ```

use std::str::FromStr;

/// Named columns that catalog layouts can carry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Designation,
    Components,
    Ra,
    Dec,
    /// Total proper motion.
    ProperMotion,
    /// Position angle of the total proper motion.
    PositionAngle,
    PmRa,
    PmDec,
    RadialVelocity,
    Spectrum,
    VMag,
    ColorIndex,
    Parallax,
    Hd,
    Dm,
    Hip,
    Name,
    Ident,
}

/// Byte range of a field. `width: None` runs to the end of the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extent {
    pub start: usize,
    pub width: Option<usize>,
}

impl Extent {
    pub const fn new(start: usize, width: usize) -> Self {
        Self {
            start,
            width: Some(width),
        }
    }

    pub const fn to_end(start: usize) -> Self {
        Self { start, width: None }
    }

    fn slice<'a>(&self, line: &'a str) -> &'a str {
        let bytes = line.as_bytes();
        let end = match self.width {
            Some(w) => self.start + w,
            None => bytes.len(),
        };
        col(bytes, self.start, end).map_or("", str::trim)
    }
}

fn col(bytes: &[u8], start: usize, end: usize) -> Option<&str> {
    if end > bytes.len() || start > end {
        return None;
    }
    std::str::from_utf8(&bytes[start..end]).ok()
}

#[derive(Debug, Clone, Copy)]
pub struct ColumnLayout {
    pub name: &'static str,
    /// Shorter lines are not data.
    pub min_len: usize,
    pub fields: &'static [(Field, Extent)],
}

impl ColumnLayout {
    pub fn parse<'a>(&'a self, line: &'a str) -> Option<Record<'a>> {
        let line = line.trim_end_matches(['\r', '\n']);
        (line.len() >= self.min_len).then_some(Record { layout: self, line })
    }

    pub fn extent(&self, field: Field) -> Option<Extent> {
        self.fields
            .iter()
            .find(|(f, _)| *f == field)
            .map(|(_, e)| *e)
    }
}

/// One accepted line, read through its layout.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a> {
    layout: &'a ColumnLayout,
    line: &'a str,
}

impl<'a> Record<'a> {
    /// Trimmed text of `field`; empty when blank, past the end of the
    /// line, or absent from the layout.
    pub fn get(&self, field: Field) -> &'a str {
        self.layout
            .extent(field)
            .map_or("", |extent| extent.slice(self.line))
    }

    /// `field` parsed as a number. Blank or garbled text gives `None`.
    pub fn number<T: FromStr>(&self, field: Field) -> Option<T> {
        let text = self.get(field);
        if text.is_empty() {
            return None;
        }
        text.parse().ok()
    }

    pub fn layout_name(&self) -> &'static str {
        self.layout.name
    }
}
