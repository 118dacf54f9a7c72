//! The 88 IAU constellations, used as the namespace for Bayer, Flamsteed
//! and variable-star designations.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::fmt;

const ABBREVIATIONS: [&str; 88] = [
    "And", "Ant", "Aps", "Aqr", "Aql", "Ara", "Ari", "Aur", "Boo", "Cae", "Cam", "Cnc", "CVn",
    "CMa", "CMi", "Cap", "Car", "Cas", "Cen", "Cep", "Cet", "Cha", "Cir", "Col", "Com", "CrA",
    "CrB", "Crv", "Crt", "Cru", "Cyg", "Del", "Dor", "Dra", "Equ", "Eri", "For", "Gem", "Gru",
    "Her", "Hor", "Hya", "Hyi", "Ind", "Lac", "Leo", "LMi", "Lep", "Lib", "Lup", "Lyn", "Lyr",
    "Men", "Mic", "Mon", "Mus", "Nor", "Oct", "Oph", "Ori", "Pav", "Peg", "Per", "Phe", "Pic",
    "Psc", "PsA", "Pup", "Pyx", "Ret", "Sge", "Sgr", "Sco", "Scl", "Sct", "Ser", "Sex", "Tau",
    "Tel", "Tri", "TrA", "Tuc", "UMa", "UMi", "Vel", "Vir", "Vol", "Vul",
];

static LOOKUP: Lazy<HashMap<String, u8>> = Lazy::new(|| {
    ABBREVIATIONS
        .iter()
        .enumerate()
        .map(|(i, abbr)| (abbr.to_ascii_lowercase(), i as u8 + 1))
        .collect()
});

/// A constellation, numbered 1..=88 in table order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Constellation(u8);

impl Constellation {
    pub const COUNT: u8 = 88;

    /// Case-insensitive lookup of a three-letter abbreviation.
    pub fn parse(abbr: &str) -> Option<Self> {
        LOOKUP.get(&abbr.to_ascii_lowercase()).copied().map(Self)
    }

    pub fn from_number(n: u64) -> Option<Self> {
        (1..=Self::COUNT as u64).contains(&n).then(|| Self(n as u8))
    }

    pub fn number(self) -> u64 {
        self.0 as u64
    }

    pub fn abbreviation(self) -> &'static str {
        ABBREVIATIONS[self.0 as usize - 1]
    }
}

impl fmt::Display for Constellation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.abbreviation())
    }
}
