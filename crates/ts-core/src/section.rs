//! Quadrant labels and the point → section classifier.
//!
//! ```text
//!   y
//!   0 ┌─────────┬─────────┐
//!     │    A    │    B    │
//! 500k├─────────┼─────────┤
//!     │    C    │    D    │
//!  1M └─────────┴─────────┘
//!     0        500k       1M  x
//! ```
//!
//! Only strict `<` comparisons are used, so points exactly on a midline
//! belong to the right (`x`) or lower (`y`) side.  Crossing-ledger
//! correctness depends on this being a pure function of position.

use std::fmt;
use std::str::FromStr;

use crate::{CoreError, Point};

/// Coordinate of both section midlines (`x = 500 000` and `y = 500 000`).
pub const SECTION_MIDLINE: f64 = 500_000.0;

/// One of the four world quadrants.
///
/// `Ord` follows label order so `BTreeMap<Section, _>` iterates A, B, C, D.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Section {
    A,
    B,
    C,
    D,
}

impl Section {
    pub const ALL: [Section; 4] = [Section::A, Section::B, Section::C, Section::D];

    /// Single-character label, also used as the SQL table name.
    #[inline]
    pub fn label(self) -> char {
        match self {
            Section::A => 'A',
            Section::B => 'B',
            Section::C => 'C',
            Section::D => 'D',
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Section {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "A" | "a" => Ok(Section::A),
            "B" | "b" => Ok(Section::B),
            "C" | "c" => Ok(Section::C),
            "D" | "d" => Ok(Section::D),
            other => Err(CoreError::Config(format!("unknown section {other:?}"))),
        }
    }
}

/// Map a point to its quadrant.  Total and deterministic.
#[inline]
pub fn classify(p: Point) -> Section {
    match (p.x < SECTION_MIDLINE, p.y < SECTION_MIDLINE) {
        (true, true)   => Section::A,
        (false, true)  => Section::B,
        (true, false)  => Section::C,
        (false, false) => Section::D,
    }
}
