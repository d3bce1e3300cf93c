//! Randomly generated object identifiers.
//!
//! An `ObjectId` is 32 characters drawn from `[0-9a-z]` whose first
//! character is always a letter.  The leading letter keeps ids usable as
//! bare SQL table-name prefixes (`<id>_trajectory`, `<id>_data`).

use std::fmt;
use std::str::FromStr;

use rand::Rng;

use crate::CoreError;

const CHARSET: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";
const LETTERS: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// A 32-character, letter-prefixed, lowercase alphanumeric identifier.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "String"))]
pub struct ObjectId(String);

impl ObjectId {
    pub const LEN: usize = 32;

    /// Draw a fresh id from `rng`.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut id = String::with_capacity(Self::LEN);
        id.push(LETTERS[rng.gen_range(0..LETTERS.len())] as char);
        for _ in 1..Self::LEN {
            id.push(CHARSET[rng.gen_range(0..CHARSET.len())] as char);
        }
        ObjectId(id)
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    fn is_well_formed(s: &str) -> bool {
        s.len() == Self::LEN
            && s.bytes().all(|b| CHARSET.contains(&b))
            && s.bytes().next().is_some_and(|b| LETTERS.contains(&b))
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ObjectId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for ObjectId {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.to_owned())
    }
}

impl TryFrom<String> for ObjectId {
    type Error = CoreError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        if !Self::is_well_formed(&s) {
            return Err(CoreError::Config(format!("malformed object id {s:?}")));
        }
        Ok(ObjectId(s))
    }
}
