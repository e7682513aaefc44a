//! Sites and rivers.
//!
//! External site identifiers are opaque: the map format allows either JSON
//! integers or strings. Internally every site is addressed by a dense
//! `SiteIndex` assigned in first-seen order.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Dense site index in `0..site_count`.
pub type SiteIndex = usize;

/// An opaque site identifier as it appears in map and move files.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SiteId {
    Num(i64),
    Name(String),
}

impl fmt::Display for SiteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SiteId::Num(n) => write!(f, "{}", n),
            SiteId::Name(s) => write!(f, "\"{}\"", s),
        }
    }
}

impl From<i64> for SiteId {
    fn from(n: i64) -> Self {
        SiteId::Num(n)
    }
}

impl From<&str> for SiteId {
    fn from(s: &str) -> Self {
        SiteId::Name(s.to_string())
    }
}

/// A site in index space. Coordinates only matter for rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Site {
    pub index: SiteIndex,
    pub x: f64,
    pub y: f64,
}

/// An undirected river between two sites.
///
/// Parallel rivers between the same pair are kept as separate entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct River {
    pub source: SiteIndex,
    pub target: SiteIndex,
}

impl River {
    /// Returns the pair with the smaller index first.
    pub fn normalized(self) -> (SiteIndex, SiteIndex) {
        if self.source <= self.target {
            (self.source, self.target)
        } else {
            (self.target, self.source)
        }
    }
}
