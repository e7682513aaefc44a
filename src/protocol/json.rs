//! JSON input formats for map and move files.
//!
//! These types mirror the files exactly, with site references still in the
//! external identifier space. Translation into index space happens in
//! `GameMap::from_raw` and `MoveLog::from_raw`.

use serde::{Deserialize, Serialize};

use crate::error::LoadError;
use crate::map::SiteId;

/// A map file: `{ sites, rivers, mines }`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMap {
    pub sites: Vec<RawSite>,
    #[serde(default)]
    pub rivers: Vec<RawRiver>,
    #[serde(default)]
    pub mines: Vec<SiteId>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSite {
    pub id: SiteId,
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawRiver {
    pub source: SiteId,
    pub target: SiteId,
}

/// A moves file: `{ moves: [...] }`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMoves {
    pub moves: Vec<RawMove>,
}

/// One move object. Exactly one field is expected to be set; the check is
/// made when the log is normalized so the error can name the move index.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawMove {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub claim: Option<RawClaim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub option: Option<RawClaim>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub splurge: Option<RawSplurge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<RawPass>,
}

impl RawMove {
    /// Number of move variants present on this object.
    pub fn variant_count(&self) -> usize {
        usize::from(self.claim.is_some())
            + usize::from(self.option.is_some())
            + usize::from(self.splurge.is_some())
            + usize::from(self.pass.is_some())
    }
}

/// Payload shared by `claim` and `option`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawClaim {
    pub punter: u32,
    pub source: SiteId,
    pub target: SiteId,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawSplurge {
    pub punter: u32,
    #[serde(default)]
    pub route: Vec<SiteId>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RawPass {
    pub punter: u32,
}

/// Parses a map file.
pub fn parse_map(json: &str) -> Result<RawMap, LoadError> {
    Ok(serde_json::from_str(json)?)
}

/// Parses a moves file.
pub fn parse_moves(json: &str) -> Result<RawMoves, LoadError> {
    Ok(serde_json::from_str(json)?)
}
