//! Indexed game map.
//!
//! Assigns dense indices to site identifiers in first-seen order and rewrites
//! rivers and mines into index space. The map is immutable once built; a new
//! map file produces a new `GameMap`.

use std::collections::HashMap;

use super::site::{River, Site, SiteId, SiteIndex};
use crate::error::LoadError;
use crate::protocol::json::RawMap;

/// A loaded map in index space with its undirected adjacency.
#[derive(Debug, Clone, Default)]
pub struct GameMap {
    sites: Vec<Site>,
    rivers: Vec<River>,
    mines: Vec<SiteIndex>,
    is_mine: Vec<bool>,
    /// `adjacent[v]` lists the far endpoint of every river touching `v`.
    adjacent: Vec<Vec<SiteIndex>>,
    id_to_index: HashMap<SiteId, SiteIndex>,
    index_to_id: Vec<SiteId>,
}

impl GameMap {
    /// Builds an indexed map from a parsed map file.
    ///
    /// A repeated site id keeps the index and coordinates of its first
    /// occurrence. Rivers and mines naming an unknown site are rejected.
    pub fn from_raw(raw: &RawMap) -> Result<GameMap, LoadError> {
        let mut id_to_index = HashMap::with_capacity(raw.sites.len());
        let mut index_to_id = Vec::with_capacity(raw.sites.len());
        let mut sites = Vec::with_capacity(raw.sites.len());

        for site in &raw.sites {
            if id_to_index.contains_key(&site.id) {
                continue;
            }
            let index = index_to_id.len();
            id_to_index.insert(site.id.clone(), index);
            index_to_id.push(site.id.clone());
            sites.push(Site { index, x: site.x, y: site.y });
        }

        let lookup = |id: &SiteId, context: String| -> Result<SiteIndex, LoadError> {
            id_to_index
                .get(id)
                .copied()
                .ok_or_else(|| LoadError::UnknownSite { id: id.clone(), context })
        };

        let mut rivers = Vec::with_capacity(raw.rivers.len());
        for (i, river) in raw.rivers.iter().enumerate() {
            rivers.push(River {
                source: lookup(&river.source, format!("river {}", i))?,
                target: lookup(&river.target, format!("river {}", i))?,
            });
        }

        let mut mines = Vec::with_capacity(raw.mines.len());
        for (i, mine) in raw.mines.iter().enumerate() {
            mines.push(lookup(mine, format!("mine {}", i))?);
        }

        let mut is_mine = vec![false; sites.len()];
        for &m in &mines {
            is_mine[m] = true;
        }

        let mut adjacent = vec![Vec::new(); sites.len()];
        for river in &rivers {
            adjacent[river.source].push(river.target);
            adjacent[river.target].push(river.source);
        }

        Ok(GameMap {
            sites,
            rivers,
            mines,
            is_mine,
            adjacent,
            id_to_index,
            index_to_id,
        })
    }

    pub fn site_count(&self) -> usize {
        self.sites.len()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn rivers(&self) -> &[River] {
        &self.rivers
    }

    /// Mine site indices in map-file order. A mine's position in this slice
    /// is its slot in the distance table.
    pub fn mines(&self) -> &[SiteIndex] {
        &self.mines
    }

    pub fn is_mine(&self, index: SiteIndex) -> bool {
        self.is_mine.get(index).copied().unwrap_or(false)
    }

    /// Sites reachable from `index` over one river, with repeats for parallel rivers.
    pub fn neighbors(&self, index: SiteIndex) -> &[SiteIndex] {
        &self.adjacent[index]
    }

    /// Looks up the dense index of an external site id.
    pub fn site_index(&self, id: &SiteId) -> Option<SiteIndex> {
        self.id_to_index.get(id).copied()
    }

    /// Reverse lookup from dense index to the external site id.
    pub fn site_id(&self, index: SiteIndex) -> Option<&SiteId> {
        self.index_to_id.get(index)
    }
}
