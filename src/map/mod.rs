//! Static map data: sites, rivers, mines, and the mine distance table.

pub mod distance;
pub mod graph;
pub mod site;

pub use distance::{DistanceTable, UNREACHABLE};
pub use graph::GameMap;
pub use site::{River, Site, SiteId, SiteIndex};

use crate::error::LoadError;
use crate::protocol::json::RawMap;

/// Builds the indexed map and its distance table together.
pub fn load_graph(raw: &RawMap) -> Result<(GameMap, DistanceTable), LoadError> {
    let map = GameMap::from_raw(raw)?;
    let distances = DistanceTable::build(&map);
    tracing::debug!(
        sites = map.site_count(),
        rivers = map.rivers().len(),
        mines = map.mines().len(),
        "map indexed"
    );
    Ok((map, distances))
}
