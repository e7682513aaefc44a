//! Mine-to-site distance table.
//!
//! One breadth-first search per mine over the undirected river graph. Sites
//! are marked when first enqueued, so each site enters the queue at most once
//! per mine and its recorded hop count is the shortest path length.

use std::collections::VecDeque;

use super::graph::GameMap;
use super::site::SiteIndex;

/// Distance recorded for sites with no path to the mine.
///
/// Deliberately huge rather than zero: a site that is scored while unreachable
/// contributes its square, which dominates every real score.
pub const UNREACHABLE: u64 = 1_000_000_000_000_000_000;

/// Hop counts from each mine slot to every site, stored row-major by mine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DistanceTable {
    dist: Vec<u64>,
    site_count: usize,
    mine_count: usize,
}

impl DistanceTable {
    /// Runs a BFS from every mine of `map`.
    pub fn build(map: &GameMap) -> DistanceTable {
        let site_count = map.site_count();
        let mine_count = map.mines().len();
        let mut dist = vec![UNREACHABLE; site_count * mine_count];
        let mut queue = VecDeque::with_capacity(site_count);

        for (slot, &mine) in map.mines().iter().enumerate() {
            let row = &mut dist[slot * site_count..(slot + 1) * site_count];
            queue.clear();
            row[mine] = 0;
            queue.push_back(mine);

            while let Some(cur) = queue.pop_front() {
                let d = row[cur];
                for &next in map.neighbors(cur) {
                    if row[next] == UNREACHABLE {
                        row[next] = d + 1;
                        queue.push_back(next);
                    }
                }
            }
        }

        DistanceTable { dist, site_count, mine_count }
    }

    /// Distance from the mine in `slot` to `site`.
    #[inline]
    pub fn distance(&self, slot: usize, site: SiteIndex) -> u64 {
        self.dist[slot * self.site_count + site]
    }

    /// All distances from the mine in `slot`, indexed by site.
    pub fn row(&self, slot: usize) -> &[u64] {
        &self.dist[slot * self.site_count..(slot + 1) * self.site_count]
    }

    pub fn mine_count(&self) -> usize {
        self.mine_count
    }

    pub fn site_count(&self) -> usize {
        self.site_count
    }
}
