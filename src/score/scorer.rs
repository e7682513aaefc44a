//! Score computation.
//!
//! For each punter, the rivers it holds form a private undirected subgraph.
//! From every mine, the sites reachable in that subgraph each contribute the
//! square of their map distance to the mine. Traversal uses an explicit stack.

use std::collections::BTreeMap;

use crate::map::{DistanceTable, GameMap, SiteIndex};
use crate::replay::{MoveLog, PunterId};

use super::attribution::edges_at;

/// A punter's score. Wide enough to hold a squared unreachable distance.
pub type Score = u128;

/// Scores keyed by punter.
pub type Scores = BTreeMap<PunterId, Score>;

/// Scores every punter of `log` after the first `cursor` moves.
pub fn score_at(map: &GameMap, distances: &DistanceTable, log: &MoveLog, cursor: usize) -> Scores {
    edges_at(log, cursor)
        .into_iter()
        .map(|(punter, edges)| {
            let score = score_for_edges(map, distances, edges.iter().map(|e| (e.source, e.target)));
            (punter, score)
        })
        .collect()
}

/// Scores a single punter holding exactly `edges`.
pub fn score_for_edges<I>(map: &GameMap, distances: &DistanceTable, edges: I) -> Score
where
    I: IntoIterator<Item = (SiteIndex, SiteIndex)>,
{
    let n = map.site_count();
    let mut adj: Vec<Vec<SiteIndex>> = vec![Vec::new(); n];
    let mut any = false;
    for (a, b) in edges {
        if a >= n || b >= n {
            tracing::warn!(source = a, target = b, sites = n, "edge outside map ignored");
            continue;
        }
        adj[a].push(b);
        adj[b].push(a);
        any = true;
    }
    if !any {
        return 0;
    }

    let mut visited = vec![false; n];
    let mut stack = Vec::new();
    let mut total: Score = 0;

    for (slot, &mine) in map.mines().iter().enumerate() {
        visited.iter_mut().for_each(|v| *v = false);
        stack.clear();
        visited[mine] = true;
        stack.push(mine);

        while let Some(v) = stack.pop() {
            let d = Score::from(distances.distance(slot, v));
            total = total.saturating_add(d * d);
            for &next in &adj[v] {
                if !visited[next] {
                    visited[next] = true;
                    stack.push(next);
                }
            }
        }
    }
    total
}
