//! Drawn edges for a replay step.
//!
//! Claims are drawn first, then options, then splurge segments. An option or
//! splurge segment on a pair some earlier layer already took is flagged
//! `parallel` so the renderer offsets it instead of painting over.

use std::collections::HashSet;

use crate::map::SiteIndex;
use crate::replay::{MoveLog, PunterId};
use crate::score::{edges_at, EdgeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawnEdge {
    pub punter: PunterId,
    pub source: SiteIndex,
    pub target: SiteIndex,
    pub kind: EdgeKind,
    pub parallel: bool,
    /// Produced by the most recently applied move.
    pub latest: bool,
}

/// Edges to draw after the first `cursor` moves, in paint order.
pub fn edge_layers(log: &MoveLog, cursor: usize) -> Vec<DrawnEdge> {
    let applied = log.applied(cursor).len();
    let latest_step = applied.checked_sub(1);

    let mut by_step: Vec<_> = edges_at(log, cursor)
        .into_iter()
        .flat_map(|(punter, edges)| edges.into_iter().map(move |e| (punter, e)))
        .collect();
    by_step.sort_by_key(|(_, e)| e.step);

    let mut taken: HashSet<(SiteIndex, SiteIndex)> = HashSet::new();
    let mut out = Vec::with_capacity(by_step.len());

    for kind in [EdgeKind::Claim, EdgeKind::Option, EdgeKind::Splurge] {
        for (punter, e) in by_step.iter().filter(|(_, e)| e.kind == kind) {
            let key = (e.source.min(e.target), e.source.max(e.target));
            let parallel = match kind {
                EdgeKind::Claim => {
                    taken.insert(key);
                    false
                }
                EdgeKind::Option | EdgeKind::Splurge => !taken.insert(key),
            };
            out.push(DrawnEdge {
                punter: *punter,
                source: e.source,
                target: e.target,
                kind,
                parallel,
                latest: Some(e.step) == latest_step,
            });
        }
    }
    out
}
