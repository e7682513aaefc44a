//! Edge attribution: which rivers each punter holds at a given step.

use std::collections::BTreeMap;

use crate::map::SiteIndex;
use crate::replay::{Move, MoveLog, PunterId};

/// How a punter came to hold an edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeKind {
    Claim,
    Option,
    Splurge,
}

/// One edge attributed to a punter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClaimedEdge {
    pub source: SiteIndex,
    pub target: SiteIndex,
    pub kind: EdgeKind,
    /// Zero-based index of the move that produced the edge.
    pub step: usize,
}

/// Edges held by each punter after the first `cursor` moves.
///
/// Every punter of the log gets an entry, possibly empty. Options are
/// attributed to the option taker only and never remove a prior claim.
pub fn edges_at(log: &MoveLog, cursor: usize) -> BTreeMap<PunterId, Vec<ClaimedEdge>> {
    let mut edges: BTreeMap<PunterId, Vec<ClaimedEdge>> =
        log.players().iter().map(|&p| (p, Vec::new())).collect();

    for (step, m) in log.applied(cursor).iter().enumerate() {
        let kind = match m {
            Move::Claim { .. } => EdgeKind::Claim,
            Move::Option { .. } => EdgeKind::Option,
            Move::Splurge { .. } => EdgeKind::Splurge,
            Move::Pass { .. } => continue,
        };
        let held = edges.entry(m.punter()).or_default();
        for (source, target) in m.edges() {
            held.push(ClaimedEdge { source, target, kind, step });
        }
    }
    edges
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_log() -> MoveLog {
        MoveLog::new(vec![
            Move::Claim { punter: 0, source: 0, target: 1 },
            Move::Pass { punter: 1 },
            Move::Option { punter: 1, source: 0, target: 1 },
            Move::Splurge { punter: 0, route: vec![1, 2, 3] },
        ])
    }

    #[test]
    fn cursor_zero_attributes_nothing() {
        let edges = edges_at(&sample_log(), 0);
        assert_eq!(edges.len(), 2);
        assert!(edges.values().all(|e| e.is_empty()));
    }

    #[test]
    fn only_moves_before_cursor_count() {
        let edges = edges_at(&sample_log(), 2);
        assert_eq!(
            edges[&0],
            vec![ClaimedEdge { source: 0, target: 1, kind: EdgeKind::Claim, step: 0 }]
        );
        assert!(edges[&1].is_empty());
    }

    #[test]
    fn option_is_layered_not_transferred() {
        let edges = edges_at(&sample_log(), 3);
        assert_eq!(edges[&0].len(), 1);
        assert_eq!(
            edges[&1],
            vec![ClaimedEdge { source: 0, target: 1, kind: EdgeKind::Option, step: 2 }]
        );
    }

    #[test]
    fn splurge_adds_one_edge_per_hop() {
        let edges = edges_at(&sample_log(), 4);
        let splurged: Vec<_> = edges[&0]
            .iter()
            .filter(|e| e.kind == EdgeKind::Splurge)
            .map(|e| (e.source, e.target, e.step))
            .collect();
        assert_eq!(splurged, vec![(1, 2, 3), (2, 3, 3)]);
    }

    #[test]
    fn cursor_beyond_log_is_clamped() {
        assert_eq!(edges_at(&sample_log(), 99), edges_at(&sample_log(), 4));
    }
}
