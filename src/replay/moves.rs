//! Move log in index space.
//!
//! Each raw move object carries exactly one of `claim`, `option`, `splurge`
//! or `pass`; anything else is rejected at load. Site references are resolved
//! through the map's id lookup and log order is kept as-is.

use std::collections::BTreeSet;

use crate::error::LoadError;
use crate::map::{GameMap, SiteId, SiteIndex};
use crate::protocol::json::{RawMove, RawMoves};

/// Player identifier as it appears in moves.
pub type PunterId = u32;

/// A single move of the log, with sites as dense indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Move {
    /// Take one river.
    Claim {
        punter: PunterId,
        source: SiteIndex,
        target: SiteIndex,
    },

    /// Take one river on top of someone else's claim.
    Option {
        punter: PunterId,
        source: SiteIndex,
        target: SiteIndex,
    },

    /// Take every river along a route in one step.
    Splurge { punter: PunterId, route: Vec<SiteIndex> },

    Pass { punter: PunterId },
}

impl Move {
    pub fn punter(&self) -> PunterId {
        match self {
            Move::Claim { punter, .. }
            | Move::Option { punter, .. }
            | Move::Splurge { punter, .. }
            | Move::Pass { punter } => *punter,
        }
    }

    /// Rivers this move attributes to its punter, as `(source, target)` pairs.
    pub fn edges(&self) -> Vec<(SiteIndex, SiteIndex)> {
        match self {
            Move::Claim { source, target, .. } | Move::Option { source, target, .. } => {
                vec![(*source, *target)]
            }
            Move::Splurge { route, .. } => route.windows(2).map(|w| (w[0], w[1])).collect(),
            Move::Pass { .. } => Vec::new(),
        }
    }
}

/// The immutable, ordered move log of one game.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MoveLog {
    moves: Vec<Move>,
    players: BTreeSet<PunterId>,
}

impl MoveLog {
    /// Builds a log from already-indexed moves.
    pub fn new(moves: Vec<Move>) -> MoveLog {
        let players = moves.iter().map(Move::punter).collect();
        MoveLog { moves, players }
    }

    /// Resolves every site reference of `raw` against `map`.
    pub fn from_raw(raw: &RawMoves, map: &GameMap) -> Result<MoveLog, LoadError> {
        let moves = raw
            .moves
            .iter()
            .enumerate()
            .map(|(index, m)| normalize(index, m, map))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(MoveLog::new(moves))
    }

    pub fn len(&self) -> usize {
        self.moves.len()
    }

    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// The moves already applied when the cursor sits at `step`.
    pub fn applied(&self, step: usize) -> &[Move] {
        &self.moves[..step.min(self.moves.len())]
    }

    /// Every punter that appears anywhere in the log, ascending.
    pub fn players(&self) -> &BTreeSet<PunterId> {
        &self.players
    }
}

fn normalize(index: usize, raw: &RawMove, map: &GameMap) -> Result<Move, LoadError> {
    let variants = raw.variant_count();
    if variants != 1 {
        return Err(LoadError::AmbiguousMove { index, variants });
    }

    let resolve = |id: &SiteId| {
        map.site_index(id).ok_or_else(|| LoadError::UnknownSite {
            id: id.clone(),
            context: format!("move {}", index),
        })
    };

    if let Some(c) = &raw.claim {
        return Ok(Move::Claim {
            punter: c.punter,
            source: resolve(&c.source)?,
            target: resolve(&c.target)?,
        });
    }
    if let Some(o) = &raw.option {
        return Ok(Move::Option {
            punter: o.punter,
            source: resolve(&o.source)?,
            target: resolve(&o.target)?,
        });
    }
    if let Some(s) = &raw.splurge {
        let route = s.route.iter().map(resolve).collect::<Result<Vec<_>, _>>()?;
        return Ok(Move::Splurge { punter: s.punter, route });
    }
    match &raw.pass {
        Some(p) => Ok(Move::Pass { punter: p.punter }),
        None => Err(LoadError::AmbiguousMove { index, variants }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::json::{parse_map, parse_moves};

    fn line_map() -> GameMap {
        GameMap::from_raw(
            &parse_map(
                r#"{"sites":[{"id":"a"},{"id":"b"},{"id":"c"}],
                    "rivers":[{"source":"a","target":"b"},{"source":"b","target":"c"}],
                    "mines":["a"]}"#,
            )
            .unwrap(),
        )
        .unwrap()
    }

    fn log(json: &str) -> Result<MoveLog, LoadError> {
        MoveLog::from_raw(&parse_moves(json).unwrap(), &line_map())
    }

    #[test]
    fn normalizes_every_variant_in_order() {
        let log = log(
            r#"{"moves":[
                {"claim":{"punter":0,"source":"a","target":"b"}},
                {"pass":{"punter":2}},
                {"option":{"punter":1,"source":"b","target":"a"}},
                {"splurge":{"punter":0,"route":["a","b","c"]}}
            ]}"#,
        )
        .unwrap();
        assert_eq!(
            log.moves(),
            &[
                Move::Claim { punter: 0, source: 0, target: 1 },
                Move::Pass { punter: 2 },
                Move::Option { punter: 1, source: 1, target: 0 },
                Move::Splurge { punter: 0, route: vec![0, 1, 2] },
            ]
        );
        assert_eq!(log.players().iter().copied().collect::<Vec<_>>(), vec![0, 1, 2]);
    }

    #[test]
    fn splurge_expands_to_consecutive_pairs() {
        let m = Move::Splurge { punter: 0, route: vec![0, 1, 2] };
        assert_eq!(m.edges(), vec![(0, 1), (1, 2)]);
        let short = Move::Splurge { punter: 0, route: vec![1] };
        assert!(short.edges().is_empty());
        assert!(Move::Pass { punter: 0 }.edges().is_empty());
    }

    #[test]
    fn unknown_site_in_move_is_rejected() {
        match log(r#"{"moves":[{"pass":{"punter":0}},{"claim":{"punter":0,"source":"a","target":"z"}}]}"#) {
            Err(LoadError::UnknownSite { id, context }) => {
                assert_eq!(id, SiteId::from("z"));
                assert_eq!(context, "move 1");
            }
            other => panic!("expected UnknownSite, got {:?}", other),
        }
    }

    #[test]
    fn unknown_site_in_splurge_route_is_rejected() {
        assert!(matches!(
            log(r#"{"moves":[{"splurge":{"punter":0,"route":["a",42]}}]}"#),
            Err(LoadError::UnknownSite { .. })
        ));
    }

    #[test]
    fn empty_move_object_is_rejected() {
        assert!(matches!(
            log(r#"{"moves":[{}]}"#),
            Err(LoadError::AmbiguousMove { index: 0, variants: 0 })
        ));
    }

    #[test]
    fn doubled_move_object_is_rejected() {
        assert!(matches!(
            log(r#"{"moves":[{"pass":{"punter":0}},{"option":{"punter":1,"source":"a","target":"b"},"pass":{"punter":1}}]}"#),
            Err(LoadError::AmbiguousMove { index: 1, variants: 2 })
        ));
    }

    #[test]
    fn applied_clamps_to_log_length() {
        let log = MoveLog::new(vec![Move::Pass { punter: 0 }, Move::Pass { punter: 1 }]);
        assert_eq!(log.applied(0).len(), 0);
        assert_eq!(log.applied(1).len(), 1);
        assert_eq!(log.applied(9).len(), 2);
    }
}
