//! Score engine: edge attribution and connected-component scoring.

pub mod attribution;
pub mod cache;
pub mod scorer;

pub use attribution::{edges_at, ClaimedEdge, EdgeKind};
pub use cache::ScoreCache;
pub use scorer::{score_at, score_for_edges, Score, Scores};
