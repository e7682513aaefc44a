//! Error types shared by the loaders and the session.

use thiserror::Error;

use crate::map::SiteId;

/// Errors raised while turning raw map or move data into indexed form.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("malformed JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unknown site {id} referenced by {context}")]
    UnknownSite { id: SiteId, context: String },

    #[error("move {index} must carry exactly one of claim/option/splurge/pass, found {variants}")]
    AmbiguousMove { index: usize, variants: usize },
}

/// Errors raised by the controller-facing session.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no map loaded")]
    NoMap,

    #[error("no moves loaded")]
    NoMoves,

    #[error("step {requested} out of range 0..={len}")]
    CursorOutOfRange { requested: usize, len: usize },

    #[error("stale load completion (generation {ticket}, latest {latest})")]
    Stale { ticket: u64, latest: u64 },

    #[error(transparent)]
    Load(#[from] LoadError),
}
