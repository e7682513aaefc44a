//! Riverview replay library.
//!
//! Loads a graph-territory game map and move log, precomputes mine
//! distances, and scores every punter at any step of the replay. Exposes
//! the data a canvas renderer needs without drawing anything itself.

pub mod config;
pub mod controller;
pub mod error;
pub mod map;
pub mod protocol;
pub mod render;
pub mod replay;
pub mod score;
pub mod session;

pub use error::{LoadError, SessionError};
pub use map::load_graph;
pub use session::Session;
