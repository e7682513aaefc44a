//! Move log and replay position.

pub mod cursor;
pub mod moves;

pub use cursor::ReplayCursor;
pub use moves::{Move, MoveLog, PunterId};
