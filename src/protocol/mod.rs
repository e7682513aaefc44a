//! External formats.
//!
//! JSON map and move files as the viewer receives them, plus the line
//! command parser used by the headless controller binary.

pub mod json;
pub mod parser;

pub use json::{parse_map, parse_moves, RawMap, RawMove, RawMoves};
pub use parser::{parse_command, Command};
