//! Data the canvas renderer consumes: projected positions, drawn edges,
//! and player colors. Nothing here draws.

pub mod layers;
pub mod layout;
pub mod palette;

pub use layers::{edge_layers, DrawnEdge};
pub use layout::{offset_segment, Layout, Point};
pub use palette::{hsl_to_rgb, player_colors, Rgb};
