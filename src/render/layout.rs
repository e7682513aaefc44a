//! Projection of map coordinates onto a canvas.

use crate::map::Site;

/// A point in canvas pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// Canvas size and the affine map from site coordinates into it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Layout {
    min_x: f64,
    min_y: f64,
    extent_x: f64,
    extent_y: f64,
    pub width: f64,
    pub height: f64,
}

impl Layout {
    /// Sizes a canvas for `sites` inside a viewport, keeping the aspect ratio.
    ///
    /// The map may use 90% of the viewport width and 80% of its height. A
    /// zero extent on either axis is widened to 1.
    pub fn fit(sites: &[Site], viewport_width: f64, viewport_height: f64) -> Layout {
        let (mut min_x, mut max_x) = (f64::INFINITY, f64::NEG_INFINITY);
        let (mut min_y, mut max_y) = (f64::INFINITY, f64::NEG_INFINITY);
        for s in sites {
            min_x = min_x.min(s.x);
            max_x = max_x.max(s.x);
            min_y = min_y.min(s.y);
            max_y = max_y.max(s.y);
        }
        if sites.is_empty() {
            (min_x, max_x, min_y, max_y) = (0.0, 0.0, 0.0, 0.0);
        }

        let extent_x = if max_x > min_x { max_x - min_x } else { 1.0 };
        let extent_y = if max_y > min_y { max_y - min_y } else { 1.0 };

        let scale = (viewport_width * 0.9 / extent_x).min(viewport_height * 0.8 / extent_y);
        Layout {
            min_x,
            min_y,
            extent_x,
            extent_y,
            width: extent_x * scale,
            height: extent_y * scale,
        }
    }

    /// Canvas position of a map coordinate, with a 5% margin on each side.
    pub fn project(&self, x: f64, y: f64) -> Point {
        Point {
            x: (x - self.min_x) * (self.width * 0.9) / self.extent_x + self.width * 0.05,
            y: (y - self.min_y) * (self.height * 0.9) / self.extent_y + self.height * 0.05,
        }
    }

    /// Canvas positions of all sites, indexed like `sites`.
    pub fn project_sites(&self, sites: &[Site]) -> Vec<Point> {
        sites.iter().map(|s| self.project(s.x, s.y)).collect()
    }
}

/// Shifts a segment sideways by `px`, perpendicular to its direction.
///
/// Returns `None` for a zero-length segment, which cannot be drawn.
pub fn offset_segment(a: Point, b: Point, px: f64) -> Option<(Point, Point)> {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len == 0.0 {
        return None;
    }
    let ox = dy / len * px;
    let oy = -dx / len * px;
    Some((
        Point { x: a.x + ox, y: a.y + oy },
        Point { x: b.x + ox, y: b.y + oy },
    ))
}
