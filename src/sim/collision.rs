//! Axis-aligned rectangle intersection
//!
//! All collision detection in the game reduces to bounding-rectangle
//! overlap tests on integer coordinates. The ball is treated as the
//! bounding square of its disc.

use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Axis-aligned bounding rectangle with integer coordinates.
///
/// `pos` is the top-left corner; the rectangle covers the half-open
/// ranges `[pos.x, pos.x + size.x)` x `[pos.y, pos.y + size.y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    /// Strict overlap test: rectangles that merely touch along an edge do
    /// not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.pos.x < other.pos.x + other.size.x
            && other.pos.x < self.pos.x + self.size.x
            && self.pos.y < other.pos.y + other.size.y
            && other.pos.y < self.pos.y + self.size.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: i32, y: i32, w: i32, h: i32) -> Rect {
        Rect::new(IVec2::new(x, y), IVec2::new(w, h))
    }

    #[test]
    fn overlapping_rects_intersect() {
        let a = rect(0, 0, 10, 10);
        let b = rect(5, 5, 10, 10);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn disjoint_rects_do_not_intersect() {
        let a = rect(0, 0, 10, 10);
        let b = rect(20, 0, 10, 10);
        assert!(!a.intersects(&b));
        assert!(!b.intersects(&a));
    }

    #[test]
    fn edge_touching_rects_do_not_intersect() {
        let a = rect(0, 0, 10, 10);
        let right = rect(10, 0, 10, 10);
        let below = rect(0, 10, 10, 10);
        assert!(!a.intersects(&right));
        assert!(!a.intersects(&below));
    }

    #[test]
    fn contained_rect_intersects() {
        let outer = rect(0, 0, 100, 100);
        let inner = rect(40, 40, 10, 10);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn one_pixel_overlap_intersects() {
        let a = rect(0, 0, 10, 10);
        let b = rect(9, 9, 10, 10);
        assert!(a.intersects(&b));
    }
}
