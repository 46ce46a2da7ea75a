//! Axis-aligned bounding box overlap tests
//!
//! Every entity in the game is a rectangle, so collision detection is a
//! single brute-force AABB check per enemy per tick.

use glam::Vec2;

/// An axis-aligned bounding box, top-left corner convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    /// Top-left corner
    pub pos: Vec2,
    /// Width and height (expected positive)
    pub size: Vec2,
}

impl Aabb {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }
}

/// AABB overlap test with half-open interval semantics.
///
/// Each box covers [x, x+w) x [y, y+h), so rectangles that merely share an
/// edge do NOT overlap. This avoids the edge-touch ambiguity of closed
/// comparisons; tests rely on this convention.
pub fn overlaps(a: &Aabb, b: &Aabb) -> bool {
    a.pos.x < b.pos.x + b.size.x
        && b.pos.x < a.pos.x + a.size.x
        && a.pos.y < b.pos.y + b.size.y
        && b.pos.y < a.pos.y + a.size.y
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_identical_bounds_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(0.0, 0.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_self_overlap() {
        let a = Aabb::new(42.0, -7.5, 3.0, 900.0);
        assert!(overlaps(&a, &a));
    }

    #[test]
    fn test_disjoint_boxes() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(100.0, 100.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
        assert!(!overlaps(&b, &a));
    }

    #[test]
    fn test_partial_overlap() {
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(5.0, 5.0, 10.0, 10.0);
        assert!(overlaps(&a, &b));
    }

    #[test]
    fn test_shared_edge_is_not_overlap() {
        // Half-open intervals: b starts exactly where a ends
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(10.0, 0.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));

        let c = Aabb::new(0.0, 10.0, 10.0, 10.0);
        assert!(!overlaps(&a, &c));
    }

    #[test]
    fn test_one_axis_overlap_is_not_enough() {
        // Same x range, disjoint y range
        let a = Aabb::new(0.0, 0.0, 10.0, 10.0);
        let b = Aabb::new(0.0, 50.0, 10.0, 10.0);
        assert!(!overlaps(&a, &b));
    }

    #[test]
    fn test_containment() {
        let outer = Aabb::new(0.0, 0.0, 100.0, 100.0);
        let inner = Aabb::new(40.0, 40.0, 5.0, 5.0);
        assert!(overlaps(&outer, &inner));
        assert!(overlaps(&inner, &outer));
    }

    proptest! {
        #[test]
        fn prop_overlap_is_symmetric(
            ax in -1000.0f32..1000.0, ay in -1000.0f32..1000.0,
            aw in 0.1f32..500.0, ah in 0.1f32..500.0,
            bx in -1000.0f32..1000.0, by in -1000.0f32..1000.0,
            bw in 0.1f32..500.0, bh in 0.1f32..500.0,
        ) {
            let a = Aabb::new(ax, ay, aw, ah);
            let b = Aabb::new(bx, by, bw, bh);
            prop_assert_eq!(overlaps(&a, &b), overlaps(&b, &a));
        }

        #[test]
        fn prop_positive_box_overlaps_itself(
            x in -1000.0f32..1000.0, y in -1000.0f32..1000.0,
            w in 0.1f32..500.0, h in 0.1f32..500.0,
        ) {
            let a = Aabb::new(x, y, w, h);
            prop_assert!(overlaps(&a, &a));
        }
    }
}
