//! Axis-aligned rectangle used for hitboxes, bins and button regions

use serde::{Serialize, Deserialize};

/// A rectangle defined by its top-left corner and size
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Create from screen dimensions
    pub fn screen(width: f32, height: f32) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    /// Bottom edge
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center X
    pub fn center_x(&self) -> f32 {
        self.x + self.w * 0.5
    }

    /// Center Y
    pub fn center_y(&self) -> f32 {
        self.y + self.h * 0.5
    }

    /// Check if point is inside (half-open: left/top edges included, right/bottom excluded)
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// Strict AABB overlap. Rectangles that only share an edge do not overlap,
    /// on either axis.
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// True when every edge lies within `bounds` (edges may touch)
    pub fn fits_inside(&self, bounds: &Rect) -> bool {
        self.x >= bounds.x
            && self.y >= bounds.y
            && self.right() <= bounds.right()
            && self.bottom() <= bounds.bottom()
    }

    /// Move this rect so it lies fully inside `bounds`, each axis independently.
    /// A rect larger than the bounds is pinned to the top-left corner.
    pub fn clamped_inside(&self, bounds: &Rect) -> Self {
        let max_x = (bounds.right() - self.w).max(bounds.x);
        let max_y = (bounds.bottom() - self.h).max(bounds.y);
        Self::new(
            self.x.clamp(bounds.x, max_x),
            self.y.clamp(bounds.y, max_y),
            self.w,
            self.h,
        )
    }

    /// Shrink by padding on all sides
    pub fn pad(&self, padding: f32) -> Self {
        Self::new(
            self.x + padding,
            self.y + padding,
            (self.w - padding * 2.0).max(0.0),
            (self.h - padding * 2.0).max(0.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(310.0, 267.0, 180.0, 50.0);
        assert!(r.contains(400.0, 290.0));
        assert!(r.contains(310.0, 267.0));
        assert!(!r.contains(490.0, 290.0));
        assert!(!r.contains(400.0, 317.0));
        assert!(!r.contains(5.0, 40.0));
    }

    #[test]
    fn test_overlaps() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(a.overlaps(&Rect::new(90.0, 90.0, 40.0, 40.0)));
        assert!(a.overlaps(&Rect::new(20.0, 20.0, 10.0, 10.0)));
        assert!(Rect::new(20.0, 20.0, 10.0, 10.0).overlaps(&a));
        assert!(!a.overlaps(&Rect::new(200.0, 0.0, 40.0, 40.0)));
    }

    #[test]
    fn test_touching_edges_do_not_overlap() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        assert!(!a.overlaps(&Rect::new(100.0, 0.0, 40.0, 40.0)));
        assert!(!a.overlaps(&Rect::new(0.0, 100.0, 40.0, 40.0)));
        assert!(!a.overlaps(&Rect::new(-40.0, 0.0, 40.0, 40.0)));
        assert!(!a.overlaps(&Rect::new(0.0, -40.0, 40.0, 40.0)));
    }

    #[test]
    fn test_clamped_inside() {
        let bounds = Rect::screen(800.0, 600.0);
        let r = Rect::new(-30.0, 550.0, 100.0, 100.0).clamped_inside(&bounds);
        assert_eq!(r, Rect::new(0.0, 500.0, 100.0, 100.0));

        let r = Rect::new(750.0, -5.0, 100.0, 100.0).clamped_inside(&bounds);
        assert_eq!(r, Rect::new(700.0, 0.0, 100.0, 100.0));

        let inside = Rect::new(10.0, 10.0, 100.0, 100.0);
        assert_eq!(inside.clamped_inside(&bounds), inside);
    }

    #[test]
    fn test_fits_inside() {
        let bounds = Rect::screen(800.0, 600.0);
        assert!(Rect::new(700.0, 500.0, 100.0, 100.0).fits_inside(&bounds));
        assert!(!Rect::new(701.0, 500.0, 100.0, 100.0).fits_inside(&bounds));
        assert!(!Rect::new(-1.0, 0.0, 10.0, 10.0).fits_inside(&bounds));
    }

    #[test]
    fn test_pad() {
        let r = Rect::new(10.0, 10.0, 40.0, 20.0).pad(5.0);
        assert_eq!(r, Rect::new(15.0, 15.0, 30.0, 10.0));
        assert_eq!(Rect::new(0.0, 0.0, 4.0, 4.0).pad(5.0).w, 0.0);
    }
}
