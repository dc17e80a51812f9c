//! Geometric types for surface-local coordinates

use serde::{Deserialize, Serialize};

/// A pointer position in surface-local pixel coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle anchored at a drag start point.
///
/// Width and height are signed while a drag is live (the anchor stays at the
/// start point regardless of drag direction). Committed selections always
/// hold the normalized form.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle spanning from a drag start point to the current pointer
    /// position, keeping the signed extents
    pub fn from_points(start: Point, current: Point) -> Self {
        Self {
            x: start.x,
            y: start.y,
            width: current.x - start.x,
            height: current.y - start.y,
        }
    }

    /// Fold negative extents into a rectangle with non-negative width and
    /// height covering the same area
    pub fn normalized(&self) -> Rect {
        let (x, width) = if self.width < 0.0 {
            (self.x + self.width, -self.width)
        } else {
            (self.x, self.width)
        };
        let (y, height) = if self.height < 0.0 {
            (self.y + self.height, -self.height)
        } else {
            (self.y, self.height)
        };
        Rect {
            x,
            y,
            width,
            height,
        }
    }

    /// True when either extent is zero (a click or a straight-line drag)
    pub fn is_degenerate(&self) -> bool {
        self.width == 0.0 || self.height == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_keeps_signed_extents() {
        let r = Rect::from_points(Point::new(50.0, 40.0), Point::new(10.0, 60.0));
        assert_eq!(r.x, 50.0);
        assert_eq!(r.y, 40.0);
        assert_eq!(r.width, -40.0);
        assert_eq!(r.height, 20.0);
    }

    #[test]
    fn test_normalized_folds_negative_extents() {
        let r = Rect::new(50.0, 40.0, -40.0, 20.0).normalized();
        assert_eq!(r, Rect::new(10.0, 40.0, 40.0, 20.0));

        let r = Rect::new(10.0, 60.0, 30.0, -25.0).normalized();
        assert_eq!(r, Rect::new(10.0, 35.0, 30.0, 25.0));
    }

    #[test]
    fn test_normalized_is_identity_for_positive_extents() {
        let r = Rect::new(10.0, 10.0, 50.0, 20.0);
        assert_eq!(r.normalized(), r);
    }

    #[test]
    fn test_degenerate_rects() {
        assert!(Rect::new(5.0, 5.0, 0.0, 10.0).is_degenerate());
        assert!(Rect::new(5.0, 5.0, 10.0, 0.0).is_degenerate());
        assert!(!Rect::new(5.0, 5.0, 1.0, 1.0).is_degenerate());
    }
}
