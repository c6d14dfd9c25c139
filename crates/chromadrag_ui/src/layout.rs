//! Layout primitives shared between the platform layer and the picker core.
//!
//! All coordinates are in the widget's local space: the platform translates
//! device/global coordinates before handing them over.

use serde::{Deserialize, Serialize};

// ============================================================================
// Point
// ============================================================================

/// A point in widget-local screen coordinates (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    /// The origin.
    pub const ORIGIN: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance_to(self, other: Point) -> f32 {
        (self.x - other.x).hypot(self.y - other.y)
    }

    /// Linear interpolation towards `other`, component-wise.
    #[inline]
    pub fn lerp(self, other: Point, t: f32) -> Point {
        Point::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
        )
    }

    /// Component along the given axis.
    #[inline]
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

// ============================================================================
// Axis
// ============================================================================

/// Primary axis of a linear track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Axis {
    #[default]
    Horizontal,
    Vertical,
}

// ============================================================================
// Size
// ============================================================================

/// Widget dimensions as reported by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    /// Zero size, the state of a view that has not been measured yet.
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    /// Create a new size.
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True if either dimension is zero, negative or not finite.
    pub fn is_degenerate(&self) -> bool {
        !(self.width.is_finite() && self.height.is_finite())
            || self.width <= 0.0
            || self.height <= 0.0
    }

    /// Center of a box of this size anchored at the origin.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }

    /// Half of the smaller dimension.
    pub fn min_half(&self) -> f32 {
        (self.width / 2.0).min(self.height / 2.0)
    }
}

// ============================================================================
// Padding
// ============================================================================

/// Padding box around the widget content.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// No padding.
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    /// Create padding from individual sides.
    pub const fn new(top: f32, right: f32, bottom: f32, left: f32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same padding on every side.
    pub const fn uniform(value: f32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Largest of the four sides.
    pub fn max_side(&self) -> f32 {
        self.top.max(self.right).max(self.bottom).max(self.left)
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}

// ============================================================================
// Bounds
// ============================================================================

/// Axis-aligned rectangle (x, y is the top-left corner).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Bounds {
    /// Create bounds from position and size.
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Create bounds from left/top/right/bottom edges.
    pub fn from_edges(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    /// Right edge.
    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Bottom edge.
    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Center point.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// True if the rectangle has no area.
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }

    /// Inclusive containment test.
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x <= self.right() && point.y >= self.y && point.y <= self.bottom()
    }

    /// Start coordinate along an axis.
    pub fn start(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// End coordinate along an axis.
    pub fn end(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.right(),
            Axis::Vertical => self.bottom(),
        }
    }

    /// Extent along an axis.
    pub fn length(&self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    /// Move the rectangle so its center along `axis` sits at `coordinate`.
    pub fn centered_at(self, axis: Axis, coordinate: f32) -> Self {
        match axis {
            Axis::Horizontal => Self {
                x: coordinate - self.width / 2.0,
                ..self
            },
            Axis::Vertical => Self {
                y: coordinate - self.height / 2.0,
                ..self
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounds_contains_edges() {
        let bounds = Bounds::new(10.0, 10.0, 100.0, 20.0);
        assert!(bounds.contains(Point::new(10.0, 10.0)));
        assert!(bounds.contains(Point::new(110.0, 30.0)));
        assert!(!bounds.contains(Point::new(110.1, 20.0)));
        assert!(!bounds.contains(Point::new(50.0, 9.9)));
    }

    #[test]
    fn test_empty_bounds() {
        assert!(Bounds::new(0.0, 0.0, 0.0, 10.0).is_empty());
        assert!(Bounds::new(0.0, 0.0, 10.0, -1.0).is_empty());
        assert!(!Bounds::new(0.0, 0.0, 1.0, 1.0).is_empty());
    }

    #[test]
    fn test_centered_at() {
        let handle = Bounds::new(0.0, 5.0, 30.0, 40.0);
        let moved = handle.centered_at(Axis::Horizontal, 60.0);
        assert_eq!(moved.x, 45.0);
        assert_eq!(moved.y, 5.0);

        let moved = handle.centered_at(Axis::Vertical, 100.0);
        assert_eq!(moved.x, 0.0);
        assert_eq!(moved.y, 80.0);
    }

    #[test]
    fn test_size_degenerate() {
        assert!(Size::ZERO.is_degenerate());
        assert!(Size::new(f32::NAN, 10.0).is_degenerate());
        assert!(!Size::new(200.0, 100.0).is_degenerate());
        assert_eq!(Size::new(200.0, 100.0).min_half(), 50.0);
    }

    #[test]
    fn test_padding_max_side() {
        let padding = Padding::new(1.0, 7.0, 3.0, 2.0);
        assert_eq!(padding.max_side(), 7.0);
        assert_eq!(padding.horizontal(), 9.0);
        assert_eq!(padding.vertical(), 4.0);
    }

    #[test]
    fn test_point_lerp() {
        let a = Point::new(0.0, 10.0);
        let b = Point::new(10.0, 30.0);
        assert_eq!(a.lerp(b, 0.5), Point::new(5.0, 20.0));
        assert_eq!(a.lerp(b, 0.0), a);
        assert_eq!(a.lerp(b, 1.0), b);
    }
}
