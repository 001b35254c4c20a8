//! Geometry value types shared by layout, hit testing and painting.
//!
//! All values are device-independent units (dips). Conversion to device
//! pixels happens in the paint surface.

use serde::{Deserialize, Serialize};

/// Scalar used for all device-independent coordinates.
pub type Coord = f32;

// ============================================================================
// Size & Point
// ============================================================================

/// A 2D size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: Coord,
    pub height: Coord,
}

impl Size {
    pub const ZERO: Self = Self {
        width: 0.0,
        height: 0.0,
    };

    pub fn new(width: Coord, height: Coord) -> Self {
        Self { width, height }
    }

    /// Square size with both sides equal to `side`.
    pub fn splat(side: Coord) -> Self {
        Self::new(side, side)
    }

    /// True when either side is zero or negative.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Per-axis minimum.
    pub fn min(self, other: Size) -> Size {
        Size::new(self.width.min(other.width), self.height.min(other.height))
    }

    /// Clamp negative sides to zero.
    pub fn non_negative(self) -> Size {
        Size::new(self.width.max(0.0), self.height.max(0.0))
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: Coord,
    pub y: Coord,
}

impl Point {
    pub fn new(x: Coord, y: Coord) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> Coord {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Translate by the negated origin of `rect`, giving rect-local coordinates.
    pub fn relative_to(&self, rect: &Rect) -> Point {
        Point::new(self.x - rect.x, self.y - rect.y)
    }
}

// ============================================================================
// Thickness
// ============================================================================

/// Four-sided thickness (border widths, margins).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Thickness {
    pub top: Coord,
    pub right: Coord,
    pub bottom: Coord,
    pub left: Coord,
}

impl Thickness {
    pub const ZERO: Self = Self {
        top: 0.0,
        right: 0.0,
        bottom: 0.0,
        left: 0.0,
    };

    pub fn new(top: Coord, right: Coord, bottom: Coord, left: Coord) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    /// Same thickness on every side.
    pub fn uniform(value: Coord) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of left and right.
    pub fn horizontal(&self) -> Coord {
        self.left + self.right
    }

    /// Sum of top and bottom.
    pub fn vertical(&self) -> Coord {
        self.top + self.bottom
    }

    pub fn is_zero(&self) -> bool {
        self.top == 0.0 && self.right == 0.0 && self.bottom == 0.0 && self.left == 0.0
    }

    pub fn is_uniform(&self) -> bool {
        self.top == self.right && self.right == self.bottom && self.bottom == self.left
    }

    /// Clamp negative sides to zero.
    pub fn non_negative(self) -> Self {
        Self::new(
            self.top.max(0.0),
            self.right.max(0.0),
            self.bottom.max(0.0),
            self.left.max(0.0),
        )
    }
}

// ============================================================================
// Rect
// ============================================================================

/// An axis-aligned rectangle defined by position and size.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: Coord,
    pub y: Coord,
    pub width: Coord,
    pub height: Coord,
}

impl Rect {
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    pub fn new(x: Coord, y: Coord, width: Coord, height: Coord) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Rectangle at `position` with the given size.
    pub fn from_origin_size(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn right(&self) -> Coord {
        self.x + self.width
    }

    pub fn bottom(&self) -> Coord {
        self.y + self.height
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    pub fn area(&self) -> Coord {
        if self.is_empty() {
            0.0
        } else {
            self.width * self.height
        }
    }

    /// True when the rectangle covers no area.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Edge-inclusive containment. Empty rectangles contain nothing.
    pub fn contains(&self, point: Point) -> bool {
        !self.is_empty()
            && point.x >= self.x
            && point.x <= self.right()
            && point.y >= self.y
            && point.y <= self.bottom()
    }

    /// Get the center point of this rectangle.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Same position, negative sides clamped to zero.
    pub fn normalized(&self) -> Rect {
        Rect::new(self.x, self.y, self.width.max(0.0), self.height.max(0.0))
    }

    /// Shrink by `thickness` on each side. Never produces negative sizes.
    pub fn deflate(&self, thickness: Thickness) -> Rect {
        Rect::new(
            self.x + thickness.left,
            self.y + thickness.top,
            (self.width - thickness.horizontal()).max(0.0),
            (self.height - thickness.vertical()).max(0.0),
        )
    }

    /// Create a new rectangle with padding applied (inset from all sides).
    pub fn with_padding(&self, padding: Coord) -> Rect {
        self.deflate(Thickness::uniform(padding))
    }

    /// A rectangle of `size` centered inside this one.
    pub fn center_size(&self, size: Size) -> Rect {
        Rect::new(
            self.x + (self.width - size.width) / 2.0,
            self.y + (self.height - size.height) / 2.0,
            size.width,
            size.height,
        )
    }

    /// Same rectangle moved so that its origin is at zero.
    pub fn at_origin(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }

    /// Same rectangle moved by `offset`.
    pub fn offset(&self, offset: Point) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.width, self.height)
    }

    /// Compute the intersection of two rectangles.
    /// If there's no overlap, the result has zero size.
    pub fn intersect(&self, other: &Rect) -> Rect {
        let x1 = self.x.max(other.x);
        let y1 = self.y.max(other.y);
        let x2 = self.right().min(other.right());
        let y2 = self.bottom().min(other.bottom());

        Rect::new(x1, y1, (x2 - x1).max(0.0), (y2 - y1).max(0.0))
    }
}
