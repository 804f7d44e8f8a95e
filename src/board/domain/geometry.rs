//! Integer pixel geometry for drop-target hit testing.

use serde::{Deserialize, Serialize};

/// A pointer coordinate in viewport pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    /// Horizontal offset.
    pub x: i32,
    /// Vertical offset.
    pub y: i32,
}

impl Point {
    /// Creates a point.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// An axis-aligned rectangle in viewport pixels.
///
/// Edges are half-open: a rectangle covers `x..x + width` horizontally.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge.
    pub x: i32,
    /// Top edge.
    pub y: i32,
    /// Width; never negative.
    pub width: u32,
    /// Height; never negative.
    pub height: u32,
}

impl Rect {
    /// Creates a rectangle.
    #[must_use]
    pub const fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Returns `true` when the rectangle covers no pixels.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }

    const fn left(&self) -> i64 {
        self.x as i64
    }

    const fn top(&self) -> i64 {
        self.y as i64
    }

    const fn right(&self) -> i64 {
        self.x as i64 + self.width as i64
    }

    const fn bottom(&self) -> i64 {
        self.y as i64 + self.height as i64
    }

    /// Returns the covered area in square pixels.
    #[must_use]
    pub const fn area(&self) -> u64 {
        self.width as u64 * self.height as u64
    }

    /// Returns `true` when the point lies inside the rectangle.
    #[must_use]
    pub const fn contains(&self, point: Point) -> bool {
        let px = point.x as i64;
        let py = point.y as i64;
        !self.is_empty()
            && px >= self.left()
            && px < self.right()
            && py >= self.top()
            && py < self.bottom()
    }

    /// Returns the overlapping area with `other`; zero when the rectangles
    /// only touch or are disjoint.
    #[must_use]
    pub fn intersection_area(&self, other: &Self) -> u64 {
        let width = self.right().min(other.right()) - self.left().max(other.left());
        let height = self.bottom().min(other.bottom()) - self.top().max(other.top());
        if width <= 0 || height <= 0 {
            return 0;
        }
        width.unsigned_abs() * height.unsigned_abs()
    }

    /// Returns `true` when the rectangles overlap by at least one pixel.
    #[must_use]
    pub fn intersects(&self, other: &Self) -> bool {
        self.intersection_area(other) > 0
    }

    /// Returns the center scaled by two, so odd sizes stay exact.
    #[must_use]
    pub const fn doubled_center(&self) -> (i64, i64) {
        (
            self.left() + self.right(),
            self.top() + self.bottom(),
        )
    }

    /// Returns a value that orders rectangles by the distance between their
    /// centers. It is four times the squared euclidean distance.
    #[must_use]
    pub const fn center_distance_key(&self, other: &Self) -> u128 {
        let (ax, ay) = self.doubled_center();
        let (bx, by) = other.doubled_center();
        let dx = (ax - bx).unsigned_abs() as u128;
        let dy = (ay - by).unsigned_abs() as u128;
        dx * dx + dy * dy
    }
}
