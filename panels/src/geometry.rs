//! Pointer-space geometry for hit testing rows and handles.
//!
//! Coordinates are in pixels (or terminal cells widened to `f32`); the drag
//! logic only needs vertical extents and containment.

/// A pointer position.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    pub fn distance(&self, other: Point) -> f32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// An axis-aligned bounding box.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Half the height, measured from the top edge.
    pub fn mid_height(&self) -> f32 {
        (self.bottom() - self.top()) / 2.0
    }

    /// Absolute y of the vertical midpoint.
    pub fn mid_y(&self) -> f32 {
        self.top() + self.mid_height()
    }

    /// Check if a point lies inside (right and bottom edges exclusive).
    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x && point.x < self.right() && point.y >= self.y && point.y < self.bottom()
    }

    /// Check if a y coordinate lies within the vertical extent.
    pub fn contains_y(&self, y: f32) -> bool {
        y >= self.top() && y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midpoint() {
        let rect = Rect::new(0.0, 40.0, 200.0, 20.0);
        assert_eq!(rect.mid_height(), 10.0);
        assert_eq!(rect.mid_y(), 50.0);
    }

    #[test]
    fn test_contains_edges() {
        let rect = Rect::new(10.0, 10.0, 10.0, 10.0);
        assert!(rect.contains(Point::new(10.0, 10.0)));
        assert!(!rect.contains(Point::new(20.0, 15.0)));
        assert!(!rect.contains(Point::new(15.0, 20.0)));
    }
}
