//! Integer axis-aligned rectangles

use glam::IVec2;

/// An axis-aligned rectangle in arena units, anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub pos: IVec2,
    pub size: IVec2,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            pos: IVec2::new(x, y),
            size: IVec2::new(width, height),
        }
    }

    pub const fn from_parts(pos: IVec2, size: IVec2) -> Self {
        Self { pos, size }
    }

    #[inline]
    pub fn left(&self) -> i32 {
        self.pos.x
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.pos.x + self.size.x
    }

    #[inline]
    pub fn top(&self) -> i32 {
        self.pos.y
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.pos.y + self.size.y
    }

    /// True when the two rectangles share a region of positive area.
    /// Touching edges do not count, and an empty rectangle never intersects.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.size.x <= 0 || self.size.y <= 0 || other.size.x <= 0 || other.size.y <= 0 {
            return false;
        }
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    /// Copy of this rectangle moved by `delta`
    pub fn translated(&self, delta: IVec2) -> Self {
        Self {
            pos: self.pos + delta,
            size: self.size,
        }
    }
}
