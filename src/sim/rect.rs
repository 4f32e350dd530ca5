//! Axis-aligned rectangle geometry
//!
//! Everything in the play-field is an axis-aligned box: the character's
//! hitbox and both sub-pipes of every pair. Collision is plain AABB overlap.

/// An axis-aligned rectangle anchored at its top-left corner
#[derive(Debug, Clone, Copy, PartialEq)]
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

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// AABB overlap test
    ///
    /// Two rectangles overlap unless one is strictly separated from the
    /// other on some axis; rectangles sharing an edge count as overlapping.
    pub fn overlaps(&self, other: &Rect) -> bool {
        !(self.right() < other.left()
            || other.right() < self.left()
            || self.bottom() < other.top()
            || other.bottom() < self.top())
    }

    /// Whether this rectangle lies entirely to the left of `x`
    #[inline]
    pub fn is_left_of(&self, x: f32) -> bool {
        self.right() < x
    }
}
