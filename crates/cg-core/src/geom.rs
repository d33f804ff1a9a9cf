//! 2-D geometry primitives.
//!
//! Positions and sizes are `f32`: entity motion is time-compensated
//! (`velocity * Δt`) and accumulates fractional cells between frames, so the
//! grid-aligned truncation happens only at draw time.

use std::ops::{Add, AddAssign, Mul, Sub};
use std::time::Duration;

// ── Vec2 ─────────────────────────────────────────────────────────────────────

/// A 2-D point or displacement vector.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2 { x: 0.0, y: 0.0 };

    #[inline]
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Vec2) -> f32 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Time-compensated displacement: treats `self` as a per-second velocity
    /// and returns the distance covered in `elapsed`.
    ///
    /// `pos += velocity.over(ctx.delta)` moves an entity at a frame-rate
    /// independent speed.
    #[inline]
    pub fn over(self, elapsed: Duration) -> Vec2 {
        self * elapsed.as_secs_f32()
    }
}

impl Add for Vec2 {
    type Output = Vec2;
    #[inline]
    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl AddAssign for Vec2 {
    #[inline]
    fn add_assign(&mut self, rhs: Vec2) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Vec2 {
    type Output = Vec2;
    #[inline]
    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f32> for Vec2 {
    type Output = Vec2;
    #[inline]
    fn mul(self, rhs: f32) -> Vec2 {
        Vec2::new(self.x * rhs, self.y * rhs)
    }
}

impl std::fmt::Display for Vec2 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

// ── Rect ─────────────────────────────────────────────────────────────────────

/// An axis-aligned rectangle: origin (top-left) plus size.
///
/// Top-left coordinate system, y growing downward, matching the character
/// grid: row 0 is the top line of the surface.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    #[inline]
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn from_origin_size(origin: Vec2, w: f32, h: f32) -> Self {
        Self { x: origin.x, y: origin.y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// The top-left corner.
    #[inline]
    pub fn origin(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// This rectangle moved so its top-left corner sits at `origin`.
    #[inline]
    pub fn at(&self, origin: Vec2) -> Rect {
        Rect::new(origin.x, origin.y, self.w, self.h)
    }

    /// This rectangle displaced by `offset`.
    #[inline]
    pub fn translated(&self, offset: Vec2) -> Rect {
        Rect::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }

    /// Strict geometric intersection test (symmetric; touching edges do not
    /// count as intersecting).
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// Perimeter-straddle test against `border`: true when `self` lies
    /// partially across any of `border`'s four edge lines.
    ///
    /// Each edge is tested independently with strict inequalities and the
    /// results OR-combined.  This is deliberately *not* a containment check:
    /// a rectangle fully inside `border` returns false, a rectangle fully
    /// outside returns false, and one poking across an edge returns true.
    /// The collision stage uses this to detect partial exit from the world,
    /// not full exit.
    pub fn straddles_perimeter(&self, border: &Rect) -> bool {
        // left edge
        if self.left() < border.left() && self.right() > border.left() {
            return true;
        }
        // right edge
        if self.left() < border.right() && self.right() > border.right() {
            return true;
        }
        // top edge
        if self.top() < border.top() && self.bottom() > border.top() {
            return true;
        }
        // bottom edge
        if self.top() < border.bottom() && self.bottom() > border.bottom() {
            return true;
        }
        false
    }
}

impl std::fmt::Display for Rect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:.1},{:.1} {:.1}x{:.1}]", self.x, self.y, self.w, self.h)
    }
}
