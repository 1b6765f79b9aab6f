//! Fundamental geometry and color types used across the workspace.

use nalgebra::Vector2;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// Screen space: logical pixels, origin top-left, +y pointing down.
// ---------------------------------------------------------------------------

/// A position or displacement in screen space.
pub type Point = Vector2<f32>;

/// Build a [`Point`] from an `[x, y]` pair (the form used in config files).
pub fn point(xy: [f32; 2]) -> Point {
    Point::new(xy[0], xy[1])
}

/// True when `lo`, `hi` and the span between them are all finite, so the
/// range can be sampled uniformly.
pub fn finite_range(lo: f32, hi: f32) -> bool {
    lo.is_finite() && hi.is_finite() && (hi - lo).is_finite()
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub size: Point,
}

impl Rect {
    pub fn new(min: Point, size: Point) -> Self {
        Self { min, size }
    }

    pub fn square(min: Point, side: f32) -> Self {
        Self::new(min, Point::new(side, side))
    }

    pub fn max(&self) -> Point {
        self.min + self.size
    }

    pub fn center(&self) -> Point {
        self.min + self.size * 0.5
    }

    /// Half-open containment: the left/top edges are inside, the right/bottom
    /// edges are not.
    pub fn contains(&self, p: Point) -> bool {
        let max = self.max();
        p.x >= self.min.x && p.x < max.x && p.y >= self.min.y && p.y < max.y
    }
}

// ---------------------------------------------------------------------------
// Rgba
// ---------------------------------------------------------------------------

/// 8-bit straight-alpha color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}
