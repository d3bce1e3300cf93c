//! Planar coordinate type and heading computation.
//!
//! The world is the square `[0, WORLD_SIZE] × [0, WORLD_SIZE]` in abstract
//! world units.  `Point` uses `f64` throughout: sample spacing at low speeds
//! is a few world units out of a million, which `f32` cannot resolve.

use std::f64::consts::TAU;
use std::fmt;
use std::ops::Sub;

/// Side length of the square world, in world units.
pub const WORLD_SIZE: f64 = 1_000_000.0;

/// A 2-D point (or, as the result of subtraction, a displacement vector).
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean norm of the point treated as a vector.
    #[inline]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Euclidean distance to `other`.
    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        (other - self).length()
    }

    /// `true` if both coordinates lie inside the closed world square.
    #[inline]
    pub fn in_world(self) -> bool {
        (0.0..=WORLD_SIZE).contains(&self.x) && (0.0..=WORLD_SIZE).contains(&self.y)
    }
}

impl Sub for Point {
    type Output = Point;

    #[inline]
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

/// Angle of `v` measured counter-clockwise from +x, normalised to `[0, 2π)`.
///
/// `atan2` returns `(-π, π]`; negative angles are shifted by a full turn.  A
/// shifted value that rounds up to exactly `2π` (angles of about `-1e-16`) is
/// folded back to `0` so the half-open range holds.
pub fn heading(v: Point) -> f64 {
    let angle = v.y.atan2(v.x);
    if angle >= 0.0 {
        return angle;
    }
    let shifted = angle + TAU;
    if shifted >= TAU { 0.0 } else { shifted }
}
