//! Quadratic Bezier curve over world points.

use ts_core::Point;

/// `B(t) = (1-t)²·start + 2(1-t)t·control + t²·end`, for `t ∈ [0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QuadraticBezier {
    pub start:   Point,
    pub control: Point,
    pub end:     Point,
}

impl QuadraticBezier {
    #[inline]
    pub fn new(start: Point, control: Point, end: Point) -> Self {
        Self { start, control, end }
    }

    /// Evaluate the curve at parameter `t`.
    #[inline]
    pub fn at(&self, t: f64) -> Point {
        let u = 1.0 - t;
        let a = u.powi(2);
        let b = 2.0 * u * t;
        let c = t.powi(2);
        Point::new(
            a * self.start.x + b * self.control.x + c * self.end.x,
            a * self.start.y + b * self.control.y + c * self.end.y,
        )
    }

    /// `|start − control| + |control − end|`.
    ///
    /// An upper bound on the arc length (the curve lies in the convex hull of
    /// its control polygon).
    #[inline]
    pub fn control_polygon_length(&self) -> f64 {
        (self.start - self.control).length() + (self.end - self.control).length()
    }
}
