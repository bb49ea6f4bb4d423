use crate::math::Point2;

/// A control or anchor point along a branch.
///
/// `value` is the co-occurrence value the point stands for. Points produced by
/// resampling are not tied to any sample and carry `None`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BranchPoint {
    pub x: f64,
    pub y: f64,
    /// Ribbon width at this point. Not clamped: subdivision may drive it
    /// negative for degenerate inputs.
    pub width: f64,
    pub value: Option<f64>,
}

impl BranchPoint {
    /// Creates a point carrying a sample value.
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, value: f64) -> Self {
        Self {
            x,
            y,
            width,
            value: Some(value),
        }
    }

    /// Creates a point produced by resampling (no associated value).
    #[must_use]
    pub fn resampled(x: f64, y: f64, width: f64) -> Self {
        Self {
            x,
            y,
            width,
            value: None,
        }
    }

    /// Creates a point at polar coordinates `(radius, angle)` around the origin.
    #[must_use]
    pub fn polar(radius: f64, angle: f64, width: f64, value: f64) -> Self {
        Self::new(radius * angle.cos(), radius * angle.sin(), width, value)
    }

    /// Returns the plane position.
    #[must_use]
    pub fn position(&self) -> Point2 {
        Point2::new(self.x, self.y)
    }

    /// Euclidean distance from the origin.
    #[must_use]
    pub fn radial_distance(&self) -> f64 {
        self.x.hypot(self.y)
    }
}
