use crate::error::{GeometryError, Result};
use crate::geometry::BranchPoint;
use crate::math::interpolate::HermiteSpline;

/// Resamples a branch polyline to a fixed number of points.
///
/// Positions are interpolated with not-a-knot cubic splines and widths with a
/// monotone (PCHIP) interpolant, all parameterized by the distance from the
/// origin rather than arc length. That distance must therefore grow along the
/// branch: the input points must be ordered by strictly increasing radial
/// distance.
#[derive(Debug)]
pub struct ResampleBranch {
    points: Vec<BranchPoint>,
    resolution: usize,
}

impl ResampleBranch {
    /// Creates a new resampling operation producing `resolution + 1` points.
    #[must_use]
    pub fn new(points: Vec<BranchPoint>, resolution: usize) -> Self {
        Self { points, resolution }
    }

    /// Executes the resampling.
    ///
    /// The returned points carry no value and are evenly spaced in radial
    /// distance between the innermost and outermost input point.
    ///
    /// # Errors
    ///
    /// - `GeometryError::InsufficientPoints` if fewer than 2 points are given
    /// - `GeometryError::ZeroResolution` if `resolution` is 0
    /// - `GeometryError::NonMonotonicRadius` if the radial distance decreases
    ///   anywhere along the branch
    /// - `GeometryError::NotStrictlyIncreasing` if two consecutive points lie
    ///   at the same radial distance
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> Result<Vec<BranchPoint>> {
        if self.points.len() < 2 {
            return Err(GeometryError::InsufficientPoints {
                required: 2,
                actual: self.points.len(),
            }
            .into());
        }
        if self.resolution == 0 {
            return Err(GeometryError::ZeroResolution.into());
        }

        let dist: Vec<f64> = self.points.iter().map(BranchPoint::radial_distance).collect();
        check_radial_order(&dist)?;

        let xs: Vec<f64> = self.points.iter().map(|p| p.x).collect();
        let ys: Vec<f64> = self.points.iter().map(|p| p.y).collect();
        let ws: Vec<f64> = self.points.iter().map(|p| p.width).collect();

        let fx = HermiteSpline::not_a_knot(&dist, &xs)?;
        let fy = HermiteSpline::not_a_knot(&dist, &ys)?;
        let fw = HermiteSpline::pchip(&dist, &ws)?;

        let (d_min, d_max) = fx.domain();
        let div = self.resolution as f64;
        let resampled = (0..=self.resolution)
            .map(|i| {
                let d = (d_min + (d_max - d_min) * i as f64 / div).min(d_max);
                BranchPoint::resampled(fx.evaluate(d), fy.evaluate(d), fw.evaluate(d))
            })
            .collect();
        Ok(resampled)
    }
}

/// Fails on the first point that lies closer to the origin than its predecessor.
fn check_radial_order(dist: &[f64]) -> Result<()> {
    if dist.iter().any(|d| !d.is_finite()) {
        return Err(GeometryError::NonFinite("branch point coordinates").into());
    }
    for (i, w) in dist.windows(2).enumerate() {
        if w[1] < w[0] {
            return Err(GeometryError::NonMonotonicRadius {
                index: i + 1,
                previous: w[0],
                current: w[1],
            }
            .into());
        }
    }
    Ok(())
}
