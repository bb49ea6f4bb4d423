//! One-dimensional piecewise-cubic interpolants over a strictly increasing
//! abscissa.
//!
//! Both interpolants are stored in Hermite form (node values plus node
//! slopes); they only differ in how the slopes are chosen:
//!
//! - [`HermiteSpline::not_a_knot`]: C² cubic spline whose third derivative is
//!   continuous across the second and second-to-last nodes.
//! - [`HermiteSpline::pchip`]: Fritsch–Carlson monotone slopes, which never
//!   overshoot the data between nodes.

use crate::error::{GeometryError, Result};

/// A piecewise cubic Hermite interpolant.
#[derive(Debug, Clone)]
pub struct HermiteSpline {
    xs: Vec<f64>,
    ys: Vec<f64>,
    slopes: Vec<f64>,
}

impl HermiteSpline {
    /// Builds a cubic spline with not-a-knot end conditions.
    ///
    /// With three nodes this is the interpolating parabola, with two the
    /// straight line through them.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 nodes are given, the slices differ in
    /// length, or `xs` is not strictly increasing.
    pub fn not_a_knot(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let secants = validate_nodes(xs, ys)?;
        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let slopes = match n {
            2 => vec![secants[0]; 2],
            3 => {
                // Derivative of the parabola through the three nodes.
                let curvature = (secants[1] - secants[0]) / (xs[2] - xs[0]);
                xs.iter()
                    .map(|&x| secants[0] + curvature * (2.0 * x - xs[0] - xs[1]))
                    .collect()
            }
            _ => {
                let mut lower = vec![0.0; n];
                let mut diag = vec![0.0; n];
                let mut upper = vec![0.0; n];
                let mut rhs = vec![0.0; n];

                let d0 = xs[2] - xs[0];
                diag[0] = h[1];
                upper[0] = d0;
                rhs[0] = ((h[0] + 2.0 * d0) * h[1] * secants[0] + h[0] * h[0] * secants[1]) / d0;

                for i in 1..n - 1 {
                    lower[i] = h[i];
                    diag[i] = 2.0 * (h[i - 1] + h[i]);
                    upper[i] = h[i - 1];
                    rhs[i] = 3.0 * (h[i] * secants[i - 1] + h[i - 1] * secants[i]);
                }

                let dn = xs[n - 1] - xs[n - 3];
                lower[n - 1] = dn;
                diag[n - 1] = h[n - 3];
                rhs[n - 1] = (h[n - 2] * h[n - 2] * secants[n - 3]
                    + (2.0 * dn + h[n - 2]) * h[n - 3] * secants[n - 2])
                    / dn;

                solve_tridiagonal(&lower, &diag, &upper, rhs)
            }
        };

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            slopes,
        })
    }

    /// Builds a shape-preserving monotone cubic interpolant (PCHIP).
    ///
    /// Between two nodes the interpolant stays within the range of their
    /// values, so non-negative data never dips below zero.
    ///
    /// # Errors
    ///
    /// Returns an error if fewer than 2 nodes are given, the slices differ in
    /// length, or `xs` is not strictly increasing.
    pub fn pchip(xs: &[f64], ys: &[f64]) -> Result<Self> {
        let secants = validate_nodes(xs, ys)?;
        let n = xs.len();
        let h: Vec<f64> = xs.windows(2).map(|w| w[1] - w[0]).collect();

        let slopes = if n == 2 {
            vec![secants[0]; 2]
        } else {
            let mut slopes = vec![0.0; n];
            for k in 1..n - 1 {
                let (m0, m1) = (secants[k - 1], secants[k]);
                if m0 * m1 > 0.0 {
                    // Weighted harmonic mean of the neighbouring secants.
                    let w1 = 2.0 * h[k] + h[k - 1];
                    let w2 = h[k] + 2.0 * h[k - 1];
                    slopes[k] = (w1 + w2) / (w1 / m0 + w2 / m1);
                }
            }
            slopes[0] = pchip_end_slope(h[0], h[1], secants[0], secants[1]);
            slopes[n - 1] = pchip_end_slope(h[n - 2], h[n - 3], secants[n - 2], secants[n - 3]);
            slopes
        };

        Ok(Self {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
            slopes,
        })
    }

    /// Returns the domain `[x_min, x_max]` covered by the nodes.
    #[must_use]
    pub fn domain(&self) -> (f64, f64) {
        (self.xs[0], self.xs[self.xs.len() - 1])
    }

    /// Evaluates the interpolant at `x`.
    ///
    /// Values outside the domain are extrapolated from the first or last
    /// piece.
    #[must_use]
    pub fn evaluate(&self, x: f64) -> f64 {
        let last = self.xs.len() - 2;
        let i = self.xs.partition_point(|&xi| xi <= x).saturating_sub(1).min(last);

        let dx = self.xs[i + 1] - self.xs[i];
        let secant = (self.ys[i + 1] - self.ys[i]) / dx;
        let (s0, s1) = (self.slopes[i], self.slopes[i + 1]);

        let t = (s0 + s1 - 2.0 * secant) / dx;
        let c3 = t / dx;
        let c2 = (secant - s0) / dx - t;

        let u = x - self.xs[i];
        self.ys[i] + u * (s0 + u * (c2 + u * c3))
    }
}

/// Checks node layout and returns the secant slope of every interval.
fn validate_nodes(xs: &[f64], ys: &[f64]) -> Result<Vec<f64>> {
    if xs.len() < 2 || xs.len() != ys.len() {
        return Err(GeometryError::InsufficientPoints {
            required: 2,
            actual: xs.len().min(ys.len()),
        }
        .into());
    }
    if xs.iter().chain(ys).any(|v| !v.is_finite()) {
        return Err(GeometryError::NonFinite("interpolation nodes").into());
    }
    if let Some(index) = xs.windows(2).position(|w| w[1] <= w[0]) {
        return Err(GeometryError::NotStrictlyIncreasing { index: index + 1 }.into());
    }
    Ok(xs
        .windows(2)
        .zip(ys.windows(2))
        .map(|(x, y)| (y[1] - y[0]) / (x[1] - x[0]))
        .collect())
}

/// One-sided three-point end slope, limited so the end piece stays monotone.
fn pchip_end_slope(h0: f64, h1: f64, m0: f64, m1: f64) -> f64 {
    let d = ((2.0 * h0 + h1) * m0 - h0 * m1) / (h0 + h1);
    if d.signum() != m0.signum() || m0 == 0.0 {
        0.0
    } else if m0.signum() != m1.signum() && d.abs() > 3.0 * m0.abs() {
        3.0 * m0
    } else {
        d
    }
}

/// Solves a tridiagonal system with the Thomas algorithm.
///
/// Row `i` reads `lower[i]·x[i-1] + diag[i]·x[i] + upper[i]·x[i+1] = rhs[i]`.
fn solve_tridiagonal(lower: &[f64], diag: &[f64], upper: &[f64], mut rhs: Vec<f64>) -> Vec<f64> {
    let n = diag.len();
    let mut c = vec![0.0; n];

    c[0] = upper[0] / diag[0];
    rhs[0] /= diag[0];
    for i in 1..n {
        let denom = diag[i] - lower[i] * c[i - 1];
        c[i] = upper[i] / denom;
        rhs[i] = (rhs[i] - lower[i] * rhs[i - 1]) / denom;
    }
    for i in (0..n - 1).rev() {
        rhs[i] -= c[i] * rhs[i + 1];
    }
    rhs
}
