//! Flutter threshold estimation.
//!
//! Helps pick `beta` before meshing: for each category it estimates the
//! flutter scale at which the first displaced midpoint would push the branch
//! outline past its own start width. Values of `beta` below the minimum
//! threshold keep every branch from overlapping itself at the first level.
//! This is a heuristic aid, not part of the mesh pipeline.

use std::f64::consts::TAU;
use std::fmt;

use crate::dataset::Dataset;
use crate::math::stats;

/// Per-category thresholds and their minimum.
#[derive(Debug, Clone, PartialEq)]
pub struct ThresholdReport {
    /// One threshold per category, in dataset order. `+inf` when undefined.
    pub thresholds: Vec<f64>,
    /// Smallest threshold, `+inf` for an empty dataset.
    pub minimum: f64,
}

impl fmt::Display for ThresholdReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "minimum thres: {}", self.minimum)?;
        let list: Vec<String> = self.thresholds.iter().map(ToString::to_string).collect();
        write!(f, "thresholds: [{}]", list.join(", "))
    }
}

/// Computes flutter thresholds for every category of a dataset.
#[derive(Debug)]
pub struct BetaThresholds<'a> {
    dataset: &'a Dataset,
    alpha: f64,
    gamma: f64,
}

impl<'a> BetaThresholds<'a> {
    /// Creates a new threshold estimation.
    #[must_use]
    pub fn new(dataset: &'a Dataset, alpha: f64, gamma: f64) -> Self {
        Self {
            dataset,
            alpha,
            gamma,
        }
    }

    /// Executes the estimation.
    ///
    /// With `n` samples, start width `ws = alpha·n`, branch length
    /// `l = gamma·max` and `wm = alpha·|{v < max/2}|`, the threshold is
    /// `(ws + ws·l / (2r) − wm) / (2σ)`. It is `+inf` when the sample is empty
    /// or constant, or when the central radius is zero.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> ThresholdReport {
        let total = self.dataset.total_branch_samples() as f64;
        let r = self.alpha * total / TAU;

        let thresholds: Vec<f64> = self
            .dataset
            .categories
            .iter()
            .map(|category| {
                let values = &category.values;
                let sd = stats::std_dev(values);
                let Some(max) = stats::max(values) else {
                    return f64::INFINITY;
                };
                if sd <= 0.0 || r <= 0.0 {
                    return f64::INFINITY;
                }
                let l = self.gamma * max;
                let ws = self.alpha * values.len() as f64;
                let (below, _) = stats::partition_below(values, max * 0.5);
                let wm = self.alpha * below.len() as f64;
                0.5 * (ws + (0.5 * ws * l / r) - wm) / sd
            })
            .collect();

        let minimum = thresholds.iter().copied().fold(f64::INFINITY, f64::min);
        tracing::debug!(categories = thresholds.len(), minimum, "beta thresholds computed");
        ThresholdReport {
            thresholds,
            minimum,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dataset::Category;

    const TOL: f64 = 1e-12;

    #[test]
    fn threshold_matches_formula() {
        let values = vec![1.0, 2.0, 3.0, 4.0];
        let dataset = Dataset::new(vec![Category::branch("a", values.clone()).unwrap()]);
        let (alpha, gamma) = (0.001, 0.4);
        let report = BetaThresholds::new(&dataset, alpha, gamma).execute();

        let r = alpha * 4.0 / TAU;
        let ws = alpha * 4.0;
        let l = gamma * 4.0;
        // Only 1.0 lies below max / 2 = 2.0.
        let wm = alpha;
        let expected = 0.5 * (ws + 0.5 * ws * l / r - wm) / stats::std_dev(&values);

        assert_eq!(report.thresholds.len(), 1);
        assert!((report.thresholds[0] - expected).abs() < TOL);
        assert!((report.minimum - expected).abs() < TOL);
    }

    #[test]
    fn constant_sample_and_central_node_are_unbounded() {
        let dataset = Dataset::new(vec![
            Category::central_node("hub"),
            Category::branch("flat", vec![2.0, 2.0]).unwrap(),
            Category::branch("wavy", vec![1.0, 9.0]).unwrap(),
        ]);
        let report = BetaThresholds::new(&dataset, 0.001, 0.4).execute();
        assert!(report.thresholds[0].is_infinite());
        assert!(report.thresholds[1].is_infinite());
        assert!(report.thresholds[2].is_finite());
        assert!((report.minimum - report.thresholds[2]).abs() < TOL);
    }

    #[test]
    fn zero_alpha_gives_no_threshold() {
        let dataset = Dataset::new(vec![Category::branch("a", vec![1.0, 5.0]).unwrap()]);
        let report = BetaThresholds::new(&dataset, 0.0, 0.4).execute();
        assert!(report.minimum.is_infinite());
    }

    #[test]
    fn report_display_lists_all_thresholds() {
        let report = ThresholdReport {
            thresholds: vec![1.5, f64::INFINITY],
            minimum: 1.5,
        };
        let text = report.to_string();
        assert!(text.starts_with("minimum thres: 1.5"));
        assert!(text.ends_with("thresholds: [1.5, inf]"));
    }
}
