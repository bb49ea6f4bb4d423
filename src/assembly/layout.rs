use std::f64::consts::TAU;

use crate::dataset::Dataset;
use crate::error::{DatasetError, Result};

/// Global placement of the diagram: central radius and the angle of every
/// branch.
///
/// Every sample owns the same angular unit `2π / N`, where `N` is the total
/// sample count over all branches, and the central circumference
/// `2π · r = alpha · N` gives each sample an arc of length `alpha`. A branch
/// is placed at the middle of its own proportional slot.
#[derive(Debug, Clone, PartialEq)]
pub struct RadialLayout {
    central_radius: f64,
    unit_angle: f64,
    angles: Vec<Option<f64>>,
}

impl RadialLayout {
    /// Computes the layout of `dataset` for branch width scale `alpha`.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::NoBranches` if the dataset has no branch
    /// samples.
    #[allow(clippy::cast_precision_loss)]
    pub fn new(dataset: &Dataset, alpha: f64) -> Result<Self> {
        let total = dataset.total_branch_samples();
        if total == 0 {
            return Err(DatasetError::NoBranches.into());
        }
        let total = total as f64;
        let central_radius = alpha * total / TAU;
        let unit_angle = TAU / total;

        let mut angle = 0.0;
        let mut prev_n = 0usize;
        let angles = dataset
            .categories
            .iter()
            .map(|category| {
                if !category.is_branch() {
                    return None;
                }
                let n = category.values.len();
                angle += (prev_n + n) as f64 * 0.5 * unit_angle;
                prev_n = n;
                Some(angle)
            })
            .collect();

        Ok(Self {
            central_radius,
            unit_angle,
            angles,
        })
    }

    /// Radius of the circle the branches start from.
    #[must_use]
    pub fn central_radius(&self) -> f64 {
        self.central_radius
    }

    /// Angle owned by a single sample.
    #[must_use]
    pub fn unit_angle(&self) -> f64 {
        self.unit_angle
    }

    /// Angle of the category at `index`, or `None` if it is not a branch.
    #[must_use]
    pub fn angle(&self, index: usize) -> Option<f64> {
        self.angles.get(index).copied().flatten()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::dataset::Category;
    use std::f64::consts::PI;

    const TOL: f64 = 1e-12;

    #[test]
    fn branches_take_proportional_slots() {
        let dataset = Dataset::new(vec![
            Category::branch("a", vec![1.0; 2]).unwrap(),
            Category::central_node("hub"),
            Category::branch("b", vec![1.0; 6]).unwrap(),
        ]);
        let layout = RadialLayout::new(&dataset, 0.5).unwrap();

        assert!((layout.central_radius() - 0.5 * 8.0 / TAU).abs() < TOL);
        assert!((layout.unit_angle() - TAU / 8.0).abs() < TOL);
        // a: (0 + 2) / 2 units, b: a + (2 + 6) / 2 units.
        assert!((layout.angle(0).unwrap() - 1.0 * TAU / 8.0).abs() < TOL);
        assert!(layout.angle(1).is_none());
        assert!((layout.angle(2).unwrap() - 5.0 * TAU / 8.0).abs() < TOL);
        assert!(layout.angle(3).is_none());
    }

    #[test]
    fn single_branch_points_left() {
        let dataset = Dataset::new(vec![Category::branch("a", vec![1.0, 2.0, 3.0, 4.0]).unwrap()]);
        let layout = RadialLayout::new(&dataset, 0.001).unwrap();
        assert!((layout.angle(0).unwrap() - PI).abs() < TOL);
    }

    #[test]
    fn no_branches_fails() {
        let dataset = Dataset::new(vec![Category::central_node("hub")]);
        assert!(RadialLayout::new(&dataset, 0.001).is_err());
    }
}
