use crate::geometry::BranchPoint;
use crate::math::polygon_2d::unit_normal;
use crate::math::stats;

/// One pending subdivision: the chord between two arena points and the
/// samples that govern it.
struct Chord {
    start: usize,
    end: usize,
    values: Vec<f64>,
}

/// Subdivides the chord between two branch endpoints into a fluttering curve.
///
/// Every level splits each chord at a displaced midpoint. The displacement is
/// `beta · σ · n`, where `σ` is the population standard deviation of the
/// chord's samples and `n` the chord's left unit normal; its sign flips on
/// levels whose remaining depth is odd, which makes the curve alternate
/// sides. The samples are partitioned at the midpoint value, the lower part
/// going to the inner half and the rest to the outer half, and the midpoint
/// width shrinks by `alpha` per sample in the lower part.
///
/// Subdivision is breadth-first over an index-addressed arena, so the depth
/// only bounds memory, never the call stack. Depth `d` yields
/// `2^(d+1) − 1` interior points, ordered from start to end.
#[derive(Debug)]
pub struct GenerateBranchCurve {
    values: Vec<f64>,
    start: BranchPoint,
    end: BranchPoint,
    alpha: f64,
    beta: f64,
    depth: u32,
}

impl GenerateBranchCurve {
    /// Creates a new curve generation operation.
    #[must_use]
    pub fn new(
        values: Vec<f64>,
        start: BranchPoint,
        end: BranchPoint,
        alpha: f64,
        beta: f64,
        depth: u32,
    ) -> Self {
        Self {
            values,
            start,
            end,
            alpha,
            beta,
            depth,
        }
    }

    /// Number of interior points produced at subdivision `depth`, or `None`
    /// when that count does not fit in a `usize`.
    #[must_use]
    pub fn interior_point_count(depth: u32) -> Option<usize> {
        let levels = depth.checked_add(1)?;
        1usize.checked_shl(levels).map(|n| n - 1)
    }

    /// Executes the subdivision, returning the interior points only (the
    /// endpoints are not included).
    ///
    /// An endpoint without a value counts as value `0`.
    #[must_use]
    pub fn execute(&self) -> Vec<BranchPoint> {
        let mut arena = vec![self.start, self.end];
        let mut order = vec![0, 1];
        let mut chords = vec![Chord {
            start: 0,
            end: 1,
            values: self.values.clone(),
        }];

        for remaining in (0..=self.depth).rev() {
            let mut next_order = Vec::with_capacity(order.len() * 2 - 1);
            let mut next_chords = Vec::with_capacity(chords.len() * 2);

            for chord in chords {
                let (mid, lower, upper) =
                    self.split(&arena[chord.start], &arena[chord.end], &chord.values, remaining);
                let m = arena.len();
                arena.push(mid);

                next_order.push(chord.start);
                next_order.push(m);
                next_chords.push(Chord {
                    start: chord.start,
                    end: m,
                    values: lower,
                });
                next_chords.push(Chord {
                    start: m,
                    end: chord.end,
                    values: upper,
                });
            }
            next_order.push(1);

            tracing::trace!(remaining, points = next_order.len(), "subdivision level");
            order = next_order;
            chords = next_chords;
        }

        let points: Vec<BranchPoint> = order[1..order.len() - 1]
            .iter()
            .map(|&i| arena[i])
            .collect();

        let negative = points.iter().filter(|p| p.width < 0.0).count();
        if negative > 0 {
            tracing::warn!(negative, "branch curve has points with negative width");
        }
        points
    }

    /// Computes the displaced midpoint of `s → e` and partitions `values` at
    /// the midpoint value.
    #[allow(clippy::cast_precision_loss)]
    fn split(
        &self,
        s: &BranchPoint,
        e: &BranchPoint,
        values: &[f64],
        remaining: u32,
    ) -> (BranchPoint, Vec<f64>, Vec<f64>) {
        let sd = stats::std_dev(values);
        let mut u = unit_normal(&s.position(), &e.position()) * (self.beta * sd);
        if remaining % 2 == 1 {
            u = -u;
        }

        let pos = nalgebra::center(&s.position(), &e.position()) + u;
        let vm = (s.value.unwrap_or(0.0) + e.value.unwrap_or(0.0)) * 0.5;
        let (lower, upper) = stats::partition_below(values, vm);
        let wm = s.width - self.alpha * lower.len() as f64;

        let mid = BranchPoint::new(pos.x, pos.y, wm, vm);
        (mid, lower, upper)
    }
}
