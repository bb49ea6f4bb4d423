use crate::geometry::BranchPoint;
use crate::math::polygon_2d::unit_normal;
use crate::math::{Point2, Vector2};

use super::FlatMesh;

/// Generates a variable-width ribbon along an ordered branch polyline.
///
/// Each segment `s → e` becomes a quad whose corners are offset by half the
/// local width along a per-point normal: at `s` the normal of the segment
/// back to the previous point (or to the origin for the first point), at `e`
/// the normal of `e → s`. Adjacent quads therefore do not share corners
/// exactly.
///
/// Each quad is split into two triangles, and each triangle is oriented
/// counter-clockwise on its own, since the normals may rotate enough between
/// segments to flip a single quad.
#[derive(Debug)]
pub struct TessellateRibbon {
    points: Vec<BranchPoint>,
}

impl TessellateRibbon {
    /// Creates a new ribbon tessellation operation.
    #[must_use]
    pub fn new(points: Vec<BranchPoint>) -> Self {
        Self { points }
    }

    /// Executes the tessellation.
    ///
    /// Produces two triangles per segment; fewer than 2 points give an empty
    /// mesh.
    #[must_use]
    pub fn execute(&self) -> FlatMesh {
        let n = self.points.len();
        if n < 2 {
            return FlatMesh::new();
        }

        let mut mesh = FlatMesh::with_capacity(2 * (n - 1));
        let mut normal_s = unit_normal(&self.points[0].position(), &Point2::origin());

        for i in 0..n - 1 {
            let s = &self.points[i];
            let e = &self.points[i + 1];
            if i > 0 {
                normal_s = unit_normal(&s.position(), &self.points[i - 1].position());
            }
            let normal_e = unit_normal(&e.position(), &s.position());

            let (p1, p2) = offset_pair(s, &normal_s);
            let (p4, p3) = offset_pair(e, &normal_e);

            mesh.push_counter_clockwise(&p1, &p2, &p3);
            mesh.push_counter_clockwise(&p3, &p4, &p1);
        }

        mesh
    }
}

/// Returns `(p + w/2·n, p − w/2·n)`.
fn offset_pair(p: &BranchPoint, normal: &Vector2) -> (Point2, Point2) {
    let off = normal * (0.5 * p.width);
    let pos = p.position();
    (pos + off, pos - off)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::signed_area_x2;
    use crate::tessellation::FLOATS_PER_TRIANGLE;

    const TOL: f64 = 1e-12;

    fn radial(n: usize, width: f64) -> Vec<BranchPoint> {
        (0..n)
            .map(|i| {
                let r = 1.0 + 0.5 * f64::from(u32::try_from(i).unwrap_or(0));
                BranchPoint::resampled(r, r, width)
            })
            .collect()
    }

    #[test]
    fn two_triangles_per_segment() {
        let mesh = TessellateRibbon::new(radial(11, 0.1)).execute();
        assert_eq!(mesh.triangle_count(), 20);
        assert_eq!(mesh.coords().len(), 20 * FLOATS_PER_TRIANGLE);
    }

    #[test]
    fn too_few_points_give_empty_mesh() {
        assert!(TessellateRibbon::new(Vec::new()).execute().is_empty());
        assert!(TessellateRibbon::new(radial(1, 0.1)).execute().is_empty());
    }

    #[test]
    fn all_triangles_counter_clockwise() {
        // A wiggly branch whose normals rotate between segments.
        let points: Vec<BranchPoint> = (0..40)
            .map(|i| {
                let t = f64::from(i) * 0.1;
                BranchPoint::resampled(1.0 + t, 0.3 * (3.0 * t).sin(), 0.2 - 0.004 * f64::from(i))
            })
            .collect();
        let mesh = TessellateRibbon::new(points).execute();
        for [a, b, c] in mesh.triangles() {
            assert!(signed_area_x2(&a, &b, &c) >= 0.0);
        }
    }

    #[test]
    fn quad_corners_lie_at_half_width() {
        let points = vec![
            BranchPoint::resampled(1.0, 0.0, 0.2),
            BranchPoint::resampled(2.0, 0.0, 0.1),
        ];
        let mesh = TessellateRibbon::new(points).execute();
        let mut ys: Vec<f64> = mesh.triangles().flatten().map(|p| p.y.abs()).collect();
        ys.sort_by(f64::total_cmp);
        ys.dedup_by(|a, b| (*a - *b).abs() < TOL);
        assert_eq!(ys.len(), 2);
        assert!((ys[0] - 0.05).abs() < TOL);
        assert!((ys[1] - 0.1).abs() < TOL);
    }

    #[test]
    fn spans_both_sides_of_the_axis() {
        let mesh = TessellateRibbon::new(radial(3, 0.4)).execute();
        let signed: Vec<f64> = mesh.triangles().flatten().map(|p| p.y - p.x).collect();
        assert!(signed.iter().any(|&d| d > 0.1));
        assert!(signed.iter().any(|&d| d < -0.1));
    }
}
