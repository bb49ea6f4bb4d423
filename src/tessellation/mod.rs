mod branch_curve;
mod resample;
mod tessellate_disk;
mod tessellate_ribbon;

pub use branch_curve::GenerateBranchCurve;
pub use resample::ResampleBranch;
pub use tessellate_disk::TessellateDisk;
pub use tessellate_ribbon::TessellateRibbon;

use crate::math::polygon_2d::is_counter_clockwise;
use crate::math::Point2;

/// Floats per vertex (`x, y, z`).
pub const FLOATS_PER_VERTEX: usize = 3;

/// Floats per triangle (3 vertices).
pub const FLOATS_PER_TRIANGLE: usize = 3 * FLOATS_PER_VERTEX;

/// A non-indexed triangle list in the XY plane, flattened to
/// `[x0, y0, 0, x1, y1, 0, x2, y2, 0, ...]`.
///
/// The length is always a multiple of [`FLOATS_PER_TRIANGLE`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatMesh {
    coords: Vec<f64>,
}

impl FlatMesh {
    /// Creates an empty mesh.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty mesh with room for `triangles` triangles.
    #[must_use]
    pub fn with_capacity(triangles: usize) -> Self {
        Self {
            coords: Vec::with_capacity(triangles * FLOATS_PER_TRIANGLE),
        }
    }

    /// Appends a triangle with its vertices in the given order.
    pub fn push_triangle(&mut self, a: &Point2, b: &Point2, c: &Point2) {
        for p in [a, b, c] {
            self.coords.extend_from_slice(&[p.x, p.y, 0.0]);
        }
    }

    /// Appends a triangle, reversing its vertices if `(a, b, c)` is not
    /// counter-clockwise.
    pub fn push_counter_clockwise(&mut self, a: &Point2, b: &Point2, c: &Point2) {
        if is_counter_clockwise(a, b, c) {
            self.push_triangle(a, b, c);
        } else {
            self.push_triangle(c, b, a);
        }
    }

    /// Appends every triangle of `other`.
    pub fn append(&mut self, other: &FlatMesh) {
        self.coords.extend_from_slice(&other.coords);
    }

    /// Number of triangles.
    #[must_use]
    pub fn triangle_count(&self) -> usize {
        self.coords.len() / FLOATS_PER_TRIANGLE
    }

    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.coords.is_empty()
    }

    /// The flattened coordinates.
    #[must_use]
    pub fn coords(&self) -> &[f64] {
        &self.coords
    }

    /// Consumes the mesh, returning the flattened coordinates.
    #[must_use]
    pub fn into_coords(self) -> Vec<f64> {
        self.coords
    }

    /// Iterates over the triangles as vertex triples.
    pub fn triangles(&self) -> impl Iterator<Item = [Point2; 3]> + '_ {
        self.coords.chunks_exact(FLOATS_PER_TRIANGLE).map(|t| {
            [
                Point2::new(t[0], t[1]),
                Point2::new(t[3], t[4]),
                Point2::new(t[6], t[7]),
            ]
        })
    }
}
