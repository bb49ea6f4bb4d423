use std::f64::consts::TAU;

use crate::math::Point2;

use super::FlatMesh;

/// Generates a triangle fan approximating a disk centered at the origin.
///
/// The fan has `divisions + 1` triangles `(origin, previous, current)` walking
/// the boundary counter-clockwise from angle 0 to 2π. The first "previous"
/// point is the origin itself, so the first triangle has zero area.
#[derive(Debug)]
pub struct TessellateDisk {
    radius: f64,
    divisions: usize,
}

impl TessellateDisk {
    /// Creates a new disk tessellation operation.
    #[must_use]
    pub fn new(radius: f64, divisions: usize) -> Self {
        Self { radius, divisions }
    }

    /// Executes the tessellation. Zero divisions give an empty mesh.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn execute(&self) -> FlatMesh {
        if self.divisions == 0 {
            return FlatMesh::new();
        }
        let step = TAU / self.divisions as f64;
        let origin = Point2::origin();

        let mut mesh = FlatMesh::with_capacity(self.divisions + 1);
        let mut prev = origin;
        for i in 0..=self.divisions {
            let angle = step * i as f64;
            let cur = Point2::new(self.radius * angle.cos(), self.radius * angle.sin());
            mesh.push_triangle(&origin, &prev, &cur);
            prev = cur;
        }
        mesh
    }
}
