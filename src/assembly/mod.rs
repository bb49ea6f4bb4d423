mod layout;
mod mesh_file;
mod output;

pub use layout::RadialLayout;
pub use mesh_file::GenerateMeshFile;
pub use output::{round_significant, MeshBundle, DECORATIVE_CATEGORY, OUTPUT_SIGNIFICANT_DIGITS};

use std::collections::BTreeMap;

use crate::config::MeshConfig;
use crate::dataset::{Category, CategoryKind, Dataset};
use crate::error::{DatasetError, RadialMeshError, Result};
use crate::geometry::BranchPoint;
use crate::tessellation::{
    FlatMesh, GenerateBranchCurve, ResampleBranch, TessellateDisk, TessellateRibbon,
};

/// Central node radius relative to the central radius of the layout.
const CENTRAL_NODE_SCALE: f64 = 1.5;

/// Unrounded result of assembling a dataset.
#[derive(Debug, Clone, Default)]
pub struct Assembly {
    pub category_to_name: BTreeMap<usize, String>,
    pub central_node_category: Option<usize>,
    /// Triangle count of the last branch meshed.
    pub triangles_per_branch: usize,
    pub mesh: FlatMesh,
    /// One label per triangle of `mesh`.
    pub labels: Vec<i64>,
}

impl Assembly {
    /// Rounds every coordinate and packs the result for serialization.
    #[must_use]
    pub fn into_bundle(self) -> MeshBundle {
        let meshes = self
            .mesh
            .into_coords()
            .into_iter()
            .map(|x| round_significant(x, OUTPUT_SIGNIFICANT_DIGITS))
            .collect();
        MeshBundle {
            category_to_name: self.category_to_name,
            central_node_category: self.central_node_category.unwrap_or(0),
            num_meshes_for_each_branch: self.triangles_per_branch,
            meshes,
            mesh_categories: self.labels,
        }
    }

    fn push(&mut self, mesh: &FlatMesh, label: i64) {
        self.mesh.append(mesh);
        self.labels
            .extend(std::iter::repeat_n(label, mesh.triangle_count()));
    }
}

/// Builds the whole radial diagram mesh from a dataset.
///
/// Branches are meshed in dataset order and placed by [`RadialLayout`]. The
/// central node, if any, is appended after all branches as a disk of
/// `1.5 · r`, followed by the decorative inner disk labeled
/// [`DECORATIVE_CATEGORY`] when `inner_circle_ratio > 0`.
#[derive(Debug)]
pub struct AssembleDataset<'a> {
    dataset: &'a Dataset,
    config: MeshConfig,
}

impl<'a> AssembleDataset<'a> {
    /// Creates a new assembly operation.
    #[must_use]
    pub fn new(dataset: &'a Dataset, config: MeshConfig) -> Self {
        Self { dataset, config }
    }

    /// Executes the assembly and rounds the result for output.
    ///
    /// # Errors
    ///
    /// See [`AssembleDataset::assemble`].
    pub fn execute(&self) -> Result<MeshBundle> {
        Ok(self.assemble()?.into_bundle())
    }

    /// Executes the assembly without rounding.
    ///
    /// # Errors
    ///
    /// - `ConfigError::InvalidParameter` if the configuration is invalid
    /// - `DatasetError::NoBranches` if there is nothing to lay out
    /// - `DatasetError::EmptyBranch` if a branch has no samples
    /// - `DatasetError::MultipleCentralNodes` if more than one category is
    ///   not a branch
    /// - `DatasetError::UnplacedBranch` if the layout has no slot for a branch
    /// - `RadialMeshError::Branch` if a branch curls back toward the center
    pub fn assemble(&self) -> Result<Assembly> {
        self.config.validate()?;
        let layout = RadialLayout::new(self.dataset, self.config.alpha)?;
        let r = layout.central_radius();

        let mut out = Assembly::default();
        for (idx, category) in self.dataset.categories.iter().enumerate() {
            out.category_to_name.insert(idx, category.name.clone());
            let label = i64::try_from(idx).unwrap_or(i64::MAX);

            match category.kind {
                CategoryKind::Branch => {
                    let angle = branch_angle(&layout, idx, category)?;
                    let mesh = self.mesh_branch(category, r, angle)?;
                    let count = mesh.triangle_count();
                    if out.triangles_per_branch != 0 && out.triangles_per_branch != count {
                        tracing::warn!(
                            branch = %category.name,
                            count,
                            previous = out.triangles_per_branch,
                            "branch triangle count differs from previous branch"
                        );
                    }
                    tracing::debug!(branch = %category.name, samples = category.values.len(), triangles = count, "branch meshed");
                    out.triangles_per_branch = count;
                    out.push(&mesh, label);
                }
                CategoryKind::CentralNode => {
                    if let Some(first) = out.central_node_category {
                        return Err(DatasetError::MultipleCentralNodes { first, second: idx }.into());
                    }
                    out.central_node_category = Some(idx);
                }
            }
        }

        if let Some(idx) = out.central_node_category {
            let radius = CENTRAL_NODE_SCALE * r;
            let disk = TessellateDisk::new(radius, self.config.central_node_div).execute();
            out.push(&disk, i64::try_from(idx).unwrap_or(i64::MAX));

            if self.config.inner_circle_ratio > 0.0 {
                let inner = TessellateDisk::new(
                    self.config.inner_circle_ratio * radius,
                    self.config.central_node_div,
                )
                .execute();
                out.push(&inner, DECORATIVE_CATEGORY);
            }
        }

        tracing::info!(
            categories = self.dataset.categories.len(),
            triangles = out.mesh.triangle_count(),
            central_radius = r,
            "dataset assembled"
        );
        Ok(out)
    }

    /// Runs subdivision, resampling and ribbon tessellation for one branch.
    #[allow(clippy::cast_precision_loss)]
    fn mesh_branch(&self, category: &Category, r: f64, angle: f64) -> Result<FlatMesh> {
        let MeshConfig {
            alpha,
            beta,
            gamma,
            rep,
            branch_div,
            ..
        } = self.config;

        let max = category.max_value().ok_or_else(|| DatasetError::EmptyBranch {
            name: category.name.clone(),
        })?;
        let n = category.values.len();

        let start = BranchPoint::polar(r, angle, alpha * n as f64, 0.0);
        let end = BranchPoint::polar(r + gamma * max, angle, alpha, max);

        let interior =
            GenerateBranchCurve::new(category.values.clone(), start, end, alpha, beta, rep).execute();
        let mut raw = Vec::with_capacity(interior.len() + 2);
        raw.push(start);
        raw.extend(interior);
        raw.push(end);

        let resampled = ResampleBranch::new(raw, branch_div)
            .execute()
            .map_err(|e| match e {
                RadialMeshError::Geometry(source) => RadialMeshError::Branch {
                    name: category.name.clone(),
                    source,
                },
                other => other,
            })?;
        Ok(TessellateRibbon::new(resampled).execute())
    }
}

/// Looks up the slot angle of the branch at `idx`.
fn branch_angle(layout: &RadialLayout, idx: usize, category: &Category) -> Result<f64> {
    layout.angle(idx).ok_or_else(|| {
        DatasetError::UnplacedBranch {
            name: category.name.clone(),
        }
        .into()
    })
}
