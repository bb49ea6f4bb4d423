pub mod assembly;
pub mod config;
pub mod dataset;
pub mod diagnostic;
pub mod error;
pub mod geometry;
pub mod math;
pub mod tessellation;

pub use assembly::{AssembleDataset, GenerateMeshFile, MeshBundle};
pub use config::MeshConfig;
pub use dataset::{Category, CategoryKind, Dataset};
pub use error::{RadialMeshError, Result};
