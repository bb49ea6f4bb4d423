use std::fs;
use std::path::{Path, PathBuf};

use crate::config::MeshConfig;
use crate::dataset::Dataset;
use crate::error::Result;

use super::{AssembleDataset, MeshBundle};

/// Loads a dataset file, meshes it and writes the bundle to disk.
///
/// The bundle is fully built and serialized in memory before the output file
/// is created, so a failing run leaves no file behind.
#[derive(Debug)]
pub struct GenerateMeshFile {
    input: PathBuf,
    output: PathBuf,
    config: MeshConfig,
}

impl GenerateMeshFile {
    /// Creates a new mesh file generation.
    #[must_use]
    pub fn new(input: impl AsRef<Path>, output: impl AsRef<Path>, config: MeshConfig) -> Self {
        Self {
            input: input.as_ref().to_path_buf(),
            output: output.as_ref().to_path_buf(),
            config,
        }
    }

    /// Executes the generation, returning the bundle that was written.
    ///
    /// # Errors
    ///
    /// - any error of [`Dataset::from_path`] or [`AssembleDataset::execute`]
    /// - `RadialMeshError::Output` if serialization fails
    /// - `RadialMeshError::Write` if the output file cannot be written
    pub fn execute(&self) -> Result<MeshBundle> {
        let dataset = Dataset::from_path(&self.input)?;
        let bundle = AssembleDataset::new(&dataset, self.config).execute()?;

        let mut buf = Vec::new();
        bundle.write_json(&mut buf)?;
        fs::write(&self.output, buf)?;

        tracing::debug!(output = %self.output.display(), "mesh file written");
        Ok(bundle)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::{GeometryError, RadialMeshError};

    fn sample_path() -> PathBuf {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/sample_dataset.json")
    }

    #[test]
    fn writes_bundle_that_parses_back() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mesh.json");

        let bundle = GenerateMeshFile::new(sample_path(), &output, MeshConfig::default())
            .execute()
            .unwrap();

        let text = fs::read_to_string(&output).unwrap();
        assert!(text.starts_with("{\n    \"categoryToName\""));
        let back: MeshBundle = serde_json::from_str(&text).unwrap();
        assert_eq!(back.mesh_categories, bundle.mesh_categories);
        assert_eq!(back.meshes.len(), bundle.meshes.len());
    }

    #[test]
    fn curling_branch_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mesh.json");
        let config = MeshConfig {
            beta: 1.0,
            rep: 2,
            ..MeshConfig::default()
        };

        let err = GenerateMeshFile::new(sample_path(), &output, config)
            .execute()
            .unwrap_err();
        assert!(matches!(
            err,
            RadialMeshError::Branch {
                source: GeometryError::NonMonotonicRadius { .. },
                ..
            }
        ));
        assert!(!output.exists());
    }

    #[test]
    fn missing_input_leaves_no_file() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("mesh.json");

        let result =
            GenerateMeshFile::new(dir.path().join("absent.json"), &output, MeshConfig::default())
                .execute();
        assert!(matches!(result, Err(RadialMeshError::Dataset(_))));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_output_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let output = dir.path().join("no_such_dir").join("mesh.json");

        let result = GenerateMeshFile::new(sample_path(), &output, MeshConfig::default()).execute();
        assert!(matches!(result, Err(RadialMeshError::Write(_))));
    }
}
