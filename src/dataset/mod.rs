use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use serde::Deserialize;

use crate::error::{DatasetError, Result};
use crate::math::stats;

/// Role of a category in the diagram.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CategoryKind {
    /// Drawn as a ribbon radiating from the central disk.
    Branch,
    /// Drawn as the central disk itself.
    CentralNode,
}

/// A named category of the input dataset.
///
/// Its position in the dataset is its integer identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub kind: CategoryKind,
    /// Ordered sample of the co-occurrence metric. Non-empty for branches.
    pub values: Vec<f64>,
}

impl Category {
    /// Creates a branch category.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::EmptyBranch` if `values` is empty.
    pub fn branch(name: impl Into<String>, values: Vec<f64>) -> Result<Self> {
        let name = name.into();
        if values.is_empty() {
            return Err(DatasetError::EmptyBranch { name }.into());
        }
        Ok(Self {
            name,
            kind: CategoryKind::Branch,
            values,
        })
    }

    /// Creates the central-node category.
    #[must_use]
    pub fn central_node(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: CategoryKind::CentralNode,
            values: Vec::new(),
        }
    }

    /// Returns `true` for branch categories.
    #[must_use]
    pub fn is_branch(&self) -> bool {
        self.kind == CategoryKind::Branch
    }

    /// Largest sample value, or `None` for an empty sample.
    #[must_use]
    pub fn max_value(&self) -> Option<f64> {
        stats::max(&self.values)
    }
}

/// Raw record as it appears in the input JSON.
#[derive(Debug, Deserialize)]
struct RawCategory {
    name: String,
    #[serde(rename = "type")]
    kind: String,
    values: Option<Vec<f64>>,
}

impl TryFrom<RawCategory> for Category {
    type Error = DatasetError;

    fn try_from(raw: RawCategory) -> std::result::Result<Self, Self::Error> {
        if raw.kind != "branch" {
            return Ok(Self {
                name: raw.name,
                kind: CategoryKind::CentralNode,
                values: raw.values.unwrap_or_default(),
            });
        }
        match raw.values {
            None => Err(DatasetError::MissingValues { name: raw.name }),
            Some(values) if values.is_empty() => Err(DatasetError::EmptyBranch { name: raw.name }),
            Some(values) => Ok(Self {
                name: raw.name,
                kind: CategoryKind::Branch,
                values,
            }),
        }
    }
}

/// The ordered list of categories a diagram is built from.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    pub categories: Vec<Category>,
}

impl Dataset {
    /// Creates a dataset from already validated categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    /// Parses a dataset from a JSON array of `{name, type, values}` objects.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed, a required key is missing,
    /// or a branch has no values.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: Vec<RawCategory> = serde_json::from_reader(reader).map_err(DatasetError::from)?;
        let categories = raw
            .into_iter()
            .map(Category::try_from)
            .collect::<std::result::Result<Vec<_>, _>>()?;
        tracing::debug!(categories = categories.len(), "dataset parsed");
        Ok(Self { categories })
    }

    /// Parses a dataset from a JSON string.
    ///
    /// # Errors
    ///
    /// See [`Dataset::from_reader`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        Self::from_reader(json.as_bytes())
    }

    /// Reads and parses a dataset file.
    ///
    /// # Errors
    ///
    /// Returns `DatasetError::Io` if the file cannot be opened, otherwise see
    /// [`Dataset::from_reader`].
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let file = File::open(path).map_err(DatasetError::from)?;
        Self::from_reader(BufReader::new(file))
    }

    /// Iterates over the branch categories together with their indices.
    pub fn branches(&self) -> impl Iterator<Item = (usize, &Category)> {
        self.categories.iter().enumerate().filter(|(_, c)| c.is_branch())
    }

    /// Total number of samples over all branch categories.
    #[must_use]
    pub fn total_branch_samples(&self) -> usize {
        self.branches().map(|(_, c)| c.values.len()).sum()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::RadialMeshError;

    #[test]
    fn parses_branches_and_central_node() {
        let json = r#"[
            {"name": "hub", "type": "node"},
            {"name": "a", "type": "branch", "values": [1, 2.5, 3]},
            {"name": "b", "type": "branch", "values": [4]}
        ]"#;
        let dataset = Dataset::from_json_str(json).unwrap();
        assert_eq!(dataset.categories.len(), 3);
        assert_eq!(dataset.categories[0].kind, CategoryKind::CentralNode);
        assert_eq!(dataset.categories[1].values, vec![1.0, 2.5, 3.0]);
        assert_eq!(dataset.total_branch_samples(), 4);
        let indices: Vec<usize> = dataset.branches().map(|(i, _)| i).collect();
        assert_eq!(indices, vec![1, 2]);
    }

    #[test]
    fn branch_without_values_fails() {
        let err = Dataset::from_json_str(r#"[{"name": "a", "type": "branch"}]"#).unwrap_err();
        assert!(matches!(
            err,
            RadialMeshError::Dataset(DatasetError::MissingValues { .. })
        ));
    }

    #[test]
    fn branch_with_empty_values_fails() {
        let err =
            Dataset::from_json_str(r#"[{"name": "a", "type": "branch", "values": []}]"#).unwrap_err();
        assert!(matches!(
            err,
            RadialMeshError::Dataset(DatasetError::EmptyBranch { .. })
        ));
    }

    #[test]
    fn missing_name_fails() {
        let err = Dataset::from_json_str(r#"[{"type": "branch", "values": [1]}]"#).unwrap_err();
        assert!(matches!(err, RadialMeshError::Dataset(DatasetError::Parse(_))));
    }

    #[test]
    fn malformed_json_fails() {
        assert!(Dataset::from_json_str("[{").is_err());
    }

    #[test]
    fn missing_file_fails() {
        let err = Dataset::from_path("/nonexistent/radial-mesh/input.json").unwrap_err();
        assert!(matches!(err, RadialMeshError::Dataset(DatasetError::Io(_))));
    }

    #[test]
    fn branch_constructor_rejects_empty() {
        assert!(Category::branch("x", Vec::new()).is_err());
        let c = Category::branch("x", vec![2.0, 5.0]).unwrap();
        assert_eq!(c.max_value(), Some(5.0));
    }
}
