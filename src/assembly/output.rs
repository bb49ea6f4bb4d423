use std::collections::BTreeMap;
use std::io::Write;

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Significant digits kept for every emitted coordinate.
pub const OUTPUT_SIGNIFICANT_DIGITS: usize = 5;

/// Category label of the decorative inner disk, which has no source category.
pub const DECORATIVE_CATEGORY: i64 = -1;

/// The serialized result of a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MeshBundle {
    /// Category index to name, keyed by dataset position.
    pub category_to_name: BTreeMap<usize, String>,
    /// Index of the central-node category (0 when there is none).
    pub central_node_category: usize,
    /// Triangle count of the last branch meshed.
    pub num_meshes_for_each_branch: usize,
    /// Flat triangle list, 9 floats per triangle.
    pub meshes: Vec<f64>,
    /// One category label per triangle.
    pub mesh_categories: Vec<i64>,
}

impl MeshBundle {
    /// Writes the bundle as JSON indented by 4 spaces.
    ///
    /// # Errors
    ///
    /// Returns `RadialMeshError::Output` if serialization or the write fails.
    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(writer, formatter);
        self.serialize(&mut serializer)?;
        Ok(())
    }

    /// Returns the bundle as a JSON string indented by 4 spaces.
    ///
    /// # Errors
    ///
    /// See [`MeshBundle::write_json`].
    pub fn to_json_string(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.write_json(&mut buf)?;
        Ok(String::from_utf8_lossy(&buf).into_owned())
    }
}

/// Rounds `x` to `digits` significant decimal digits.
///
/// Zero, non-finite values and `digits == 0` are returned unchanged.
#[must_use]
pub fn round_significant(x: f64, digits: usize) -> f64 {
    if x == 0.0 || !x.is_finite() || digits == 0 {
        return x;
    }
    format!("{:.*e}", digits - 1, x).parse().unwrap_or(x)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[test]
    fn rounds_to_five_significant_digits() {
        assert_eq!(round_significant(1.234_567, 5), 1.2346);
        assert_eq!(round_significant(-0.000_123_456_7, 5), -0.000_123_46);
        assert_eq!(round_significant(98_765.43, 5), 98_765.0);
        assert_eq!(round_significant(123_456_789.0, 5), 123_460_000.0);
    }

    #[test]
    fn rounding_passes_special_values_through() {
        assert_eq!(round_significant(0.0, 5), 0.0);
        assert!(round_significant(f64::NAN, 5).is_nan());
        assert_eq!(round_significant(f64::INFINITY, 5), f64::INFINITY);
        assert_eq!(round_significant(1.234_56, 0), 1.234_56);
    }

    #[test]
    fn rounding_is_idempotent() {
        let once = round_significant(0.637_619_772_3, 5);
        assert_eq!(round_significant(once, 5), once);
    }

    #[test]
    fn json_uses_camel_case_keys_in_index_order() {
        let bundle = MeshBundle {
            category_to_name: (0..11).map(|i| (i, format!("c{i}"))).collect(),
            central_node_category: 3,
            num_meshes_for_each_branch: 200,
            meshes: vec![0.0; 9],
            mesh_categories: vec![-1],
        };
        let json = bundle.to_json_string().unwrap();
        assert!(json.contains("\"categoryToName\""));
        assert!(json.contains("\"centralNodeCategory\": 3"));
        assert!(json.contains("\"numMeshesForEachBranch\": 200"));
        assert!(json.contains("\"meshCategories\""));
        assert!(json.contains("\n    \"meshes\""));
        let pos2 = json.find("\"2\"").unwrap();
        let pos10 = json.find("\"10\"").unwrap();
        assert!(pos2 < pos10);

        let back: MeshBundle = serde_json::from_str(&json).unwrap();
        assert_eq!(back, bundle);
    }
}
