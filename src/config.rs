use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Deepest curve subdivision accepted. Point count doubles per level.
pub const MAX_RECURSION_DEPTH: u32 = 16;

/// Parameters of one mesh generation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MeshConfig {
    /// Scales branch width and the central radius.
    pub alpha: f64,
    /// Scales the flutter displacement.
    pub beta: f64,
    /// Scales branch length relative to the branch's largest value.
    pub gamma: f64,
    /// Curve subdivision depth before resampling.
    pub rep: u32,
    /// Radius of the decorative inner disk relative to the central node; `0` disables it.
    pub inner_circle_ratio: f64,
    /// Segments per resampled branch.
    pub branch_div: usize,
    /// Angular steps of the central-node and inner-disk fans.
    pub central_node_div: usize,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            alpha: 0.0008,
            beta: 0.25,
            gamma: 0.4,
            rep: 3,
            inner_circle_ratio: 0.8,
            branch_div: 100,
            central_node_div: 50,
        }
    }
}

impl MeshConfig {
    /// Checks every parameter against its admissible range.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidParameter` naming the first offending option.
    pub fn validate(&self) -> Result<()> {
        non_negative("alpha", self.alpha)?;
        non_negative("gamma", self.gamma)?;
        non_negative("inner_circle_ratio", self.inner_circle_ratio)?;
        if !self.beta.is_finite() {
            return Err(invalid("beta", "must be finite"));
        }
        if self.rep > MAX_RECURSION_DEPTH {
            return Err(invalid(
                "rep",
                format!("must not exceed {MAX_RECURSION_DEPTH}"),
            ));
        }
        if self.branch_div == 0 {
            return Err(invalid("branch_div", "must be at least 1"));
        }
        if self.central_node_div == 0 {
            return Err(invalid("central_node_div", "must be at least 1"));
        }
        Ok(())
    }
}

fn non_negative(name: &'static str, value: f64) -> Result<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(invalid(name, format!("must be finite and non-negative, got {value}")));
    }
    Ok(())
}

fn invalid(name: &'static str, reason: impl Into<String>) -> crate::RadialMeshError {
    ConfigError::InvalidParameter {
        name,
        reason: reason.into(),
    }
    .into()
}
