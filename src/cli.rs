//! Command line definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueHint};

use radial_mesh::MeshConfig;

/// Generate triangle meshes for radial branching diagrams
#[derive(Parser, Debug)]
#[command(name = "radial-mesh")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build the diagram mesh and write it as JSON
    Generate(GenerateArgs),

    /// Print per-category flutter thresholds to help choose beta
    BetaThresholds(ThresholdArgs),
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Input dataset JSON file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Output mesh JSON file
    #[arg(short, long, default_value = "mesh.json", value_hint = ValueHint::FilePath)]
    pub output: PathBuf,

    /// Branch width scale
    #[arg(short, long, default_value_t = 0.0008)]
    pub alpha: f64,

    /// Branch flutter scale
    #[arg(short, long, default_value_t = 0.25, allow_negative_numbers = true)]
    pub beta: f64,

    /// Branch length scale
    #[arg(short = 'c', long, default_value_t = 0.4)]
    pub gamma: f64,

    /// Curve subdivision depth
    #[arg(short, long, default_value_t = 3)]
    pub rep: u32,

    /// Inner disk radius relative to the central node (0 disables it)
    #[arg(long, visible_alias = "ir", default_value_t = 0.8)]
    pub inner_circle_ratio: f64,

    /// Resampled segments per branch
    #[arg(long, visible_alias = "bd", default_value_t = 100)]
    pub branch_div: usize,

    /// Angular steps of the central node disk
    #[arg(long, visible_alias = "nd", default_value_t = 50)]
    pub central_node_div: usize,
}

impl GenerateArgs {
    /// Collects the mesh parameters into a configuration record.
    #[must_use]
    pub fn config(&self) -> MeshConfig {
        MeshConfig {
            alpha: self.alpha,
            beta: self.beta,
            gamma: self.gamma,
            rep: self.rep,
            inner_circle_ratio: self.inner_circle_ratio,
            branch_div: self.branch_div,
            central_node_div: self.central_node_div,
        }
    }
}

#[derive(Args, Debug)]
pub struct ThresholdArgs {
    /// Input dataset JSON file
    #[arg(short, long, value_hint = ValueHint::FilePath)]
    pub input: PathBuf,

    /// Branch width scale
    #[arg(short, long, default_value_t = 0.0008)]
    pub alpha: f64,

    /// Branch length scale
    #[arg(short = 'c', long, default_value_t = 0.4)]
    pub gamma: f64,
}
