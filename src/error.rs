use thiserror::Error;

/// Top-level error type for the radial mesh generator.
#[derive(Debug, Error)]
pub enum RadialMeshError {
    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error("branch '{name}': {source}")]
    Branch {
        name: String,
        #[source]
        source: GeometryError,
    },

    #[error("failed to serialize mesh output: {0}")]
    Output(#[from] serde_json::Error),

    #[error("failed to write mesh output: {0}")]
    Write(#[from] std::io::Error),
}

/// Errors related to loading and validating the input dataset.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("branch category '{name}' has no `values` key")]
    MissingValues { name: String },

    #[error("branch category '{name}' has an empty `values` array")]
    EmptyBranch { name: String },

    #[error("dataset contains no branch categories")]
    NoBranches,

    #[error("branch category '{name}' has no angular slot in the layout")]
    UnplacedBranch { name: String },

    #[error("dataset has more than one central node (categories {first} and {second})")]
    MultipleCentralNodes { first: usize, second: usize },

    #[error("malformed dataset JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("failed to read dataset: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error(
        "radial distance decreases at point {index} ({current} after {previous}); \
         branch curls back toward the center"
    )]
    NonMonotonicRadius {
        index: usize,
        previous: f64,
        current: f64,
    },

    #[error("interpolation abscissae must be strictly increasing (index {index})")]
    NotStrictlyIncreasing { index: usize },

    #[error("at least {required} points are required, got {actual}")]
    InsufficientPoints { required: usize, actual: usize },

    #[error("resampling resolution must be at least 1 segment")]
    ZeroResolution,

    #[error("non-finite value in {0}")]
    NonFinite(&'static str),
}

/// Errors related to run configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },
}

/// Convenience type alias for results using [`RadialMeshError`].
pub type Result<T> = std::result::Result<T, RadialMeshError>;
