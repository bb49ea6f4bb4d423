pub mod interpolate;
pub mod polygon_2d;
pub mod stats;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// Length substituted for a zero-length segment when normalizing.
pub const DEGENERATE_LENGTH: f64 = 1e-10;
