mod branch_point;

pub use branch_point::BranchPoint;
