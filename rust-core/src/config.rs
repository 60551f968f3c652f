// Constants

// Dimension limits
pub const MIN_DIM: usize = 2; // A plane needs at least two axes
pub const MAX_DIM: usize = 12; // Upper bound on the ambient lattice dimension

// Tolerances
pub const GENERATOR_TOLERANCE: f64 = 1e-10; // For parallelism / zero-length checks on generators
pub const ACCEPTANCE_AREA_TOLERANCE: f64 = 1e-12; // Minimum area of an accepted grid cell
pub const ANGLE_TOLERANCE: f64 = 1e-9; // For corner sector bookkeeping
pub const PROJECTION_TOLERANCE: f64 = 1e-9; // For comparisons of projected points

// Enumeration defaults (tiling-plane units)
pub const DEFAULT_EXTENT: f64 = 10.0;
pub const DEFAULT_MARGIN: f64 = 1.0;
