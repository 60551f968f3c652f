//! Quasiperiodic tiling library
//!
//! This library generates two-dimensional rhombus tilings by projecting a
//! subset of the integer lattice Z^D onto a plane (de Bruijn's multigrid /
//! cut-and-project construction) and assembling the projected points into
//! tile families, one per pair of lattice axes.

pub mod config;
pub mod error;
pub mod geometries;
pub mod interfaces;
pub mod lattice;
pub mod tiling;

pub use error::{ReporterError, TilingError, TilingResult};
pub use interfaces::{AxisPair, ScanOrder};
pub use lattice::{default_offset, GeneratorSpec, LatticeSpace, VertexStore};
pub use tiling::{
    build_many, EnumerationConfig, Projector, QuasiTiling, Reporter, TileFamilies, TileList, TilingBuilder,
    TilingConfig, TilingHandle, TilingState, ViewExtent,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
