//! Lattice module: the projected lattice Z^D, its accepted points, and the acceptance window.
//!
//! Quick reference
//! - Constants: [`LatticeSpace`], built from a [`GeneratorSpec`] and an offset
//! - Storage: [`VertexStore`], stable indices over a flat stride-D buffer
//! - Acceptance: [`AcceptanceWindow`], the cut-and-project membership test in grid form

// ======================== MODULE DECLARATIONS ========================
pub mod acceptance;
pub mod lattice_space;
pub mod vertex_store;

mod _tests_lattice_space;
mod _tests_vertex_store;

// ======================== LATTICE CONSTANTS ========================
pub use lattice_space::{
    default_offset, // fn(dimension: usize) -> Vec<f64> - generic (non-singular) offset
    GeneratorSpec,  // enum - Symmetric { order } | Angles(..) | Vectors(..)
    LatticeSpace,   // struct - dimension, folded projection vectors, signs, offset
};
// LatticeSpace impl methods:
//   new(dimension, &GeneratorSpec, offset: &[f64]) -> TilingResult<Self> - validates and fixes constants
//   project(&self, coordinates: &[i32]) -> TilingResult<Vector2<f64>>    - Σ c_i · sign_i · projection_i
//   planar_generator(&self, axis) -> Vector2<f64>                         - sign · projection of one axis
//   projection_matrix(&self) -> Matrix2xX<f64>                            - folded projection vectors as columns
//   frame_operator(&self) -> Matrix2<f64>                                 - Σ g gᵀ
//   admissible_pairs(&self) -> Vec<AxisPair>                              - tile families in rank order
//   rhombus_angle(&self, pair) -> f64                                     - anchor-corner angle of a family

// ======================== VERTEX STORAGE ========================
pub use vertex_store::VertexStore; // struct - append-only store of accepted points
// VertexStore impl methods:
//   append(&mut self, point: &[i32]) -> TilingResult<usize> - stores a point, returns its index
//   get(&self, index) -> TilingResult<&[i32]>               - IndexOutOfRange past the end
//   len / element_count / as_flat / iter                    - read access

// ======================== ACCEPTANCE ========================
pub use acceptance::AcceptanceWindow; // struct - grid-cell membership test
// AcceptanceWindow impl methods:
//   accepts(&self, point: &[i32]) -> TilingResult<bool>          - positive-area grid cell
//   cell(&self, point: &[i32]) -> TilingResult<Vec<Vector2<f64>>> - the cell polygon in grid space
//   lattice_point_at(&self, z: &Vector2<f64>) -> Vec<i32>         - vertex whose cell contains z
