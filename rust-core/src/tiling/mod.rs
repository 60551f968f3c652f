// Tiling module: enumeration, tile assembly, projection, and the build lifecycle
// This module turns a LatticeSpace into an immutable, queryable rhombus tiling

// ======================== MODULE DECLARATIONS ========================
pub mod builder;
pub mod corner_ledger;
pub mod enumerator;
pub mod projector;
pub mod quasi_tiling;
pub mod records;
pub mod reporter;
pub mod tile_assembler;
pub mod tiling_handle;

mod _tests_quasi_tiling;

// ======================== CONFIGURATION ========================
pub use builder::{
    TilingBuilder, // struct - fluent construction of a TilingConfig / QuasiTiling
    TilingConfig,  // struct - dimension, generators, offset, enumeration (serde)
};
// TilingConfig constructors:
//   penrose(extent: ViewExtent) -> Self                          - D = 5, five-fold star
//   ammann_beenker(extent: ViewExtent) -> Self                   - D = 4, eight-fold star
//   symmetric(dimension, order, extent) -> Self                  - D-axis star of the given order

// TilingBuilder impl methods:
//   new() -> Self                                                - create new builder
//   with_dimension / with_symmetry / with_generators / with_offset
//   with_extent(self, width, height) / with_margin / with_scan_order
//   config(&self) -> TilingConfig                                - resolve defaults
//   build(self) -> TilingResult<QuasiTiling>                     - build with no reporter
//   build_with(self, reporter: &mut R) -> TilingResult<QuasiTiling>

// ======================== ENUMERATION ========================
pub use enumerator::{
    candidate_bounds,  // fn(space, config) -> TilingResult<Vec<(i32, i32)>> - per-axis candidate ranges
    EnumerationConfig, // struct - extent, margin, scan order
    EnumerationStats,  // struct - visited / pruned / accepted counters
    Enumerator,        // struct - depth-first scan of the candidate box
    ViewExtent,        // struct - requested view size, centred on the origin
};

pub use reporter::{
    ChannelReporter,    // struct - forwards points over an mpsc channel
    CollectingReporter, // struct - keeps every reported point
    LogReporter,        // struct - logs every point at a fixed level
    NullReporter,       // struct - ignores points
    Reporter,           // trait - report_point(&mut self, space, point) -> Result<(), ReporterError>
};

// ======================== TILE ASSEMBLY ========================
pub use corner_ledger::CornerLedger; // struct - angular sectors claimed around each vertex
pub use tile_assembler::{
    TileAssembler, // struct - derives tile families from a VertexStore
    TileFamilies,  // struct - BTreeMap<AxisPair, TileList> in pair-rank order
    TileList,      // struct - anchor vertex indices of one family
};
// TileFamilies impl methods:
//   tiles(&self, g0, g1) -> TilingResult<&TileList>              - InvalidAxisPair for unknown pairs
//   get(&self, pair) -> Option<&TileList>
//   iter(&self) -> impl Iterator<Item = (AxisPair, &TileList)>
//   family_count / tile_count
//   validate(&self, vertex_count) -> TilingResult<()>            - every anchor in range

// ======================== PROJECTION ========================
pub use projector::Projector; // struct - planar geometry of vertices and tiles
// Projector impl methods:
//   vertex_position(&self, index) -> TilingResult<Vector2<f64>>
//   corners_of(&self, index, g0, g1) -> TilingResult<[Vector2<f64>; 4]>
//   centroid_of(&self, index, g0, g1) -> TilingResult<Vector2<f64>>
//   tile_geometry(&self, index, g0, g1) -> TilingResult<(Vector2<f64>, [Vector2<f64>; 4])>
//   project_all(&self) -> Vec<Vector2<f64>>
//   bounds(&self) -> Option<BoundingBox2D>

// ======================== BUILT TILINGS ========================
pub use quasi_tiling::{
    build_many,  // fn(configs: &[TilingConfig]) -> Vec<TilingResult<QuasiTiling>> - independent builds
    QuasiTiling, // struct - immutable Built state
};
pub use records::{FamilySummary, TileRecord, TilingSummary}; // serde read models for exporters
pub use tiling_handle::{
    TilingHandle, // struct - Uninitialized/Built slot with atomic publication
    TilingState,  // enum - Uninitialized | Built
};
