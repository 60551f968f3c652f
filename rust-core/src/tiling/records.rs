// Flat, serialisable views of a built tiling for export collaborators

use serde::Serialize;

/// One tile as seen by an exporter.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TileRecord {
    /// Rank of the tile's axis pair
    pub family: usize,
    pub axes: [usize; 2],
    /// Vertex index of the anchor corner
    pub anchor: usize,
    pub centroid: [f64; 2],
    pub dimension: usize,
}

/// Tile count and rhombus shape of one family.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FamilySummary {
    pub rank: usize,
    pub axes: [usize; 2],
    pub tiles: usize,
    /// Interior angle at the anchor corner, in degrees
    pub angle_degrees: f64,
}

/// Headline numbers of a build.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TilingSummary {
    pub dimension: usize,
    pub vertex_count: usize,
    pub family_count: usize,
    pub tile_count: usize,
    /// [min_x, min_y, max_x, max_y] of the projected vertices
    pub bounds: Option<[f64; 4]>,
    pub families: Vec<FamilySummary>,
}
