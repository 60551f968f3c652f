use log::info;
use nalgebra::Vector2;

use crate::error::TilingResult;
use crate::interfaces::AxisPair;
use crate::lattice::{LatticeSpace, VertexStore};
use crate::tiling::builder::TilingConfig;
use crate::tiling::enumerator::{EnumerationStats, Enumerator};
use crate::tiling::projector::Projector;
use crate::tiling::records::{FamilySummary, TileRecord, TilingSummary};
use crate::tiling::reporter::{NullReporter, Reporter};
use crate::tiling::tile_assembler::{TileAssembler, TileFamilies, TileList};

/// A fully built tiling: lattice constants, accepted vertices and tile families.
///
/// Immutable once constructed; a different configuration means a new instance.
#[derive(Debug, Clone)]
pub struct QuasiTiling {
    config: TilingConfig,
    space: LatticeSpace,
    vertices: VertexStore,
    tiles: TileFamilies,
    stats: EnumerationStats,
}

impl QuasiTiling {
    /// Run the full pipeline: fix the lattice, enumerate accepted points
    /// (reporting each one), then assemble and check the tile families.
    pub fn build<R: Reporter + ?Sized>(config: TilingConfig, reporter: &mut R) -> TilingResult<Self> {
        let space = LatticeSpace::new(config.dimension, &config.generators, &config.resolved_offset())?;
        let enumerator = Enumerator::new(&space, &config.enumeration)?;

        let mut vertices = VertexStore::new(space.dimension());
        let stats = enumerator.run(&mut vertices, reporter)?;
        let tiles = TileAssembler::new(&space, &vertices).assemble()?;

        info!(
            "built D = {} tiling: {} vertices, {} tiles in {} families",
            space.dimension(),
            vertices.len(),
            tiles.tile_count(),
            tiles.family_count()
        );

        Ok(QuasiTiling {
            config,
            space,
            vertices,
            tiles,
            stats,
        })
    }

    pub fn config(&self) -> &TilingConfig {
        &self.config
    }

    pub fn space(&self) -> &LatticeSpace {
        &self.space
    }

    pub fn dimension(&self) -> usize {
        self.space.dimension()
    }

    pub fn vertices(&self) -> &VertexStore {
        &self.vertices
    }

    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    pub fn vertex(&self, index: usize) -> TilingResult<&[i32]> {
        self.vertices.get(index)
    }

    pub fn families(&self) -> &TileFamilies {
        &self.tiles
    }

    pub fn tile_list(&self, g0: usize, g1: usize) -> TilingResult<&TileList> {
        self.tiles.tiles(g0, g1)
    }

    pub fn stats(&self) -> EnumerationStats {
        self.stats
    }

    pub fn projector(&self) -> Projector<'_> {
        Projector::new(&self.space, &self.vertices)
    }

    /// One record per tile, families in rank order, anchors in store order.
    pub fn tile_records(&self) -> TilingResult<Vec<TileRecord>> {
        let projector = self.projector();
        let dimension = self.dimension();
        let mut records = Vec::with_capacity(self.tiles.tile_count());
        for (pair, list) in self.tiles.iter() {
            for anchor in list.iter() {
                let centroid = projector.centroid_of(anchor, pair.low(), pair.high())?;
                records.push(TileRecord {
                    family: pair.rank(dimension),
                    axes: [pair.low(), pair.high()],
                    anchor,
                    centroid: [centroid.x, centroid.y],
                    dimension,
                });
            }
        }
        Ok(records)
    }

    pub fn summary(&self) -> TilingSummary {
        let dimension = self.dimension();
        let bounds = self
            .projector()
            .bounds()
            .map(|bounds| [bounds.min.x, bounds.min.y, bounds.max.x, bounds.max.y]);
        let families = self
            .tiles
            .iter()
            .map(|(pair, list)| FamilySummary {
                rank: pair.rank(dimension),
                axes: [pair.low(), pair.high()],
                tiles: list.len(),
                angle_degrees: self.space.rhombus_angle(pair).to_degrees(),
            })
            .collect();

        TilingSummary {
            dimension,
            vertex_count: self.vertex_count(),
            family_count: self.tiles.family_count(),
            tile_count: self.tiles.tile_count(),
            bounds,
            families,
        }
    }

    /// Planar position of a vertex.
    pub fn position(&self, index: usize) -> TilingResult<Vector2<f64>> {
        self.projector().vertex_position(index)
    }

    /// Corners of the tile of family `pair` anchored at `index`.
    pub fn tile_corners(&self, index: usize, pair: AxisPair) -> TilingResult<[Vector2<f64>; 4]> {
        self.projector().corners_of_pair(index, pair)
    }
}

/// Build independent tilings, one per configuration, in input order.
///
/// Builds share nothing; with the `parallel` feature they run on the rayon pool.
pub fn build_many(configs: &[TilingConfig]) -> Vec<TilingResult<QuasiTiling>> {
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        configs
            .par_iter()
            .map(|config| QuasiTiling::build(config.clone(), &mut NullReporter))
            .collect()
    }

    #[cfg(not(feature = "parallel"))]
    {
        configs
            .iter()
            .map(|config| QuasiTiling::build(config.clone(), &mut NullReporter))
            .collect()
    }
}
