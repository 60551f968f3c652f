use nalgebra::Vector2;

use crate::error::{TilingError, TilingResult};
use crate::geometries::BoundingBox2D;
use crate::interfaces::AxisPair;
use crate::lattice::{LatticeSpace, VertexStore};

/// Maps stored vertices into the tiling plane.
///
/// Pure queries over one build's constants and vertices; nothing is cached.
#[derive(Debug, Clone, Copy)]
pub struct Projector<'a> {
    space: &'a LatticeSpace,
    store: &'a VertexStore,
}

impl<'a> Projector<'a> {
    pub fn new(space: &'a LatticeSpace, store: &'a VertexStore) -> Self {
        Projector { space, store }
    }

    /// Σ x[i] · sign[i] · projection[i] for the vertex at `index`.
    pub fn vertex_position(&self, index: usize) -> TilingResult<Vector2<f64>> {
        let point = self.store.get(index)?;
        Ok(self.space.project_unchecked(point))
    }

    /// Corners c0..c3 of the rhombus anchored at `index` with edges along
    /// axes `g0` then `g1`:
    ///
    /// c0 = position, c1 = c0 + s[g0]·p[g0], c2 = c1 + s[g1]·p[g1], c3 = c0 + s[g1]·p[g1]
    pub fn corners_of(&self, index: usize, g0: usize, g1: usize) -> TilingResult<[Vector2<f64>; 4]> {
        self.check_axes(g0, g1)?;
        let c0 = self.vertex_position(index)?;
        let a = self.space.planar_generator(g0);
        let b = self.space.planar_generator(g1);
        let c1 = c0 + a;
        Ok([c0, c1, c1 + b, c0 + b])
    }

    pub fn corners_of_pair(&self, index: usize, pair: AxisPair) -> TilingResult<[Vector2<f64>; 4]> {
        self.corners_of(index, pair.low(), pair.high())
    }

    /// Centre of the rhombus anchored at `index`; the mean of its four corners.
    pub fn centroid_of(&self, index: usize, g0: usize, g1: usize) -> TilingResult<Vector2<f64>> {
        self.check_axes(g0, g1)?;
        let c0 = self.vertex_position(index)?;
        let half_diagonal = (self.space.planar_generator(g0) + self.space.planar_generator(g1)) * 0.5;
        Ok(c0 + half_diagonal)
    }

    /// Centroid and corners together.
    pub fn tile_geometry(&self, index: usize, g0: usize, g1: usize) -> TilingResult<(Vector2<f64>, [Vector2<f64>; 4])> {
        let corners = self.corners_of(index, g0, g1)?;
        let centroid = corners.iter().fold(Vector2::<f64>::zeros(), |acc, c| acc + c) * 0.25;
        Ok((centroid, corners))
    }

    /// Planar positions of every stored vertex, in store order.
    pub fn project_all(&self) -> Vec<Vector2<f64>> {
        self.store
            .iter()
            .map(|point| self.space.project_unchecked(point))
            .collect()
    }

    /// Axis-aligned bounds of all vertex positions; `None` for an empty store.
    pub fn bounds(&self) -> Option<BoundingBox2D> {
        BoundingBox2D::from_points(self.project_all())
    }

    fn check_axes(&self, g0: usize, g1: usize) -> TilingResult<()> {
        let dimension = self.space.dimension();
        if g0 == g1 || g0 >= dimension || g1 >= dimension {
            return Err(TilingError::InvalidAxisPair { g0, g1, dimension });
        }
        Ok(())
    }
}
