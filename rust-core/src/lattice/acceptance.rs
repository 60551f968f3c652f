// Acceptance window of the cut-and-project construction, in multigrid form
//
// Grid space is the plane of points z; axis k contributes the family of
// parallel lines z·g_k + γ_k ∈ Z. Lattice point x is accepted iff its cell
//
//     R(x) = { z : x_k - 1 < z·g_k + γ_k <= x_k  for every axis k }
//
// has positive area. R(x) is non-empty exactly when the plane E + γ meets
// the unit cell x - [0,1)^D, i.e. when the internal-space image of x lies
// in the zonotope spanned by the internal images of the unit vectors.

use nalgebra::Vector2;

use crate::config::ACCEPTANCE_AREA_TOLERANCE;
use crate::error::TilingResult;
use crate::geometries::{clip_polygon_to_slab, parallelogram_from_slabs, polygon_area, projected_range};
use crate::lattice::lattice_space::LatticeSpace;

/// Membership test for lattice points, borrowing the lattice constants.
#[derive(Debug, Clone, Copy)]
pub struct AcceptanceWindow<'a> {
    space: &'a LatticeSpace,
}

impl<'a> AcceptanceWindow<'a> {
    pub fn new(space: &'a LatticeSpace) -> Self {
        AcceptanceWindow { space }
    }

    pub fn space(&self) -> &'a LatticeSpace {
        self.space
    }

    /// Range of z·g_axis covered by the slab of lattice value `value`.
    pub fn strip(&self, axis: usize, value: i32) -> (f64, f64) {
        let shift = self.space.offset()[axis];
        (f64::from(value) - 1.0 - shift, f64::from(value) - shift)
    }

    /// Intersection of the slabs of axes 0 and 1; the starting polygon of every cell.
    pub fn base_cell(&self, value_0: i32, value_1: i32) -> Vec<Vector2<f64>> {
        parallelogram_from_slabs(
            &self.space.planar_generator(0),
            self.strip(0, value_0),
            &self.space.planar_generator(1),
            self.strip(1, value_1),
        )
        .unwrap_or_default()
    }

    /// Clip a partial cell to the slab of one more axis.
    pub fn restrict(&self, polygon: &[Vector2<f64>], axis: usize, value: i32) -> Vec<Vector2<f64>> {
        let (lower, upper) = self.strip(axis, value);
        clip_polygon_to_slab(polygon, &self.space.planar_generator(axis), lower, upper)
    }

    /// The grid cell R(x) as a convex polygon (empty when x is rejected).
    pub fn cell(&self, point: &[i32]) -> TilingResult<Vec<Vector2<f64>>> {
        self.space.check_length(point)?;
        Ok(self.cell_unchecked(point))
    }

    pub fn cell_area(&self, point: &[i32]) -> TilingResult<f64> {
        Ok(polygon_area(&self.cell(point)?))
    }

    /// The acceptance test.
    pub fn accepts(&self, point: &[i32]) -> TilingResult<bool> {
        Ok(Self::is_open(&self.cell(point)?))
    }

    /// Whether a (partial) cell still has interior.
    pub fn is_open(polygon: &[Vector2<f64>]) -> bool {
        polygon_area(polygon) > ACCEPTANCE_AREA_TOLERANCE
    }

    /// z·g_axis + γ_axis
    pub fn grid_value(&self, z: &Vector2<f64>, axis: usize) -> f64 {
        z.dot(&self.space.planar_generator(axis)) + self.space.offset()[axis]
    }

    /// The lattice point whose cell contains the grid-space point `z`.
    pub fn lattice_point_at(&self, z: &Vector2<f64>) -> Vec<i32> {
        (0..self.space.dimension())
            .map(|axis| self.grid_value(z, axis).ceil() as i32)
            .collect()
    }

    /// Inclusive range of lattice values of `axis` whose slabs can meet the polygon.
    pub fn feasible_values(&self, polygon: &[Vector2<f64>], axis: usize) -> Option<(i32, i32)> {
        let (low, high) = projected_range(polygon, &self.space.planar_generator(axis))?;
        let shift = self.space.offset()[axis];
        Some(((low + shift).floor() as i32, (high + shift).ceil() as i32))
    }

    fn cell_unchecked(&self, point: &[i32]) -> Vec<Vector2<f64>> {
        let mut polygon = self.base_cell(point[0], point[1]);
        for (axis, &value) in point.iter().enumerate().skip(2) {
            if polygon.is_empty() {
                break;
            }
            polygon = self.restrict(&polygon, axis, value);
        }
        polygon
    }
}
