// Bookkeeping of the angular sectors tiles occupy around each vertex
//
// Every tile claims one sector at each of its four corners. In a valid
// tiling the sectors around a vertex never overlap and add up to at most
// a full turn (exactly a full turn away from the boundary of the patch).

use nalgebra::Vector2;
use std::f64::consts::TAU;

use crate::config::ANGLE_TOLERANCE;
use crate::error::{TilingError, TilingResult};
use crate::interfaces::AxisPair;
use crate::lattice::VertexStore;

#[derive(Debug, Clone, Copy)]
struct Sector {
    start: f64,
    width: f64,
    anchor: usize,
    pair: AxisPair,
}

/// Sectors claimed at every vertex of a store.
#[derive(Debug, Clone)]
pub struct CornerLedger {
    sectors: Vec<Vec<Sector>>,
}

impl CornerLedger {
    pub fn new(vertex_count: usize) -> Self {
        CornerLedger {
            sectors: vec![Vec::new(); vertex_count],
        }
    }

    /// Record the four corners of the tile anchored at `corners[0]` in family `pair`.
    ///
    /// `corners` are the vertex indices of x, x + e_low, x + e_low + e_high,
    /// x + e_high; `a` and `b` are the planar generators of the low and high axis.
    pub fn claim_tile(&mut self, corners: [usize; 4], a: Vector2<f64>, b: Vector2<f64>, pair: AxisPair) {
        let anchor = corners[0];
        let edges = [(a, b), (-a, b), (-a, -b), (a, -b)];
        for (&vertex, (u, w)) in corners.iter().zip(edges) {
            self.claim(vertex, u, w, anchor, pair);
        }
    }

    /// Total angle claimed at a vertex.
    pub fn coverage(&self, vertex: usize) -> f64 {
        self.sectors
            .get(vertex)
            .map(|sectors| sectors.iter().map(|sector| sector.width).sum())
            .unwrap_or(0.0)
    }

    /// Number of tiles with a corner at the vertex.
    pub fn claims(&self, vertex: usize) -> usize {
        self.sectors.get(vertex).map_or(0, Vec::len)
    }

    /// Fail on the first vertex whose sectors overlap or exceed a full turn.
    pub fn verify(&self, store: &VertexStore) -> TilingResult<()> {
        for (vertex, sectors) in self.sectors.iter().enumerate() {
            if sectors.len() < 2 {
                continue;
            }

            let total: f64 = sectors.iter().map(|sector| sector.width).sum();
            if total > TAU + ANGLE_TOLERANCE {
                return Err(violation(store, vertex, &format!("corner angles sum to {:.12}", total)));
            }

            let mut ordered = sectors.clone();
            ordered.sort_by(|lhs, rhs| lhs.start.total_cmp(&rhs.start));

            let wrapped = ordered[0];
            let next_starts = ordered.iter().skip(1).map(|s| s.start).chain(std::iter::once(wrapped.start + TAU));
            for (sector, next_start) in ordered.iter().zip(next_starts) {
                if sector.start + sector.width > next_start + ANGLE_TOLERANCE {
                    return Err(violation(
                        store,
                        vertex,
                        &format!(
                            "tile anchored at {} in family ({}, {}) overlaps a neighbouring corner",
                            sector.anchor,
                            sector.pair.low(),
                            sector.pair.high()
                        ),
                    ));
                }
            }
        }
        Ok(())
    }

    // Sector swept counter-clockwise between the two edge directions
    fn claim(&mut self, vertex: usize, u: Vector2<f64>, w: Vector2<f64>, anchor: usize, pair: AxisPair) {
        let (first, second) = if u.perp(&w) >= 0.0 { (u, w) } else { (w, u) };
        // rem_euclid may round up to TAU itself
        let start = first.y.atan2(first.x).rem_euclid(TAU);
        let start = if start >= TAU { 0.0 } else { start };
        let width = first.perp(&second).atan2(first.dot(&second));
        if let Some(sectors) = self.sectors.get_mut(vertex) {
            sectors.push(Sector {
                start,
                width,
                anchor,
                pair,
            });
        }
    }
}

fn violation(store: &VertexStore, vertex: usize, detail: &str) -> TilingError {
    let coordinates = store.get(vertex).map(<[i32]>::to_vec).unwrap_or_default();
    TilingError::ConsistencyViolation(format!(
        "vertex {} at {:?} is double-claimed: {}",
        vertex, coordinates, detail
    ))
}
