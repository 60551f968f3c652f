use log::debug;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

use crate::error::{TilingError, TilingResult};
use crate::interfaces::AxisPair;
use crate::lattice::{LatticeSpace, VertexStore};
use crate::tiling::corner_ledger::CornerLedger;

/// Anchor vertex indices of one tile family, in vertex-store order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TileList(Vec<usize>);

impl TileList {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[usize] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.0.iter().copied()
    }

    pub(crate) fn push(&mut self, anchor: usize) {
        self.0.push(anchor);
    }
}

/// Explicit mapping from axis pair to its tile list; iterates in pair-rank order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileFamilies {
    dimension: usize,
    families: BTreeMap<AxisPair, TileList>,
}

impl TileFamilies {
    pub fn new(dimension: usize) -> Self {
        TileFamilies {
            dimension,
            families: BTreeMap::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn get(&self, pair: AxisPair) -> Option<&TileList> {
        self.families.get(&pair)
    }

    /// Tile list of the family spanned by axes `g0` and `g1` (either order).
    pub fn tiles(&self, g0: usize, g1: usize) -> TilingResult<&TileList> {
        AxisPair::new(g0, g1)
            .and_then(|pair| self.families.get(&pair))
            .ok_or(TilingError::InvalidAxisPair {
                g0,
                g1,
                dimension: self.dimension,
            })
    }

    pub fn iter(&self) -> impl Iterator<Item = (AxisPair, &TileList)> + '_ {
        self.families.iter().map(|(pair, list)| (*pair, list))
    }

    pub fn pairs(&self) -> impl Iterator<Item = AxisPair> + '_ {
        self.families.keys().copied()
    }

    pub fn family_count(&self) -> usize {
        self.families.len()
    }

    /// Number of tiles over all families.
    pub fn tile_count(&self) -> usize {
        self.families.values().map(TileList::len).sum()
    }

    /// Every anchor must name a stored vertex.
    pub fn validate(&self, vertex_count: usize) -> TilingResult<()> {
        for (pair, list) in self.iter() {
            if let Some(anchor) = list.iter().find(|&anchor| anchor >= vertex_count) {
                return Err(TilingError::ConsistencyViolation(format!(
                    "family ({}, {}) references vertex {} but only {} vertices exist",
                    pair.low(),
                    pair.high(),
                    anchor,
                    vertex_count
                )));
            }
        }
        Ok(())
    }

    pub(crate) fn insert(&mut self, pair: AxisPair, list: TileList) {
        self.families.insert(pair, list);
    }
}

/// Derives tile families from the accepted points of a build.
///
/// Vertex x anchors a tile of family (g0, g1) iff x + e_g0, x + e_g1 and
/// x + e_g0 + e_g1 were accepted too.
pub struct TileAssembler<'a> {
    space: &'a LatticeSpace,
    store: &'a VertexStore,
}

impl<'a> TileAssembler<'a> {
    pub fn new(space: &'a LatticeSpace, store: &'a VertexStore) -> Self {
        TileAssembler { space, store }
    }

    pub fn assemble(&self) -> TilingResult<TileFamilies> {
        let index: HashMap<&[i32], usize> = self
            .store
            .iter()
            .enumerate()
            .map(|(vertex, point)| (point, vertex))
            .collect();
        if index.len() != self.store.len() {
            return Err(TilingError::ConsistencyViolation(format!(
                "{} stored vertices but only {} distinct coordinates",
                self.store.len(),
                index.len()
            )));
        }

        let mut families = TileFamilies::new(self.space.dimension());
        let mut ledger = CornerLedger::new(self.store.len());
        let mut scratch = vec![0; self.space.dimension()];

        for pair in self.space.admissible_pairs() {
            let a = self.space.planar_generator(pair.low());
            let b = self.space.planar_generator(pair.high());
            let mut list = TileList::default();

            for (anchor, point) in self.store.iter().enumerate() {
                if let Some(corners) = corner_indices(&index, anchor, point, pair, &mut scratch) {
                    list.push(anchor);
                    ledger.claim_tile(corners, a, b, pair);
                }
            }

            debug!("family ({}, {}): {} tiles", pair.low(), pair.high(), list.len());
            families.insert(pair, list);
        }

        families.validate(self.store.len())?;
        ledger.verify(self.store)?;
        Ok(families)
    }
}

// Indices of x, x + e_low, x + e_low + e_high, x + e_high, if all are stored
fn corner_indices(
    index: &HashMap<&[i32], usize>,
    anchor: usize,
    point: &[i32],
    pair: AxisPair,
    scratch: &mut [i32],
) -> Option<[usize; 4]> {
    scratch.copy_from_slice(point);
    scratch[pair.low()] += 1;
    let along_low = *index.get(&*scratch)?;
    scratch[pair.high()] += 1;
    let opposite = *index.get(&*scratch)?;
    scratch[pair.low()] -= 1;
    let along_high = *index.get(&*scratch)?;
    Some([anchor, along_low, opposite, along_high])
}
