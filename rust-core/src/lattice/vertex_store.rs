use serde::{Deserialize, Serialize};

use crate::error::{TilingError, TilingResult};

/// Append-only store of accepted lattice points.
///
/// Points are kept in one flat buffer of fixed stride D; the index of a
/// point is its position divided by D and never changes once assigned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexStore {
    dimension: usize,
    coordinates: Vec<i32>,
}

impl VertexStore {
    pub fn new(dimension: usize) -> Self {
        Self::with_capacity(dimension, 0)
    }

    pub fn with_capacity(dimension: usize, vertices: usize) -> Self {
        VertexStore {
            dimension,
            coordinates: Vec::with_capacity(vertices * dimension),
        }
    }

    /// Append a coordinate vector of length D and return its index.
    pub fn append(&mut self, point: &[i32]) -> TilingResult<usize> {
        if point.len() != self.dimension {
            return Err(TilingError::CoordinateLength {
                expected: self.dimension,
                actual: point.len(),
            });
        }
        let index = self.len();
        self.coordinates.extend_from_slice(point);
        Ok(index)
    }

    /// Coordinate vector stored at `index`.
    pub fn get(&self, index: usize) -> TilingResult<&[i32]> {
        if index >= self.len() {
            return Err(TilingError::IndexOutOfRange {
                index,
                count: self.len(),
            });
        }
        let start = index * self.dimension;
        Ok(&self.coordinates[start..start + self.dimension])
    }

    /// Number of stored vertices.
    pub fn len(&self) -> usize {
        self.coordinates.len() / self.dimension.max(1)
    }

    pub fn is_empty(&self) -> bool {
        self.coordinates.is_empty()
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of stored integers; always a multiple of D.
    pub fn element_count(&self) -> usize {
        self.coordinates.len()
    }

    /// The flat buffer, D integers per vertex.
    pub fn as_flat(&self) -> &[i32] {
        &self.coordinates
    }

    /// Vertices in index order.
    pub fn iter(&self) -> impl Iterator<Item = &[i32]> + '_ {
        self.coordinates.chunks_exact(self.dimension.max(1))
    }
}
