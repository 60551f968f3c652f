// Definitions that are used throughout all modules

use serde::{Deserialize, Serialize};

/// Unordered pair of distinct lattice axes, stored with `low < high`.
///
/// A pair names one tile family: the rhombi spanned by the planar
/// generators of its two axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AxisPair {
    low: usize,
    high: usize,
}

impl AxisPair {
    /// Build a pair from two axes in either order. Returns `None` for `a == b`.
    pub fn new(a: usize, b: usize) -> Option<Self> {
        match a.cmp(&b) {
            std::cmp::Ordering::Less => Some(Self { low: a, high: b }),
            std::cmp::Ordering::Greater => Some(Self { low: b, high: a }),
            std::cmp::Ordering::Equal => None,
        }
    }

    pub fn low(&self) -> usize {
        self.low
    }

    pub fn high(&self) -> usize {
        self.high
    }

    /// Whether both axes exist in a lattice of the given dimension.
    pub fn fits(&self, dimension: usize) -> bool {
        self.high < dimension
    }

    /// Position of this pair in the lexicographic list of all pairs of
    /// `dimension` axes: (0,1), (0,2), ..., (0,D-1), (1,2), ...
    ///
    /// rank(i, j) = i(2D - i - 1)/2 + (j - i - 1)
    pub fn rank(&self, dimension: usize) -> usize {
        let (i, j) = (self.low, self.high);
        i * (2 * dimension - i - 1) / 2 + (j - i - 1)
    }

    /// Inverse of [`AxisPair::rank`].
    pub fn from_rank(rank: usize, dimension: usize) -> Option<Self> {
        let mut remaining = rank;
        for low in 0..dimension.saturating_sub(1) {
            let row = dimension - low - 1;
            if remaining < row {
                return Some(Self {
                    low,
                    high: low + 1 + remaining,
                });
            }
            remaining -= row;
        }
        None
    }

    /// All pairs of `dimension` axes in rank order.
    pub fn all(dimension: usize) -> impl Iterator<Item = AxisPair> {
        (0..dimension).flat_map(move |low| {
            (low + 1..dimension).map(move |high| AxisPair { low, high })
        })
    }
}

/// Number of unordered axis pairs, C(D, 2).
pub fn pair_count(dimension: usize) -> usize {
    dimension * dimension.saturating_sub(1) / 2
}

/// Direction in which each axis range is swept during enumeration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanOrder {
    #[default]
    Ascending,
    Descending,
}
