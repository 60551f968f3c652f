//! Error types for tiling construction and queries.

use thiserror::Error;

/// Error raised by a [`Reporter`](crate::tiling::Reporter) implementation.
pub type ReporterError = Box<dyn std::error::Error + Send + Sync>;

/// Errors that can occur while building or querying a tiling.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TilingError {
    /// The ambient dimension is outside the supported range.
    #[error("ambient dimension must be in [{min}, {max}], got {dimension}")]
    InvalidDimension {
        /// The requested dimension.
        dimension: usize,
        /// Smallest supported dimension.
        min: usize,
        /// Largest supported dimension.
        max: usize,
    },

    /// The generator specification cannot produce a valid star.
    #[error("invalid generator specification: {0}")]
    InvalidGenerator(String),

    /// The acceptance-window offset does not match the lattice.
    #[error("invalid offset: {0}")]
    InvalidOffset(String),

    /// The requested view extent or margin is unusable.
    #[error("invalid view extent: {0}")]
    InvalidExtent(String),

    /// A coordinate vector has the wrong number of components.
    #[error("coordinate vector has {actual} components, expected {expected}")]
    CoordinateLength {
        /// The ambient dimension.
        expected: usize,
        /// The length that was supplied.
        actual: usize,
    },

    /// The two axes do not name a tile family of this lattice.
    #[error("axes ({g0}, {g1}) do not form a tile family in dimension {dimension}")]
    InvalidAxisPair {
        /// First axis.
        g0: usize,
        /// Second axis.
        g1: usize,
        /// The ambient dimension.
        dimension: usize,
    },

    /// A query was made before a tiling was built.
    #[error("tiling has not been built")]
    NotBuilt,

    /// A vertex index beyond the current vertex count.
    #[error("vertex index {index} out of range (vertex count {count})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// Number of stored vertices.
        count: usize,
    },

    /// Assembled tiles contradict each other; the build is discarded.
    #[error("consistency violation: {0}")]
    ConsistencyViolation(String),

    /// The reporter rejected a point; the build is discarded.
    #[error("reporter failed")]
    Reporter(#[source] ReporterError),
}

/// Result alias used throughout the core.
pub type TilingResult<T> = std::result::Result<T, TilingError>;
