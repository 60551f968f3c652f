use serde::{Deserialize, Serialize};

use crate::error::TilingResult;
use crate::interfaces::ScanOrder;
use crate::lattice::{default_offset, GeneratorSpec};
use crate::tiling::enumerator::{EnumerationConfig, ViewExtent};
use crate::tiling::quasi_tiling::QuasiTiling;
use crate::tiling::reporter::{NullReporter, Reporter};

/// Everything a build needs: ambient dimension, generator star, offset and view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TilingConfig {
    pub dimension: usize,
    pub generators: GeneratorSpec,
    /// Acceptance-window offset γ; empty selects `default_offset(dimension)`
    #[serde(default)]
    pub offset: Vec<f64>,
    pub enumeration: EnumerationConfig,
}

impl Default for TilingConfig {
    fn default() -> Self {
        TilingConfig::penrose(ViewExtent::default())
    }
}

impl TilingConfig {
    /// D = 5 with the five-fold star.
    pub fn penrose(extent: ViewExtent) -> Self {
        TilingConfig::symmetric(5, 5, extent)
    }

    /// D = 4 with the eight-fold star.
    pub fn ammann_beenker(extent: ViewExtent) -> Self {
        TilingConfig::symmetric(4, 8, extent)
    }

    /// `dimension` unit vectors at angles 2πk/order, with the default offset.
    pub fn symmetric(dimension: usize, order: usize, extent: ViewExtent) -> Self {
        TilingConfig {
            dimension,
            generators: GeneratorSpec::Symmetric { order },
            offset: default_offset(dimension),
            enumeration: EnumerationConfig {
                extent,
                ..EnumerationConfig::default()
            },
        }
    }

    /// The offset a build will use.
    pub fn resolved_offset(&self) -> Vec<f64> {
        if self.offset.is_empty() {
            default_offset(self.dimension)
        } else {
            self.offset.clone()
        }
    }
}

/// Builder for constructing quasiperiodic tilings
#[derive(Debug, Clone, Default)]
pub struct TilingBuilder {
    dimension: Option<usize>,
    generators: Option<GeneratorSpec>,
    offset: Option<Vec<f64>>,
    enumeration: EnumerationConfig,
}

impl TilingBuilder {
    /// Create a new TilingBuilder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the ambient dimension
    pub fn with_dimension(mut self, dimension: usize) -> Self {
        self.dimension = Some(dimension);
        self
    }

    /// Use a symmetric star of the given order
    pub fn with_symmetry(mut self, order: usize) -> Self {
        self.generators = Some(GeneratorSpec::Symmetric { order });
        self
    }

    /// Set an explicit generator specification
    pub fn with_generators(mut self, generators: GeneratorSpec) -> Self {
        self.generators = Some(generators);
        self
    }

    /// Set the acceptance-window offset
    pub fn with_offset(mut self, offset: Vec<f64>) -> Self {
        self.offset = Some(offset);
        self
    }

    /// Set the requested view extent
    pub fn with_extent(mut self, width: f64, height: f64) -> Self {
        self.enumeration.extent = ViewExtent::new(width, height);
        self
    }

    /// Set the margin added around the view
    pub fn with_margin(mut self, margin: f64) -> Self {
        self.enumeration.margin = margin;
        self
    }

    pub fn with_scan_order(mut self, scan_order: ScanOrder) -> Self {
        self.enumeration.scan_order = scan_order;
        self
    }

    /// Resolve defaults: D = 5, the smallest star with D non-parallel axes, and the default offset
    pub fn config(&self) -> TilingConfig {
        let dimension = self.dimension.unwrap_or(5);
        TilingConfig {
            dimension,
            generators: self.generators.clone().unwrap_or(GeneratorSpec::Symmetric {
                order: natural_order(dimension),
            }),
            offset: self.offset.clone().unwrap_or_else(|| default_offset(dimension)),
            enumeration: self.enumeration,
        }
    }

    /// Build the tiling without a reporter
    pub fn build(self) -> TilingResult<QuasiTiling> {
        self.build_with(&mut NullReporter)
    }

    pub fn build_with<R: Reporter + ?Sized>(self, reporter: &mut R) -> TilingResult<QuasiTiling> {
        QuasiTiling::build(self.config(), reporter)
    }
}

// Odd D: 2πk/D already gives D directions modulo π. Even D needs twice the order.
fn natural_order(dimension: usize) -> usize {
    if dimension % 2 == 1 {
        dimension
    } else {
        2 * dimension
    }
}
