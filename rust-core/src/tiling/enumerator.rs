// Enumeration of accepted lattice points over a bounded region
//
// The scan is a depth-first sweep over axes 0..D: each axis value narrows
// the partial grid cell by one more slab, and a prefix is abandoned as soon
// as that partial cell has no interior. Leaves that survive are exactly the
// accepted points of the candidate box, visited in lexicographic order (or
// reverse lexicographic for `ScanOrder::Descending`).

use log::debug;
use nalgebra::Vector2;
use serde::{Deserialize, Serialize};

use crate::config::{DEFAULT_EXTENT, DEFAULT_MARGIN};
use crate::error::{TilingError, TilingResult};
use crate::geometries::BoundingBox2D;
use crate::interfaces::ScanOrder;
use crate::lattice::{AcceptanceWindow, LatticeSpace, VertexStore};
use crate::tiling::reporter::Reporter;

/// Requested view, in tiling-plane units, centred on the origin.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewExtent {
    pub width: f64,
    pub height: f64,
}

impl ViewExtent {
    pub fn new(width: f64, height: f64) -> Self {
        ViewExtent { width, height }
    }

    pub fn square(size: f64) -> Self {
        ViewExtent::new(size, size)
    }

    pub fn bounds(&self) -> BoundingBox2D {
        BoundingBox2D::centered(self.width, self.height)
    }
}

impl Default for ViewExtent {
    fn default() -> Self {
        ViewExtent::square(DEFAULT_EXTENT)
    }
}

/// Region-sizing policy and scan order of a build.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnumerationConfig {
    pub extent: ViewExtent,
    /// Extra tiling-plane distance added around the view
    pub margin: f64,
    pub scan_order: ScanOrder,
}

impl Default for EnumerationConfig {
    fn default() -> Self {
        EnumerationConfig {
            extent: ViewExtent::default(),
            margin: DEFAULT_MARGIN,
            scan_order: ScanOrder::default(),
        }
    }
}

impl EnumerationConfig {
    pub fn validate(&self) -> TilingResult<()> {
        let ViewExtent { width, height } = self.extent;
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(TilingError::InvalidExtent(format!(
                "width and height must be positive and finite, got {} x {}",
                width, height
            )));
        }
        if !(self.margin.is_finite() && self.margin >= 0.0) {
            return Err(TilingError::InvalidExtent(format!(
                "margin must be non-negative and finite, got {}",
                self.margin
            )));
        }
        Ok(())
    }
}

/// Counters of one enumeration pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnumerationStats {
    /// Prefixes (partial and complete points) examined
    pub visited: usize,
    /// Prefixes abandoned because their partial cell was empty
    pub pruned: usize,
    pub accepted: usize,
}

/// Walks the candidate box of a view and collects accepted points.
pub struct Enumerator<'a> {
    space: &'a LatticeSpace,
    window: AcceptanceWindow<'a>,
    config: EnumerationConfig,
    bounds: Vec<(i32, i32)>,
}

impl<'a> Enumerator<'a> {
    pub fn new(space: &'a LatticeSpace, config: &EnumerationConfig) -> TilingResult<Self> {
        config.validate()?;
        let bounds = candidate_bounds(space, config)?;
        Ok(Enumerator {
            space,
            window: AcceptanceWindow::new(space),
            config: *config,
            bounds,
        })
    }

    /// Inclusive candidate range of every axis.
    pub fn candidate_bounds(&self) -> &[(i32, i32)] {
        &self.bounds
    }

    /// Append every accepted point to `store`, reporting each right after it is stored.
    pub fn run<R: Reporter + ?Sized>(&self, store: &mut VertexStore, reporter: &mut R) -> TilingResult<EnumerationStats> {
        let mut scan = Scan {
            enumerator: self,
            store,
            reporter,
            point: vec![0; self.space.dimension()],
            stats: EnumerationStats::default(),
        };
        scan.sweep_first_axes()?;

        let stats = scan.stats;
        debug!(
            "enumeration over {:?}: visited {}, pruned {}, accepted {}",
            self.bounds, stats.visited, stats.pruned, stats.accepted
        );
        Ok(stats)
    }

    fn ordered(&self, range: (i32, i32)) -> Vec<i32> {
        let values = range.0..=range.1;
        match self.config.scan_order {
            ScanOrder::Ascending => values.collect(),
            ScanOrder::Descending => values.rev().collect(),
        }
    }
}

struct Scan<'e, 'a, R: ?Sized> {
    enumerator: &'e Enumerator<'a>,
    store: &'e mut VertexStore,
    reporter: &'e mut R,
    point: Vec<i32>,
    stats: EnumerationStats,
}

impl<'e, 'a, R: Reporter + ?Sized> Scan<'e, 'a, R> {
    // Axes 0 and 1 always intersect in a parallelogram, so no pruning yet
    fn sweep_first_axes(&mut self) -> TilingResult<()> {
        let enumerator = self.enumerator;
        for value_0 in enumerator.ordered(enumerator.bounds[0]) {
            self.point[0] = value_0;
            self.stats.visited += 1;
            for value_1 in enumerator.ordered(enumerator.bounds[1]) {
                self.point[1] = value_1;
                let cell = enumerator.window.base_cell(value_0, value_1);
                self.descend(2, cell)?;
            }
        }
        Ok(())
    }

    fn descend(&mut self, axis: usize, cell: Vec<Vector2<f64>>) -> TilingResult<()> {
        self.stats.visited += 1;
        if !AcceptanceWindow::is_open(&cell) {
            self.stats.pruned += 1;
            return Ok(());
        }
        if axis == self.point.len() {
            return self.accept();
        }

        let enumerator = self.enumerator;
        let Some((low, high)) = enumerator.window.feasible_values(&cell, axis) else {
            return Ok(());
        };
        let (box_low, box_high) = enumerator.bounds[axis];
        let range = (low.max(box_low), high.min(box_high));
        if range.0 > range.1 {
            self.stats.pruned += 1;
            return Ok(());
        }

        for value in enumerator.ordered(range) {
            self.point[axis] = value;
            let narrowed = enumerator.window.restrict(&cell, axis, value);
            self.descend(axis + 1, narrowed)?;
        }
        Ok(())
    }

    fn accept(&mut self) -> TilingResult<()> {
        let space = self.enumerator.space;
        debug_assert!(matches!(self.enumerator.window.accepts(&self.point), Ok(true)));

        self.store.append(&self.point)?;
        self.stats.accepted += 1;
        self.reporter
            .report_point(space, &self.point)
            .map_err(TilingError::Reporter)
    }
}

/// Per-axis candidate ranges covering every accepted point whose projection
/// falls inside the view grown by `margin`.
///
/// A vertex x with grid cell containing z projects to S z + Σ (γ_k + θ_k) g_k
/// with θ_k ∈ [0, 1), S = Σ g_k g_kᵀ. Growing the view by Σ |g_k| (|γ_k| + 1)
/// and mapping it through S⁻¹ therefore bounds the grid points involved.
pub fn candidate_bounds(space: &LatticeSpace, config: &EnumerationConfig) -> TilingResult<Vec<(i32, i32)>> {
    let drift: f64 = space
        .planar_generators()
        .iter()
        .zip(space.offset())
        .map(|(g, shift)| g.norm() * (shift.abs() + 1.0))
        .sum();
    let view = config.extent.bounds().expand(config.margin + drift);

    let inverse_frame = space.frame_operator().try_inverse().ok_or_else(|| {
        TilingError::InvalidGenerator("planar generators do not span the plane".to_string())
    })?;
    let grid_corners: Vec<Vector2<f64>> = view.corners().iter().map(|corner| inverse_frame * corner).collect();

    let window = AcceptanceWindow::new(space);
    let bounds = (0..space.dimension())
        .map(|axis| {
            let values = grid_corners.iter().map(|z| window.grid_value(z, axis));
            let (low, high) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(low, high), v| {
                (low.min(v), high.max(v))
            });
            (low.floor() as i32, high.ceil() as i32)
        })
        .collect();
    Ok(bounds)
}
