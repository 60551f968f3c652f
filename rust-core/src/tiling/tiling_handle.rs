// Uninitialized / Built lifecycle around an immutable QuasiTiling
//
// The published tiling sits behind an Arc. A build never touches it in
// place: initialize clears the slot, builds off-lock, and swaps the new
// tiling in only if no later initialize or invalidate has happened.
// Readers clone the Arc and keep a consistent tiling for as long as they
// hold it.

use log::{debug, warn};
use nalgebra::Vector2;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{TilingError, TilingResult};
use crate::tiling::builder::TilingConfig;
use crate::tiling::quasi_tiling::QuasiTiling;
use crate::tiling::reporter::Reporter;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TilingState {
    Uninitialized,
    Built,
}

/// Shared, rebuildable tiling slot.
#[derive(Debug, Default)]
pub struct TilingHandle {
    current: RwLock<Option<Arc<QuasiTiling>>>,
    generation: AtomicU64,
}

impl TilingHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Discard any current tiling and build a new one from `config`.
    ///
    /// On error the handle is left Uninitialized.
    pub fn initialize<R: Reporter + ?Sized>(&self, config: TilingConfig, reporter: &mut R) -> TilingResult<Arc<QuasiTiling>> {
        let generation = self.begin();
        let tiling = match QuasiTiling::build(config, reporter) {
            Ok(tiling) => Arc::new(tiling),
            Err(error) => {
                warn!("build {} failed: {}", generation, error);
                return Err(error);
            }
        };

        let mut slot = self.write();
        if self.generation.load(Ordering::SeqCst) == generation {
            *slot = Some(Arc::clone(&tiling));
            debug!("published build {}", generation);
        } else {
            debug!("build {} superseded before publishing", generation);
        }
        Ok(tiling)
    }

    /// Drop the current tiling; queries fail with `NotBuilt` until the next initialize.
    pub fn invalidate(&self) {
        self.begin();
    }

    pub fn state(&self) -> TilingState {
        if self.read().is_some() {
            TilingState::Built
        } else {
            TilingState::Uninitialized
        }
    }

    pub fn is_built(&self) -> bool {
        self.state() == TilingState::Built
    }

    /// The published tiling.
    pub fn snapshot(&self) -> TilingResult<Arc<QuasiTiling>> {
        self.read().clone().ok_or(TilingError::NotBuilt)
    }

    pub fn vertex_count(&self) -> TilingResult<usize> {
        Ok(self.snapshot()?.vertex_count())
    }

    pub fn vertex(&self, index: usize) -> TilingResult<Vec<i32>> {
        Ok(self.snapshot()?.vertex(index)?.to_vec())
    }

    pub fn tile_list(&self, g0: usize, g1: usize) -> TilingResult<Vec<usize>> {
        Ok(self.snapshot()?.tile_list(g0, g1)?.as_slice().to_vec())
    }

    pub fn vertex_position(&self, index: usize) -> TilingResult<Vector2<f64>> {
        self.snapshot()?.projector().vertex_position(index)
    }

    pub fn corners_of(&self, index: usize, g0: usize, g1: usize) -> TilingResult<[Vector2<f64>; 4]> {
        self.snapshot()?.projector().corners_of(index, g0, g1)
    }

    pub fn centroid_of(&self, index: usize, g0: usize, g1: usize) -> TilingResult<Vector2<f64>> {
        self.snapshot()?.projector().centroid_of(index, g0, g1)
    }

    // Bump the generation and clear the slot under the same write lock
    fn begin(&self) -> u64 {
        let mut slot = self.write();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        *slot = None;
        generation
    }

    fn read(&self) -> RwLockReadGuard<'_, Option<Arc<QuasiTiling>>> {
        self.current.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Option<Arc<QuasiTiling>>> {
        self.current.write().unwrap_or_else(PoisonError::into_inner)
    }
}
