// Per-point notification hook invoked while a tiling is enumerated
//
// Reporters run synchronously on the building thread, once per accepted
// point and in enumeration order. A slow reporter stalls the build; an
// error aborts it.

use log::{log, Level};
use std::sync::mpsc::Sender;

use crate::error::ReporterError;
use crate::lattice::LatticeSpace;

/// Receives every accepted lattice point of a build.
///
/// `space` is the read-only constant part of the tiling being built.
pub trait Reporter {
    fn report_point(&mut self, space: &LatticeSpace, point: &[i32]) -> Result<(), ReporterError>;
}

impl<F> Reporter for F
where
    F: FnMut(&LatticeSpace, &[i32]) -> Result<(), ReporterError>,
{
    fn report_point(&mut self, space: &LatticeSpace, point: &[i32]) -> Result<(), ReporterError> {
        self(space, point)
    }
}

/// Ignores every point.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullReporter;

impl Reporter for NullReporter {
    fn report_point(&mut self, _space: &LatticeSpace, _point: &[i32]) -> Result<(), ReporterError> {
        Ok(())
    }
}

/// Logs every point at a fixed level.
#[derive(Debug, Clone, Copy)]
pub struct LogReporter {
    level: Level,
    reported: usize,
}

impl LogReporter {
    pub fn new(level: Level) -> Self {
        LogReporter { level, reported: 0 }
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl Default for LogReporter {
    fn default() -> Self {
        LogReporter::new(Level::Trace)
    }
}

impl Reporter for LogReporter {
    fn report_point(&mut self, space: &LatticeSpace, point: &[i32]) -> Result<(), ReporterError> {
        log!(self.level, "accepted #{} (D = {}): {:?}", self.reported, space.dimension(), point);
        self.reported += 1;
        Ok(())
    }
}

/// Keeps a copy of every point, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CollectingReporter {
    points: Vec<Vec<i32>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn points(&self) -> &[Vec<i32>] {
        &self.points
    }

    pub fn into_points(self) -> Vec<Vec<i32>> {
        self.points
    }
}

impl Reporter for CollectingReporter {
    fn report_point(&mut self, _space: &LatticeSpace, point: &[i32]) -> Result<(), ReporterError> {
        self.points.push(point.to_vec());
        Ok(())
    }
}

/// Forwards points to another thread over an ordered channel.
///
/// Delivery order and multiplicity match the enumeration. A disconnected
/// receiver fails the build.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    sender: Sender<Vec<i32>>,
}

impl ChannelReporter {
    pub fn new(sender: Sender<Vec<i32>>) -> Self {
        ChannelReporter { sender }
    }
}

impl Reporter for ChannelReporter {
    fn report_point(&mut self, _space: &LatticeSpace, point: &[i32]) -> Result<(), ReporterError> {
        self.sender.send(point.to_vec())?;
        Ok(())
    }
}
