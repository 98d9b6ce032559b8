//! The two-pass raster sweep.
//!
//! A [`SweepEngine`] borrows everything a pass needs (neighbour table,
//! weights, saturation threshold, region) and runs one [`Phase`] at a time
//! over any [`DistanceGrid`]. [`DenseGrid`] gets a fast path over its raw
//! buffer; every other grid goes through `get`/`set`. Both paths perform
//! the same floating-point operations in the same order, so they produce
//! bit-identical fields.

use crate::band::NarrowBand;
use crate::error::SweepError;
use crate::metrics::PassMetrics;
use chamfer_core::coord::offset_into;
use chamfer_core::{Coord, DistanceGrid, Region};
use chamfer_grid::{DenseGrid, NeighbourOffset, NeighbourTable};
use smallvec::SmallVec;
use std::fmt;
use std::time::Instant;

/// One of the two raster traversals of a sweep.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Phase {
    /// Increasing raster order, propagating into
    /// [`following`](NeighbourTable::following) neighbours.
    Forward,
    /// Decreasing raster order, propagating into
    /// [`preceding`](NeighbourTable::preceding) neighbours. The narrow
    /// band is recorded during this pass.
    Reverse,
}

impl Phase {
    /// Both phases in execution order.
    pub const ALL: [Phase; 2] = [Phase::Forward, Phase::Reverse];

    /// The neighbours this phase propagates into.
    pub fn half(self, table: &NeighbourTable) -> &[NeighbourOffset] {
        match self {
            Phase::Forward => table.following(),
            Phase::Reverse => table.preceding(),
        }
    }

    fn step(self, region: &Region, index: &mut [i32]) -> bool {
        match self {
            Phase::Forward => region.advance(index),
            Phase::Reverse => region.retreat(index),
        }
    }

    fn start(self, region: &Region) -> Option<Coord> {
        match self {
            Phase::Forward => region.first(),
            Phase::Reverse => region.last(),
        }
    }
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Forward => write!(f, "forward"),
            Phase::Reverse => write!(f, "reverse"),
        }
    }
}

/// Executes single passes of the chamfer sweep.
///
/// Each pass first [checks](Self::check) that the grid matches the engine's
/// dimensionality and that the region lies inside the grid's extent.
///
/// Per visited cell with value `v`:
///
/// 1. skip if `|v| >= maximum_distance`;
/// 2. in [`Phase::Reverse`], record the cell into the band if attached;
/// 3. if `v > -w[0]`, lower every in-region neighbour `n` of the phase's
///    half to `v + w[kind(n)]` where that is smaller;
/// 4. if `v < w[0]`, raise every such neighbour to `v - w[kind(n)]` where
///    that is larger.
#[derive(Clone, Copy, Debug)]
pub struct SweepEngine<'a> {
    neighbours: &'a NeighbourTable,
    weights: &'a [f32],
    maximum_distance: f32,
    region: &'a Region,
}

impl<'a> SweepEngine<'a> {
    /// Borrow the pass inputs.
    pub fn new(
        neighbours: &'a NeighbourTable,
        weights: &'a [f32],
        maximum_distance: f32,
        region: &'a Region,
    ) -> Self {
        Self {
            neighbours,
            weights,
            maximum_distance,
            region,
        }
    }

    /// Saturation threshold in use.
    pub fn maximum_distance(&self) -> f32 {
        self.maximum_distance
    }

    /// Verify that `grid`, the neighbour table, the weights and the region
    /// agree on dimensionality and that the region fits inside the grid.
    pub fn check(&self, grid: &dyn DistanceGrid) -> Result<(), SweepError> {
        let ndim = self.neighbours.ndim();
        for got in [grid.ndim(), self.weights.len(), self.region.ndim()] {
            if got != ndim {
                return Err(SweepError::DimensionMismatch { expected: ndim, got });
            }
        }
        let extent = grid.extent()?;
        if !self.region.is_within(&extent) {
            return Err(SweepError::RegionOutOfBounds {
                region: self.region.clone(),
                extent,
            });
        }
        Ok(())
    }

    /// Run one pass over the region, in place.
    ///
    /// In [`Phase::Reverse`] an attached band is cleared first and then
    /// filled; in [`Phase::Forward`] the band is ignored.
    ///
    /// # Errors
    ///
    /// Any failure of [`check`](Self::check), reported before a cell is
    /// touched.
    pub fn pass(
        &self,
        grid: &mut dyn DistanceGrid,
        phase: Phase,
        band: Option<&mut NarrowBand>,
    ) -> Result<PassMetrics, SweepError> {
        self.check(grid)?;
        let started = Instant::now();
        let band = match phase {
            Phase::Forward => None,
            Phase::Reverse => band.map(|b| {
                b.clear();
                b
            }),
        };
        let mut metrics = match grid.downcast_mut::<DenseGrid>() {
            Some(dense) => self.pass_dense(dense, phase, band),
            None => self.pass_generic(grid, phase, band),
        };
        metrics.elapsed_us = started.elapsed().as_micros() as u64;
        tracing::trace!(
            %phase,
            visited = metrics.cells_visited,
            saturated = metrics.cells_saturated,
            updates = metrics.updates,
            elapsed_us = metrics.elapsed_us,
            "chamfer pass complete"
        );
        Ok(metrics)
    }

    #[inline]
    fn saturated(&self, v: f32) -> bool {
        v >= self.maximum_distance || v <= -self.maximum_distance
    }

    fn pass_generic(
        &self,
        grid: &mut dyn DistanceGrid,
        phase: Phase,
        mut band: Option<&mut NarrowBand>,
    ) -> PassMetrics {
        let mut metrics = PassMetrics::default();
        let Some(mut index) = phase.start(self.region) else {
            return metrics;
        };
        let half = phase.half(self.neighbours);
        let w0 = self.weights[0];
        let mut target = Coord::new();
        let mut candidates: SmallVec<[f32; 4]> = SmallVec::with_capacity(self.weights.len());

        loop {
            if let Some(v) = grid.get(&index) {
                metrics.cells_visited += 1;
                if self.saturated(v) {
                    metrics.cells_saturated += 1;
                } else {
                    if let Some(band) = band.as_deref_mut() {
                        band.record(&index, v);
                    }
                    if v > -w0 {
                        candidates.clear();
                        candidates.extend(self.weights.iter().map(|w| v + w));
                        for n in half {
                            if !self.region.contains_offset(&index, &n.offset) {
                                continue;
                            }
                            offset_into(&index, &n.offset, &mut target);
                            let cand = candidates[n.kind];
                            if matches!(grid.get(&target), Some(cur) if cand < cur)
                                && grid.set(&target, cand)
                            {
                                metrics.updates += 1;
                            }
                        }
                    }
                    if v < w0 {
                        candidates.clear();
                        candidates.extend(self.weights.iter().map(|w| v - w));
                        for n in half {
                            if !self.region.contains_offset(&index, &n.offset) {
                                continue;
                            }
                            offset_into(&index, &n.offset, &mut target);
                            let cand = candidates[n.kind];
                            if matches!(grid.get(&target), Some(cur) if cand > cur)
                                && grid.set(&target, cand)
                            {
                                metrics.updates += 1;
                            }
                        }
                    }
                }
            }
            if !phase.step(self.region, &mut index) {
                break;
            }
        }
        metrics
    }

    fn pass_dense(
        &self,
        grid: &mut DenseGrid,
        phase: Phase,
        mut band: Option<&mut NarrowBand>,
    ) -> PassMetrics {
        let mut metrics = PassMetrics::default();
        let Some(mut index) = phase.start(self.region) else {
            return metrics;
        };
        let deltas = self.neighbours.linear_deltas(grid.strides());
        let split = deltas.len() / 2;
        let (half, half_deltas) = match phase {
            Phase::Forward => (self.neighbours.following(), &deltas[split..]),
            Phase::Reverse => (self.neighbours.preceding(), &deltas[..split]),
        };
        let w0 = self.weights[0];
        let mut candidates: SmallVec<[f32; 4]> = SmallVec::with_capacity(self.weights.len());

        loop {
            if let Some(linear) = grid.linear_index(&index) {
                let data = grid.as_mut_slice();
                let v = data[linear];
                metrics.cells_visited += 1;
                if self.saturated(v) {
                    metrics.cells_saturated += 1;
                } else {
                    if let Some(band) = band.as_deref_mut() {
                        band.record(&index, v);
                    }
                    let interior = self.region.is_interior(&index);
                    if v > -w0 {
                        candidates.clear();
                        candidates.extend(self.weights.iter().map(|w| v + w));
                        for (n, &delta) in half.iter().zip(half_deltas) {
                            if !interior && !self.region.contains_offset(&index, &n.offset) {
                                continue;
                            }
                            let t = linear.wrapping_add_signed(delta);
                            let cand = candidates[n.kind];
                            if cand < data[t] {
                                data[t] = cand;
                                metrics.updates += 1;
                            }
                        }
                    }
                    if v < w0 {
                        candidates.clear();
                        candidates.extend(self.weights.iter().map(|w| v - w));
                        for (n, &delta) in half.iter().zip(half_deltas) {
                            if !interior && !self.region.contains_offset(&index, &n.offset) {
                                continue;
                            }
                            let t = linear.wrapping_add_signed(delta);
                            let cand = candidates[n.kind];
                            if cand > data[t] {
                                data[t] = cand;
                                metrics.updates += 1;
                            }
                        }
                    }
                }
            }
            if !phase.step(self.region, &mut index) {
                break;
            }
        }
        metrics
    }
}
