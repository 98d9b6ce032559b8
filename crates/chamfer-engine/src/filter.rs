//! The [`FastChamfer`] filter: configuration plus the two-pass driver.

use crate::band::NarrowBand;
use crate::error::{ConfigError, SweepError};
use crate::metrics::{PassMetrics, SweepMetrics};
use crate::sweep::{Phase, SweepEngine};
use crate::weights::ChamferWeights;
use chamfer_core::{DistanceGrid, Region};
use chamfer_grid::{DenseGrid, NeighbourTable};
use std::fmt;
use std::time::Instant;

/// Fast chamfer signed-distance propagation over an N-dimensional grid.
///
/// The input grid holds `0` on the interface, a large positive sentinel
/// outside the object and a large negative sentinel inside (see
/// [`DenseGrid::from_indicator`]). [`run`](Self::run) rewrites it in place
/// into an approximate signed distance field, saturating at
/// [`maximum_distance`](Self::maximum_distance), and optionally records a
/// [`NarrowBand`] of the cells near the interface.
///
/// # Examples
///
/// ```
/// use chamfer_core::DistanceGrid;
/// use chamfer_engine::FastChamfer;
/// use chamfer_grid::DenseGrid;
///
/// let mut grid = DenseGrid::new(&[5, 5], 1000.0).unwrap();
/// grid.set(&[2, 2], 0.0);
///
/// let filter = FastChamfer::new(2).unwrap();
/// filter.run(&mut grid, None).unwrap();
///
/// assert_eq!(grid.get(&[2, 3]), Some(0.92644));
/// assert_eq!(grid.get(&[3, 3]), Some(1.34065));
/// ```
#[derive(Clone, Debug)]
pub struct FastChamfer {
    weights: ChamferWeights,
    maximum_distance: f32,
    region: Option<Region>,
    neighbours: NeighbourTable,
}

/// Builder for [`FastChamfer`].
///
/// Defaults: the tabulated weights for the dimensionality, a maximum
/// distance of [`FastChamfer::DEFAULT_MAXIMUM_DISTANCE`], and the whole
/// grid as the region to process.
#[derive(Clone, Debug)]
pub struct FastChamferBuilder {
    ndim: usize,
    weights: Option<Vec<f32>>,
    maximum_distance: f32,
    region: Option<Region>,
}

impl FastChamferBuilder {
    /// Override the weight table, one weight per neighbour type.
    pub fn weights(mut self, weights: &[f32]) -> Self {
        self.weights = Some(weights.to_vec());
        self
    }

    /// Set the saturation threshold.
    pub fn maximum_distance(mut self, distance: f32) -> Self {
        self.maximum_distance = distance;
        self
    }

    /// Restrict sweeps to `region` instead of the whole grid.
    pub fn region(mut self, region: Region) -> Self {
        self.region = Some(region);
        self
    }

    /// Build the filter.
    ///
    /// # Errors
    ///
    /// - `ConfigError::ZeroDimension` if `ndim` is zero;
    /// - `ConfigError::TooManyAxes` if `ndim` exceeds
    ///   [`NeighbourTable::MAX_DIMENSION`];
    /// - `ConfigError::WeightCount` if custom weights do not number `ndim`;
    /// - `ConfigError::Grid` if the region has the wrong number of axes.
    pub fn build(self) -> Result<FastChamfer, ConfigError> {
        if self.ndim == 0 {
            return Err(ConfigError::ZeroDimension);
        }
        if self.ndim > NeighbourTable::MAX_DIMENSION {
            return Err(ConfigError::TooManyAxes {
                ndim: self.ndim,
                max: NeighbourTable::MAX_DIMENSION,
            });
        }
        let weights = match self.weights {
            Some(w) => {
                if w.len() != self.ndim {
                    return Err(ConfigError::WeightCount {
                        expected: self.ndim,
                        got: w.len(),
                    });
                }
                ChamferWeights::from_slice(&w)?
            }
            None => ChamferWeights::for_dimension(self.ndim),
        };
        if let Some(region) = &self.region {
            check_region_rank(region, self.ndim)?;
        }
        let neighbours = NeighbourTable::new(self.ndim)?;
        Ok(FastChamfer {
            weights,
            maximum_distance: self.maximum_distance,
            region: self.region,
            neighbours,
        })
    }
}

fn check_region_rank(region: &Region, ndim: usize) -> Result<(), ConfigError> {
    if region.ndim() != ndim {
        return Err(chamfer_core::GridError::DimensionMismatch {
            expected: ndim,
            got: region.ndim(),
        }
        .into());
    }
    Ok(())
}

impl FastChamfer {
    /// Saturation threshold used when none is configured.
    pub const DEFAULT_MAXIMUM_DISTANCE: f32 = 10.0;

    /// A filter for `ndim`-dimensional grids with default settings.
    pub fn new(ndim: usize) -> Result<Self, ConfigError> {
        Self::builder(ndim).build()
    }

    /// Start configuring a filter for `ndim`-dimensional grids.
    pub fn builder(ndim: usize) -> FastChamferBuilder {
        FastChamferBuilder {
            ndim,
            weights: None,
            maximum_distance: Self::DEFAULT_MAXIMUM_DISTANCE,
            region: None,
        }
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.neighbours.ndim()
    }

    /// The weight table.
    pub fn weights(&self) -> &ChamferWeights {
        &self.weights
    }

    /// Replace the weight table.
    pub fn set_weights(&mut self, weights: ChamferWeights) -> Result<(), ConfigError> {
        if weights.ndim() != self.ndim() {
            return Err(ConfigError::WeightCount {
                expected: self.ndim(),
                got: weights.ndim(),
            });
        }
        self.weights = weights;
        Ok(())
    }

    /// Override the weight of one neighbour type.
    pub fn set_weight(&mut self, kind: usize, value: f32) -> Result<(), ConfigError> {
        self.weights.set(kind, value)
    }

    /// Configured saturation threshold.
    pub fn maximum_distance(&self) -> f32 {
        self.maximum_distance
    }

    /// Set the saturation threshold. Not validated: a non-positive value
    /// saturates every cell.
    pub fn set_maximum_distance(&mut self, distance: f32) {
        self.maximum_distance = distance;
    }

    /// The configured region, or `None` to process the whole grid.
    pub fn region_to_process(&self) -> Option<&Region> {
        self.region.as_ref()
    }

    /// Set or clear the region to process.
    pub fn set_region_to_process(&mut self, region: Option<Region>) -> Result<(), ConfigError> {
        if let Some(r) = &region {
            check_region_rank(r, self.ndim())?;
        }
        self.region = region;
        Ok(())
    }

    /// The cached radius-1 neighbour table.
    pub fn neighbours(&self) -> &NeighbourTable {
        &self.neighbours
    }

    /// The saturation threshold a sweep uses.
    ///
    /// With a band attached this is the band's total radius plus one, so
    /// propagation stops one step past the band. The configured value is
    /// left untouched.
    pub fn effective_maximum_distance(&self, band: Option<&NarrowBand>) -> f32 {
        match band {
            Some(b) => b.total_radius() + 1.0,
            None => self.maximum_distance,
        }
    }

    fn resolve_region(&self, grid: &dyn DistanceGrid) -> Result<Region, SweepError> {
        if grid.ndim() != self.ndim() {
            return Err(SweepError::DimensionMismatch {
                expected: self.ndim(),
                got: grid.ndim(),
            });
        }
        match &self.region {
            Some(r) => Ok(r.clone()),
            None => Ok(grid.extent()?),
        }
    }

    /// Sweep `grid` in place: the forward pass, then the reverse pass.
    ///
    /// An attached `band` is cleared and refilled with every cell whose
    /// final magnitude is within its total radius.
    ///
    /// # Errors
    ///
    /// `SweepError::DimensionMismatch` or `SweepError::RegionOutOfBounds`,
    /// both raised before any cell is modified.
    pub fn run(
        &self,
        grid: &mut dyn DistanceGrid,
        mut band: Option<&mut NarrowBand>,
    ) -> Result<SweepMetrics, SweepError> {
        let started = Instant::now();
        let region = self.resolve_region(grid)?;
        let maximum_distance = self.effective_maximum_distance(band.as_deref());
        let engine = SweepEngine::new(
            &self.neighbours,
            self.weights.as_slice(),
            maximum_distance,
            &region,
        );
        engine.check(grid)?;

        tracing::debug!(
            ndim = self.ndim(),
            cells = region.cell_count(),
            maximum_distance,
            band = band.is_some(),
            "chamfer sweep starting"
        );
        let forward = engine.pass(grid, Phase::Forward, None)?;
        let reverse = engine.pass(grid, Phase::Reverse, band.as_deref_mut())?;

        let metrics = SweepMetrics {
            total_us: started.elapsed().as_micros() as u64,
            forward,
            reverse,
            band_nodes: band.map_or(0, |b| b.len()),
            maximum_distance,
        };
        tracing::debug!(
            updates = metrics.updates(),
            band_nodes = metrics.band_nodes,
            total_us = metrics.total_us,
            "chamfer sweep complete"
        );
        Ok(metrics)
    }

    /// Run a single pass. Useful for inspecting the intermediate field.
    ///
    /// The band, if any, is only cleared and filled by [`Phase::Reverse`].
    pub fn run_pass(
        &self,
        grid: &mut dyn DistanceGrid,
        phase: Phase,
        band: Option<&mut NarrowBand>,
    ) -> Result<PassMetrics, SweepError> {
        let region = self.resolve_region(grid)?;
        let maximum_distance = self.effective_maximum_distance(band.as_deref());
        SweepEngine::new(
            &self.neighbours,
            self.weights.as_slice(),
            maximum_distance,
            &region,
        )
        .pass(grid, phase, band)
    }

    /// Copy `input` into a fresh [`DenseGrid`] and sweep the copy, leaving
    /// `input` untouched.
    pub fn apply(
        &self,
        input: &dyn DistanceGrid,
        band: Option<&mut NarrowBand>,
    ) -> Result<(DenseGrid, SweepMetrics), SweepError> {
        let mut output = match input.downcast_ref::<DenseGrid>() {
            Some(dense) => dense.clone(),
            None => {
                let extent = input.extent()?;
                let mut copy = DenseGrid::new(input.shape(), 0.0)?;
                for index in extent.iter() {
                    if let Some(v) = input.get(&index) {
                        copy.set(&index, v);
                    }
                }
                copy
            }
        };
        let metrics = self.run(&mut output, band)?;
        Ok((output, metrics))
    }

    /// Sweep many independent grids in parallel, one invocation per grid.
    ///
    /// Passes within a grid stay sequential; only whole sweeps run
    /// concurrently.
    #[cfg(feature = "rayon")]
    pub fn run_batch<G>(&self, grids: &mut [G]) -> Vec<Result<SweepMetrics, SweepError>>
    where
        G: DistanceGrid + Send,
    {
        use rayon::prelude::*;

        grids
            .par_iter_mut()
            .map(|grid| self.run(grid, None))
            .collect()
    }
}

impl fmt::Display for FastChamfer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.weights)?;
        writeln!(f, "Maximal computed distance: {}", self.maximum_distance)?;
        match &self.region {
            Some(r) => writeln!(f, "Region to process: {r}"),
            None => writeln!(f, "Region to process: whole grid"),
        }
    }
}
