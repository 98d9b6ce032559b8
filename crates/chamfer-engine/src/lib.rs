//! Two-pass fast chamfer distance propagation.
//!
//! [`FastChamfer`] turns a seeded grid (zero on the interface, large
//! positive sentinels outside, large negative sentinels inside) into an
//! approximate signed distance field in place. The sweep visits the region
//! in raster order propagating into [`following`](chamfer_grid::NeighbourTable::following)
//! neighbours, then in reverse raster order propagating into
//! [`preceding`](chamfer_grid::NeighbourTable::preceding) neighbours, adding
//! the [`ChamferWeights`] entry of each step's neighbour type. Cells whose
//! magnitude reaches the maximum distance stop propagating.
//!
//! A caller-owned [`NarrowBand`] may be attached to a sweep; it is rebuilt
//! during the reverse pass with every cell near the interface.
//!
//! # Parallelism
//!
//! With the `rayon` feature, `FastChamfer::run_batch` sweeps independent
//! grids concurrently. A single sweep is always sequential.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod band;
pub mod error;
pub mod filter;
pub mod metrics;
pub mod sweep;
pub mod weights;

pub use band::{BandNode, NarrowBand, NodeState};
pub use error::{ConfigError, SweepError};
pub use filter::{FastChamfer, FastChamferBuilder};
pub use metrics::{PassMetrics, SweepMetrics};
pub use sweep::{Phase, SweepEngine};
pub use weights::ChamferWeights;
