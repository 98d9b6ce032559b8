//! Grid storage and neighbourhood tables for chamfer distance propagation.
//!
//! Provides [`DenseGrid`], the contiguous raster-order backend the sweep
//! engine has a fast path for, the [`from_indicator`](DenseGrid::from_indicator)
//! seeding helper, and [`NeighbourTable`], the precomputed radius-1
//! neighbourhood with its preceding/following split.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod dense;
pub mod neighbourhood;
pub mod seed;

#[cfg(test)]
pub(crate) mod compliance;

pub use dense::DenseGrid;
pub use neighbourhood::{NeighbourOffset, NeighbourTable};
