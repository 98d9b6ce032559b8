//! Core types and traits for chamfer distance propagation.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! index-space vocabulary shared by the rest of the workspace: the
//! [`Coord`] index type, the [`Region`] rectangle with its raster odometer,
//! the [`DistanceGrid`] access trait, and [`GridError`].

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod coord;
pub mod error;
pub mod grid;
pub mod region;

pub use coord::Coord;
pub use error::GridError;
pub use grid::DistanceGrid;
pub use region::Region;
