//! Chamfer: N-dimensional fast chamfer signed-distance propagation.
//!
//! This is the top-level facade crate that re-exports the public API from all
//! chamfer sub-crates. For most users, adding `chamfer` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use chamfer::prelude::*;
//!
//! // A 9x9 disc of radius 2, seeded to 0 on its surface, -1000 inside and
//! // +1000 outside.
//! let mask: Vec<bool> = (0..81)
//!     .map(|i| {
//!         let (x, y) = (i % 9 - 4, i / 9 - 4);
//!         x * x + y * y <= 4
//!     })
//!     .collect();
//! let mut grid = DenseGrid::from_indicator(&[9, 9], &mask, 1000.0).unwrap();
//!
//! // Sweep, collecting every cell within 1.5 of the surface.
//! let filter = FastChamfer::new(2).unwrap();
//! let mut band = NarrowBand::new(1.5, 0.5);
//! let metrics = filter.run(&mut grid, Some(&mut band)).unwrap();
//!
//! assert_eq!(metrics.maximum_distance, 2.5);
//! assert!(grid.get(&[4, 4]).unwrap() < 0.0);
//! assert!(grid.get(&[0, 4]).unwrap() > 0.0);
//! assert!(band.iter().all(|n| grid.get(&n.index).unwrap().abs() <= 1.5));
//! ```
//!
//! # Modules
//!
//! Each module corresponds to a sub-crate. Use them for types not in the prelude:
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `chamfer-core` | `Coord`, `Region`, the `DistanceGrid` trait, `GridError` |
//! | [`grid`] | `chamfer-grid` | `DenseGrid`, indicator seeding, neighbour tables |
//! | [`engine`] | `chamfer-engine` | Weights, the sweep, the filter, narrow band, metrics |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Index-space vocabulary (`chamfer-core`).
///
/// Contains [`types::Region`], the [`types::DistanceGrid`] access trait, and
/// [`types::GridError`].
pub use chamfer_core as types;

/// Grid storage and neighbourhood tables (`chamfer-grid`).
///
/// [`grid::DenseGrid`] is the contiguous backend the sweep has a fast path
/// for; [`grid::NeighbourTable`] classifies radius-1 neighbours.
pub use chamfer_grid as grid;

/// The two-pass sweep (`chamfer-engine`).
///
/// [`engine::FastChamfer`] drives sweeps; [`engine::SweepEngine`] exposes
/// single passes.
pub use chamfer_engine as engine;

/// Common imports for typical chamfer usage.
///
/// ```rust
/// use chamfer::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use chamfer_core::{Coord, DistanceGrid, GridError, Region};

    // Storage
    pub use chamfer_grid::{DenseGrid, NeighbourTable};

    // Engine
    pub use chamfer_engine::{
        BandNode, ChamferWeights, ConfigError, FastChamfer, NarrowBand, NodeState, Phase,
        SweepError, SweepMetrics,
    };
}
