//! Error types for filter configuration and sweep invocation.

use chamfer_core::{GridError, Region};
use std::error::Error;
use std::fmt;

/// Errors arising from building or reconfiguring a
/// [`FastChamfer`](crate::FastChamfer) filter.
#[derive(Clone, Debug, PartialEq)]
pub enum ConfigError {
    /// The filter was configured for zero axes.
    ZeroDimension,
    /// The filter was configured for more axes than a neighbour table
    /// supports.
    TooManyAxes {
        /// Axes that were requested.
        ndim: usize,
        /// The largest supported number of axes.
        max: usize,
    },
    /// A weight table does not hold one weight per neighbour type.
    WeightCount {
        /// Weights the dimensionality requires.
        expected: usize,
        /// Weights that were supplied.
        got: usize,
    },
    /// A neighbour type outside `0..ndim` was addressed.
    WeightIndex {
        /// The requested neighbour type.
        index: usize,
        /// Number of neighbour types.
        ndim: usize,
    },
    /// The region to process is malformed.
    Grid(GridError),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "chamfer filter needs at least one axis"),
            Self::TooManyAxes { ndim, max } => {
                write!(f, "chamfer filter supports at most {max} axes, got {ndim}")
            }
            Self::WeightCount { expected, got } => {
                write!(f, "expected {expected} chamfer weights, got {got}")
            }
            Self::WeightIndex { index, ndim } => {
                write!(f, "weight index {index} out of range for {ndim} neighbour types")
            }
            Self::Grid(e) => write!(f, "region: {e}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for ConfigError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

/// Errors that stop a sweep before any cell is touched.
#[derive(Clone, Debug, PartialEq)]
pub enum SweepError {
    /// The grid's dimensionality differs from the filter's.
    DimensionMismatch {
        /// Axes the filter was built for.
        expected: usize,
        /// Axes the grid has.
        got: usize,
    },
    /// The region to process is not contained in the grid's extent.
    RegionOutOfBounds {
        /// The configured region.
        region: Region,
        /// The grid's allocated extent.
        extent: Region,
    },
    /// The grid could not describe or allocate its extent.
    Grid(GridError),
}

impl fmt::Display for SweepError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DimensionMismatch { expected, got } => {
                write!(f, "filter expects {expected} axes, grid has {got}")
            }
            Self::RegionOutOfBounds { region, extent } => {
                write!(f, "region {region} is not inside grid extent {extent}")
            }
            Self::Grid(e) => write!(f, "grid: {e}"),
        }
    }
}

impl Error for SweepError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Grid(e) => Some(e),
            _ => None,
        }
    }
}

impl From<GridError> for SweepError {
    fn from(e: GridError) -> Self {
        Self::Grid(e)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_error_names_both_regions() {
        let e = SweepError::RegionOutOfBounds {
            region: Region::new(&[2, 2], &[4, 4]).unwrap(),
            extent: Region::from_shape(&[5, 5]).unwrap(),
        };
        assert_eq!(
            e.to_string(),
            "region [2, 6) x [2, 6) is not inside grid extent [0, 5) x [0, 5)"
        );
    }

    #[test]
    fn grid_errors_are_sources() {
        let e: ConfigError = GridError::ZeroDimension.into();
        assert!(e.source().is_some());
        let e: SweepError = GridError::EmptyGrid { axis: 1 }.into();
        assert_eq!(e.to_string(), "grid: axis 1 has zero extent");
        assert!(ConfigError::ZeroDimension.source().is_none());
    }
}
