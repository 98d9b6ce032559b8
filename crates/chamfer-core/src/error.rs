//! Error types for grid construction and index-space queries.

use std::error::Error;
use std::fmt;

/// Errors arising from grid or region construction.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// Attempted to construct a grid or region with zero axes.
    ZeroDimension,
    /// Attempted to construct a grid with zero cells along some axis.
    EmptyGrid {
        /// The axis whose extent is zero.
        axis: usize,
    },
    /// An axis extent does not fit the `i32` coordinate range.
    DimensionTooLarge {
        /// The offending axis.
        axis: usize,
        /// The value that was provided.
        value: usize,
        /// The maximum allowed value.
        max: usize,
    },
    /// The supplied buffer does not match the product of the shape.
    DataLength {
        /// Cells implied by the shape.
        expected: usize,
        /// Cells actually supplied.
        got: usize,
    },
    /// Two index-space objects disagree on the number of axes.
    DimensionMismatch {
        /// Axes the receiver expected.
        expected: usize,
        /// Axes that were provided.
        got: usize,
    },
    /// A neighbourhood of this many axes is too large to enumerate.
    TooManyAxes {
        /// Axes that were requested.
        ndim: usize,
        /// The largest supported number of axes.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroDimension => write!(f, "grid must have at least one axis"),
            Self::EmptyGrid { axis } => write!(f, "axis {axis} has zero extent"),
            Self::DimensionTooLarge { axis, value, max } => {
                write!(f, "axis {axis} extent {value} exceeds maximum {max}")
            }
            Self::DataLength { expected, got } => {
                write!(f, "buffer holds {got} cells, shape requires {expected}")
            }
            Self::DimensionMismatch { expected, got } => {
                write!(f, "expected {expected} axes, got {got}")
            }
            Self::TooManyAxes { ndim, max } => {
                write!(f, "{ndim} axes exceed the supported maximum of {max}")
            }
        }
    }
}

impl Error for GridError {}
