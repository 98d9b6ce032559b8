//! Owned dense N-dimensional `f32` storage.

use chamfer_core::{Coord, DistanceGrid, GridError};
use smallvec::SmallVec;

/// A dense N-dimensional grid of `f32` distance values.
///
/// Storage is a single contiguous buffer in raster order: axis `0` varies
/// fastest, so `strides()[0] == 1`. Indices run from zero to
/// `shape()[axis] - 1` on every axis.
///
/// # Examples
///
/// ```
/// use chamfer_core::DistanceGrid;
/// use chamfer_grid::DenseGrid;
///
/// let mut grid = DenseGrid::new(&[4, 3], 1000.0).unwrap();
/// assert_eq!(grid.len(), 12);
/// assert_eq!(grid.strides(), &[1, 4]);
///
/// assert!(grid.set(&[2, 1], 0.0));
/// assert_eq!(grid.as_slice()[6], 0.0);
///
/// // Out-of-bounds writes are rejected, not wrapped.
/// assert!(!grid.set(&[4, 0], 0.0));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct DenseGrid {
    shape: SmallVec<[usize; 4]>,
    strides: SmallVec<[usize; 4]>,
    data: Vec<f32>,
}

impl DenseGrid {
    /// Maximum extent per axis: coordinates use `i32`, so every axis must fit.
    pub const MAX_AXIS: usize = i32::MAX as usize;

    /// Create a grid of the given shape with every cell set to `fill`.
    ///
    /// Returns `Err(GridError::ZeroDimension)` for an empty shape,
    /// `Err(GridError::EmptyGrid)` if any axis is zero, or
    /// `Err(GridError::DimensionTooLarge)` if an axis exceeds
    /// [`MAX_AXIS`](Self::MAX_AXIS) or the cell count overflows `usize`.
    pub fn new(shape: &[usize], fill: f32) -> Result<Self, GridError> {
        let cells = Self::validate_shape(shape)?;
        Ok(Self {
            shape: SmallVec::from_slice(shape),
            strides: Self::strides_for(shape),
            data: vec![fill; cells],
        })
    }

    /// Wrap an existing raster-order buffer.
    ///
    /// Fails with `Err(GridError::DataLength)` if `data.len()` differs
    /// from the product of `shape`, in addition to the shape checks of
    /// [`new`](Self::new).
    pub fn from_vec(shape: &[usize], data: Vec<f32>) -> Result<Self, GridError> {
        let cells = Self::validate_shape(shape)?;
        if data.len() != cells {
            return Err(GridError::DataLength {
                expected: cells,
                got: data.len(),
            });
        }
        Ok(Self {
            shape: SmallVec::from_slice(shape),
            strides: Self::strides_for(shape),
            data,
        })
    }

    fn validate_shape(shape: &[usize]) -> Result<usize, GridError> {
        if shape.is_empty() {
            return Err(GridError::ZeroDimension);
        }
        let mut cells = 1usize;
        for (axis, &extent) in shape.iter().enumerate() {
            if extent == 0 {
                return Err(GridError::EmptyGrid { axis });
            }
            if extent > Self::MAX_AXIS {
                return Err(GridError::DimensionTooLarge {
                    axis,
                    value: extent,
                    max: Self::MAX_AXIS,
                });
            }
            cells = cells
                .checked_mul(extent)
                .ok_or(GridError::DimensionTooLarge {
                    axis,
                    value: extent,
                    max: usize::MAX / cells,
                })?;
        }
        Ok(cells)
    }

    fn strides_for(shape: &[usize]) -> SmallVec<[usize; 4]> {
        let mut strides = SmallVec::with_capacity(shape.len());
        let mut stride = 1usize;
        for &extent in shape {
            strides.push(stride);
            stride *= extent;
        }
        strides
    }

    /// Linear step between neighbouring cells along each axis.
    pub fn strides(&self) -> &[usize] {
        &self.strides
    }

    /// Number of cells.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Always returns `false`: construction rejects empty grids.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Raster-order view of every cell.
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Mutable raster-order view of every cell.
    pub fn as_mut_slice(&mut self) -> &mut [f32] {
        &mut self.data
    }

    /// Consume the grid, returning its raster-order buffer.
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    /// Overwrite every cell with `value`.
    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    /// Offset of `index` in the raster buffer, or `None` if out of bounds.
    #[inline]
    pub fn linear_index(&self, index: &[i32]) -> Option<usize> {
        if index.len() != self.shape.len() {
            return None;
        }
        let mut linear = 0usize;
        for (axis, &i) in index.iter().enumerate() {
            let i = usize::try_from(i).ok()?;
            if i >= self.shape[axis] {
                return None;
            }
            linear += i * self.strides[axis];
        }
        Some(linear)
    }

    /// Inverse of [`linear_index`](Self::linear_index).
    pub fn coord_of(&self, linear: usize) -> Option<Coord> {
        if linear >= self.data.len() {
            return None;
        }
        let mut rest = linear;
        Some(
            self.shape
                .iter()
                .map(|&extent| {
                    let c = rest % extent;
                    rest /= extent;
                    c as i32
                })
                .collect(),
        )
    }
}

impl DistanceGrid for DenseGrid {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    #[inline]
    fn get(&self, index: &[i32]) -> Option<f32> {
        self.linear_index(index).map(|i| self.data[i])
    }

    #[inline]
    fn set(&mut self, index: &[i32], value: f32) -> bool {
        match self.linear_index(index) {
            Some(i) => {
                self.data[i] = value;
                true
            }
            None => false,
        }
    }
}
