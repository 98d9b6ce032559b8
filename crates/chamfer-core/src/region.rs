//! Axis-aligned index-space regions and raster traversal.

use crate::coord::Coord;
use crate::error::GridError;
use smallvec::SmallVec;
use std::fmt;

/// An axis-aligned rectangle in index space: `origin` plus `size` per axis.
///
/// Regions delimit which cells a sweep may read or write. Raster order
/// varies axis `0` fastest; [`advance`](Region::advance) and
/// [`retreat`](Region::retreat) step a coordinate through that order in
/// place so traversal needs no per-cell allocation.
///
/// # Examples
///
/// ```
/// use chamfer_core::Region;
///
/// let region = Region::new(&[1, 1], &[2, 3]).unwrap();
/// assert_eq!(region.cell_count(), 6);
/// assert!(region.contains(&[2, 3]));
/// assert!(!region.contains(&[3, 1]));
///
/// let order: Vec<Vec<i32>> = region.iter().map(|c| c.to_vec()).collect();
/// assert_eq!(order[0], vec![1, 1]);
/// assert_eq!(order[1], vec![2, 1]);
/// assert_eq!(order[2], vec![1, 2]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Region {
    origin: Coord,
    size: SmallVec<[usize; 4]>,
}

impl Region {
    /// Largest coordinate reachable on any axis.
    pub const MAX_EXTENT: usize = i32::MAX as usize;

    /// Create a region from its origin and per-axis size.
    ///
    /// Returns `Err(GridError::DimensionMismatch)` if the two slices differ
    /// in length, `Err(GridError::ZeroDimension)` if both are empty, or
    /// `Err(GridError::DimensionTooLarge)` if `origin + size` leaves the
    /// `i32` coordinate range on some axis. Zero-size axes are allowed and
    /// yield an empty region.
    pub fn new(origin: &[i32], size: &[usize]) -> Result<Self, GridError> {
        if origin.len() != size.len() {
            return Err(GridError::DimensionMismatch {
                expected: origin.len(),
                got: size.len(),
            });
        }
        if origin.is_empty() {
            return Err(GridError::ZeroDimension);
        }
        for (axis, (&o, &s)) in origin.iter().zip(size).enumerate() {
            let end = o as i64 + s as i64;
            if end > i32::MAX as i64 {
                return Err(GridError::DimensionTooLarge {
                    axis,
                    value: s,
                    max: (i32::MAX as i64 - o as i64).max(0) as usize,
                });
            }
        }
        Ok(Self {
            origin: SmallVec::from_slice(origin),
            size: SmallVec::from_slice(size),
        })
    }

    /// The region covering a whole grid of the given shape, rooted at zero.
    pub fn from_shape(shape: &[usize]) -> Result<Self, GridError> {
        let origin: Coord = smallvec::smallvec![0; shape.len()];
        Self::new(&origin, shape)
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.origin.len()
    }

    /// Lowest index on every axis.
    pub fn origin(&self) -> &[i32] {
        &self.origin
    }

    /// Extent on every axis.
    pub fn size(&self) -> &[usize] {
        &self.size
    }

    /// One past the highest index on `axis`.
    #[inline]
    pub fn end(&self, axis: usize) -> i32 {
        self.origin[axis] + self.size[axis] as i32
    }

    /// Total number of cells.
    pub fn cell_count(&self) -> usize {
        self.size.iter().product()
    }

    /// `true` if some axis has zero extent.
    pub fn is_empty(&self) -> bool {
        self.size.iter().any(|&s| s == 0)
    }

    /// Whether `index` lies inside the region.
    #[inline]
    pub fn contains(&self, index: &[i32]) -> bool {
        index.len() == self.ndim()
            && index
                .iter()
                .enumerate()
                .all(|(axis, &i)| i >= self.origin[axis] && i < self.end(axis))
    }

    /// Whether `index + offset` lies inside the region, without
    /// materialising the sum.
    #[inline]
    pub fn contains_offset(&self, index: &[i32], offset: &[i32]) -> bool {
        index.len() == self.ndim()
            && offset.len() == self.ndim()
            && index.iter().zip(offset).enumerate().all(|(axis, (&i, &d))| {
                i.checked_add(d)
                    .is_some_and(|j| j >= self.origin[axis] && j < self.end(axis))
            })
    }

    /// Whether every radius-1 neighbour of `index` lies inside the region.
    #[inline]
    pub fn is_interior(&self, index: &[i32]) -> bool {
        index.len() == self.ndim()
            && index
                .iter()
                .enumerate()
                .all(|(axis, &i)| {
                    i > self.origin[axis] && i.checked_add(1).is_some_and(|j| j < self.end(axis))
                })
    }

    /// Whether `self` is a subset of `outer`.
    pub fn is_within(&self, outer: &Region) -> bool {
        self.ndim() == outer.ndim()
            && (0..self.ndim()).all(|axis| {
                self.origin[axis] >= outer.origin[axis] && self.end(axis) <= outer.end(axis)
            })
    }

    /// First cell in raster order, or `None` for an empty region.
    pub fn first(&self) -> Option<Coord> {
        (!self.is_empty()).then(|| self.origin.clone())
    }

    /// Last cell in raster order, or `None` for an empty region.
    pub fn last(&self) -> Option<Coord> {
        (!self.is_empty()).then(|| (0..self.ndim()).map(|axis| self.end(axis) - 1).collect())
    }

    /// Step `index` to the next cell in raster order.
    ///
    /// Returns `false` (leaving `index` wrapped back to the origin) when
    /// `index` was the last cell.
    #[inline]
    pub fn advance(&self, index: &mut [i32]) -> bool {
        for axis in 0..self.ndim() {
            index[axis] += 1;
            if index[axis] < self.end(axis) {
                return true;
            }
            index[axis] = self.origin[axis];
        }
        false
    }

    /// Step `index` to the previous cell in raster order.
    ///
    /// Returns `false` (leaving `index` wrapped to the last cell) when
    /// `index` was the first cell.
    #[inline]
    pub fn retreat(&self, index: &mut [i32]) -> bool {
        for axis in 0..self.ndim() {
            if index[axis] > self.origin[axis] {
                index[axis] -= 1;
                return true;
            }
            index[axis] = self.end(axis) - 1;
        }
        false
    }

    /// Position of `index` in this region's raster order.
    pub fn raster_rank(&self, index: &[i32]) -> Option<usize> {
        if !self.contains(index) {
            return None;
        }
        let mut rank = 0usize;
        let mut stride = 1usize;
        for (axis, &i) in index.iter().enumerate() {
            rank += (i - self.origin[axis]) as usize * stride;
            stride *= self.size[axis];
        }
        Some(rank)
    }

    /// Iterate all cells in raster order.
    pub fn iter(&self) -> RasterIter<'_> {
        RasterIter {
            region: self,
            cursor: self.first(),
            reverse: false,
        }
    }

    /// Iterate all cells in reverse raster order.
    pub fn iter_rev(&self) -> RasterIter<'_> {
        RasterIter {
            region: self,
            cursor: self.last(),
            reverse: true,
        }
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for axis in 0..self.ndim() {
            if axis > 0 {
                write!(f, " x ")?;
            }
            write!(f, "[{}, {})", self.origin[axis], self.end(axis))?;
        }
        Ok(())
    }
}

/// Raster-order iterator over a [`Region`], created by
/// [`Region::iter`] or [`Region::iter_rev`].
#[derive(Clone, Debug)]
pub struct RasterIter<'a> {
    region: &'a Region,
    cursor: Option<Coord>,
    reverse: bool,
}

impl Iterator for RasterIter<'_> {
    type Item = Coord;

    fn next(&mut self) -> Option<Coord> {
        let current = self.cursor.take()?;
        let mut next = current.clone();
        let more = if self.reverse {
            self.region.retreat(&mut next)
        } else {
            self.region.advance(&mut next)
        };
        if more {
            self.cursor = Some(next);
        }
        Some(current)
    }
}
