//! Test utilities and mock types for chamfer development.
//!
//! Provides [`MockGrid`], a hash-map backed [`DistanceGrid`] that forces the
//! sweep engine onto its generic `get`/`set` path, seeded-grid
//! [`fixtures`], and tolerance assertions for distance fields.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

use chamfer_core::{Coord, DistanceGrid, GridError, Region};
use chamfer_grid::DenseGrid;
use indexmap::IndexMap;

/// A non-dense [`DistanceGrid`] for exercising the generic sweep path.
///
/// Every cell lives in an `IndexMap<Coord, f32>` populated in raster
/// order, so [`to_vec`](Self::to_vec) returns the same layout as a
/// [`DenseGrid`]. Successful writes are counted.
#[derive(Clone, Debug)]
pub struct MockGrid {
    shape: Vec<usize>,
    cells: IndexMap<Coord, f32>,
    writes: usize,
}

impl MockGrid {
    /// A grid of `shape` with every cell set to `fill`.
    pub fn new(shape: &[usize], fill: f32) -> Result<Self, GridError> {
        // Reuse DenseGrid's shape validation.
        let dense = DenseGrid::new(shape, fill)?;
        Ok(Self::from_dense(&dense))
    }

    /// Copy every cell of `dense`.
    pub fn from_dense(dense: &DenseGrid) -> Self {
        let shape = dense.shape().to_vec();
        let mut cells = IndexMap::with_capacity(dense.len());
        if let Ok(extent) = Region::from_shape(&shape) {
            for (coord, &v) in extent.iter().zip(dense.as_slice()) {
                cells.insert(coord, v);
            }
        }
        Self {
            shape,
            cells,
            writes: 0,
        }
    }

    /// Cell values in raster order.
    pub fn to_vec(&self) -> Vec<f32> {
        self.cells.values().copied().collect()
    }

    /// Convert back into dense storage.
    pub fn to_dense(&self) -> Result<DenseGrid, GridError> {
        DenseGrid::from_vec(&self.shape, self.to_vec())
    }

    /// Number of successful `set` calls since construction.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl DistanceGrid for MockGrid {
    fn shape(&self) -> &[usize] {
        &self.shape
    }

    fn get(&self, index: &[i32]) -> Option<f32> {
        self.cells.get(index).copied()
    }

    fn set(&mut self, index: &[i32], value: f32) -> bool {
        match self.cells.get_mut(index) {
            Some(slot) => {
                *slot = value;
                self.writes += 1;
                true
            }
            None => false,
        }
    }
}

/// Assert `|actual - expected| <= tol`.
#[track_caller]
pub fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "expected {expected} (+/- {tol}), got {actual}"
    );
}

/// Assert two fields agree cell by cell within `tol`.
#[track_caller]
pub fn assert_fields_close(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(actual.len(), expected.len(), "field lengths differ");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert!(
            (a - e).abs() <= tol,
            "cell {i}: expected {e} (+/- {tol}), got {a}"
        );
    }
}

/// Assert two fields are bit-for-bit identical.
#[track_caller]
pub fn assert_fields_identical(actual: &[f32], expected: &[f32]) {
    assert_eq!(actual.len(), expected.len(), "field lengths differ");
    for (i, (&a, &e)) in actual.iter().zip(expected).enumerate() {
        assert_eq!(a.to_bits(), e.to_bits(), "cell {i}: expected {e}, got {a}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_grid_mirrors_dense_layout() {
        let dense = DenseGrid::from_vec(&[2, 3], vec![0.0, 1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        let mock = MockGrid::from_dense(&dense);
        assert_eq!(mock.get(&[1, 1]), dense.get(&[1, 1]));
        assert_eq!(mock.to_vec(), dense.as_slice());
        assert_eq!(mock.to_dense().unwrap(), dense);
    }

    #[test]
    fn mock_grid_counts_successful_writes() {
        let mut mock = MockGrid::new(&[3, 3], 7.0).unwrap();
        assert!(mock.set(&[0, 2], 1.0));
        assert!(!mock.set(&[3, 0], 1.0));
        assert!(!mock.set(&[0], 1.0));
        assert_eq!(mock.writes(), 1);
        assert_eq!(mock.get(&[0, 2]), Some(1.0));
    }
}
