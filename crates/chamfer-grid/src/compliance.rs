//! DistanceGrid trait compliance test helpers.
//!
//! These functions verify that a grid implementation satisfies the access
//! contract the sweep engine relies on. Reused by every storage backend's
//! test module.

use chamfer_core::DistanceGrid;
use indexmap::IndexSet;

/// Assert that `extent()` covers exactly `shape()` and that every cell in
/// it is readable.
pub fn assert_extent_matches_shape(grid: &dyn DistanceGrid) {
    let extent = grid.extent().expect("valid grids have a valid extent");
    assert_eq!(extent.size(), grid.shape());
    assert!(extent.origin().iter().all(|&o| o == 0));
    for coord in extent.iter() {
        assert!(
            grid.get(&coord).is_some(),
            "cell {coord:?} inside extent is not readable"
        );
    }
}

/// Assert that reads and writes one step past every face are rejected and
/// leave the grid untouched.
pub fn assert_out_of_bounds_rejected(grid: &mut dyn DistanceGrid) {
    let shape = grid.shape().to_vec();
    let before: Vec<f32> = grid
        .extent()
        .expect("valid extent")
        .iter()
        .map(|c| grid.get(&c).unwrap_or(f32::NAN))
        .collect();

    for axis in 0..shape.len() {
        let mut low = vec![0i32; shape.len()];
        low[axis] = -1;
        let mut high = vec![0i32; shape.len()];
        high[axis] = shape[axis] as i32;
        for probe in [low, high] {
            assert!(grid.get(&probe).is_none(), "get({probe:?}) should miss");
            assert!(!grid.set(&probe, -1.0), "set({probe:?}) should miss");
        }
    }
    let wrong_rank = vec![0i32; shape.len() + 1];
    assert!(grid.get(&wrong_rank).is_none());

    let after: Vec<f32> = grid
        .extent()
        .expect("valid extent")
        .iter()
        .map(|c| grid.get(&c).unwrap_or(f32::NAN))
        .collect();
    assert_eq!(before.len(), after.len());
    for (b, a) in before.iter().zip(&after) {
        assert_eq!(b.to_bits(), a.to_bits(), "rejected write changed the grid");
    }
}

/// Assert that writing a distinct value to every cell reads back exactly,
/// with no two cells aliasing the same storage.
pub fn assert_set_then_get(grid: &mut dyn DistanceGrid) {
    let extent = grid.extent().expect("valid extent");
    for (i, coord) in extent.iter().enumerate() {
        assert!(grid.set(&coord, i as f32), "set({coord:?}) failed in bounds");
    }
    let mut seen = IndexSet::new();
    for (i, coord) in extent.iter().enumerate() {
        let v = grid.get(&coord).expect("in-bounds read");
        assert_eq!(v, i as f32, "cell {coord:?} read back {v}, wrote {i}");
        assert!(seen.insert(v.to_bits()), "cell {coord:?} aliases another cell");
    }
}
