//! Seeded grids and indicator masks for sweep tests.
//!
//! - [`point_seeded`]: a single zero cell in a field of `+SENTINEL`.
//! - [`ring_seeded`]: a symmetric ring of zero cells in a square grid.
//! - [`disc_mask`] / [`ball_mask`]: centered binary objects for
//!   [`DenseGrid::from_indicator`].

use chamfer_core::{DistanceGrid, Region};
use chamfer_grid::DenseGrid;

/// Magnitude used for unknown cells: far above any tested maximum distance.
pub const SENTINEL: f32 = 1000.0;

/// A grid of `+SENTINEL` with `seed` set to zero.
///
/// Panics if `shape` is invalid or `seed` is out of bounds.
pub fn point_seeded(shape: &[usize], seed: &[i32]) -> DenseGrid {
    let mut grid = DenseGrid::new(shape, SENTINEL).expect("valid fixture shape");
    assert!(grid.set(seed, 0.0), "seed {seed:?} outside {shape:?}");
    grid
}

/// A `size x size` grid of `+SENTINEL` with zero on every cell whose
/// Euclidean distance from the center is within half a cell of `radius`.
///
/// The seed set is invariant under the square's mirror and transpose
/// symmetries when `size` is odd.
pub fn ring_seeded(size: usize, radius: f32) -> DenseGrid {
    let mut grid = DenseGrid::new(&[size, size], SENTINEL).expect("valid fixture shape");
    let c = (size / 2) as f32;
    for index in Region::from_shape(&[size, size]).expect("valid region").iter() {
        let d = ((index[0] as f32 - c).powi(2) + (index[1] as f32 - c).powi(2)).sqrt();
        if (d - radius).abs() <= 0.5 {
            grid.set(&index, 0.0);
        }
    }
    grid
}

/// Raster-order mask of a disc of `radius` centered in a `size x size` grid.
pub fn disc_mask(size: usize, radius: f32) -> Vec<bool> {
    centered_mask(&[size, size], radius)
}

/// Raster-order mask of a ball of `radius` centered in a `size^3` grid.
pub fn ball_mask(size: usize, radius: f32) -> Vec<bool> {
    centered_mask(&[size, size, size], radius)
}

fn centered_mask(shape: &[usize], radius: f32) -> Vec<bool> {
    let region = Region::from_shape(shape).expect("valid fixture shape");
    region
        .iter()
        .map(|index| {
            let r2: f32 = index
                .iter()
                .zip(shape)
                .map(|(&i, &n)| (i as f32 - (n / 2) as f32).powi(2))
                .sum();
            r2 <= radius * radius
        })
        .collect()
}

/// Mirror a square 2D field across its vertical axis (`x -> size-1-x`).
pub fn mirror_axis0(field: &[f32], size: usize) -> Vec<f32> {
    (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            field[y * size + (size - 1 - x)]
        })
        .collect()
}

/// Transpose a square 2D field (`(x, y) -> (y, x)`).
pub fn transpose(field: &[f32], size: usize) -> Vec<f32> {
    (0..size * size)
        .map(|i| {
            let (x, y) = (i % size, i / size);
            field[x * size + y]
        })
        .collect()
}
