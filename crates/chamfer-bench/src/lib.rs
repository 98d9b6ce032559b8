//! Benchmark profiles for chamfer distance propagation.
//!
//! Provides seeded input grids sized for benchmarking:
//!
//! - [`disc_profile`]: signed 2D disc, 256x256 (~65K cells)
//! - [`sphere_profile`]: signed 3D ball, 64^3 (~262K cells)
//! - [`scattered_seeds`]: unsigned grid with deterministic point seeds

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use chamfer_core::{DistanceGrid, GridError, Region};
use chamfer_grid::DenseGrid;

/// Magnitude of unknown cells in every profile.
pub const SENTINEL: f32 = 1.0e6;

/// Raster-order mask of a ball of `radius` centered in `shape`.
fn centered_ball(shape: &[usize], radius: f32) -> Result<Vec<bool>, GridError> {
    let region = Region::from_shape(shape)?;
    Ok(region
        .iter()
        .map(|index| {
            let r2: f32 = index
                .iter()
                .zip(shape)
                .map(|(&i, &n)| (i as f32 - n as f32 / 2.0).powi(2))
                .sum();
            r2 <= radius * radius
        })
        .collect())
}

/// Signed 2D disc of radius `size / 4` centered in a `size x size` grid.
pub fn disc_profile(size: usize) -> Result<DenseGrid, GridError> {
    let shape = [size, size];
    let mask = centered_ball(&shape, size as f32 / 4.0)?;
    DenseGrid::from_indicator(&shape, &mask, SENTINEL)
}

/// Signed 3D ball of radius `size / 4` centered in a `size^3` grid.
pub fn sphere_profile(size: usize) -> Result<DenseGrid, GridError> {
    let shape = [size, size, size];
    let mask = centered_ball(&shape, size as f32 / 4.0)?;
    DenseGrid::from_indicator(&shape, &mask, SENTINEL)
}

/// `+SENTINEL` grid with `count` zero seeds at deterministic pseudo-random
/// positions derived from `seed`.
pub fn scattered_seeds(shape: &[usize], count: usize, seed: u64) -> Result<DenseGrid, GridError> {
    let mut grid = DenseGrid::new(shape, SENTINEL)?;
    let cells = grid.len() as u64;
    for i in 0..count as u64 {
        let linear = (i ^ seed)
            .wrapping_mul(6364136223846793007)
            .wrapping_add(1442695040888963407)
            % cells;
        if let Some(index) = grid.coord_of(linear as usize) {
            grid.set(&index, 0.0);
        }
    }
    Ok(grid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn profiles_have_expected_sizes() {
        assert_eq!(disc_profile(32).unwrap().len(), 1024);
        assert_eq!(sphere_profile(8).unwrap().len(), 512);
    }

    #[test]
    fn disc_profile_is_seeded() {
        let g = disc_profile(32).unwrap();
        assert!(g.as_slice().iter().any(|&v| v == 0.0));
        assert!(g.as_slice().iter().any(|&v| v == -SENTINEL));
        assert_eq!(g.get(&[0, 0]), Some(SENTINEL));
    }

    #[test]
    fn scattered_seeds_is_deterministic() {
        let a = scattered_seeds(&[40, 40], 16, 7).unwrap();
        let b = scattered_seeds(&[40, 40], 16, 7).unwrap();
        assert_eq!(a, b);
        assert!(a.as_slice().iter().any(|&v| v == 0.0));
    }
}
