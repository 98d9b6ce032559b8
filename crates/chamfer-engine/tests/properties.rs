//! Property tests over randomly seeded grids.

use chamfer_core::{DistanceGrid, Region};
use chamfer_engine::{FastChamfer, NarrowBand};
use chamfer_grid::DenseGrid;
use chamfer_test_utils::fixtures::SENTINEL;
use chamfer_test_utils::{assert_fields_identical, MockGrid};
use proptest::prelude::*;

const MAX_CELLS: usize = 6 * 6 * 6;

/// A shape of 1 to 3 axes, each 1 to 6 cells long.
fn shape_from(axes: &[usize], ndim: usize) -> Vec<usize> {
    axes[..ndim].to_vec()
}

fn signed_grid(shape: &[usize], mask: &[bool]) -> DenseGrid {
    let cells: usize = shape.iter().product();
    DenseGrid::from_indicator(shape, &mask[..cells], SENTINEL).unwrap()
}

proptest! {
    #[test]
    fn saturated_grid_is_a_fixed_point(
        ndim in 1usize..4,
        axes in proptest::collection::vec(1usize..7, 3),
        signs in proptest::collection::vec(any::<bool>(), MAX_CELLS),
        scales in proptest::collection::vec(1.0f32..3.0, MAX_CELLS),
        maximum_distance in 0.5f32..20.0,
    ) {
        let shape = shape_from(&axes, ndim);
        let data: Vec<f32> = signs
            .iter()
            .zip(&scales)
            .take(shape.iter().product())
            .map(|(&positive, &s)| if positive { s * maximum_distance } else { -s * maximum_distance })
            .collect();
        let mut grid = DenseGrid::from_vec(&shape, data.clone()).unwrap();
        let filter = FastChamfer::builder(ndim)
            .maximum_distance(maximum_distance)
            .build()
            .unwrap();
        let metrics = filter.run(&mut grid, None).unwrap();

        prop_assert_eq!(metrics.updates(), 0);
        prop_assert_eq!(metrics.forward.cells_saturated, metrics.forward.cells_visited);
        prop_assert_eq!(grid.as_slice(), data.as_slice());
    }

    #[test]
    fn band_holds_exactly_the_cells_within_radius(
        ndim in 1usize..4,
        axes in proptest::collection::vec(1usize..7, 3),
        mask in proptest::collection::vec(any::<bool>(), MAX_CELLS),
        total in 0.5f32..4.0,
        inner_fraction in 0.0f32..1.0,
    ) {
        let shape = shape_from(&axes, ndim);
        let mut grid = signed_grid(&shape, &mask);
        let mut band = NarrowBand::new(total, total * inner_fraction);
        let filter = FastChamfer::new(ndim).unwrap();
        let metrics = filter.run(&mut grid, Some(&mut band)).unwrap();

        prop_assert_eq!(metrics.band_nodes, band.len());
        for node in &band {
            let v = grid.get(&node.index).unwrap();
            prop_assert!(v.abs() <= total, "node {:?} holds {}", node.index, v);
            prop_assert_eq!(node.state.is_positive(), v > 0.0);
            prop_assert_eq!(node.state.is_inner(), v.abs() < band.inner_radius());
        }
        let within = grid.as_slice().iter().filter(|v| v.abs() <= total).count();
        prop_assert_eq!(band.len(), within);
    }

    #[test]
    fn values_never_move_away_from_zero(
        ndim in 1usize..4,
        axes in proptest::collection::vec(1usize..7, 3),
        mask in proptest::collection::vec(any::<bool>(), MAX_CELLS),
        maximum_distance in 0.5f32..20.0,
    ) {
        let shape = shape_from(&axes, ndim);
        let before = signed_grid(&shape, &mask);
        let mut after = before.clone();
        FastChamfer::builder(ndim)
            .maximum_distance(maximum_distance)
            .build()
            .unwrap()
            .run(&mut after, None)
            .unwrap();

        for (&v0, &v) in before.as_slice().iter().zip(after.as_slice()) {
            if v0 > 0.0 {
                prop_assert!(v > 0.0 && v <= v0);
            } else if v0 < 0.0 {
                prop_assert!(v < 0.0 && v >= v0);
            } else {
                prop_assert_eq!(v, 0.0);
            }
        }
    }

    #[test]
    fn dense_and_generic_paths_agree(
        ndim in 1usize..4,
        axes in proptest::collection::vec(1usize..7, 3),
        mask in proptest::collection::vec(any::<bool>(), MAX_CELLS),
        total in 0.5f32..4.0,
    ) {
        let shape = shape_from(&axes, ndim);
        let input = signed_grid(&shape, &mask);
        let filter = FastChamfer::new(ndim).unwrap();

        let mut dense = input.clone();
        let mut dense_band = NarrowBand::new(total, total / 2.0);
        filter.run(&mut dense, Some(&mut dense_band)).unwrap();

        let mut mock = MockGrid::from_dense(&input);
        let mut mock_band = NarrowBand::new(total, total / 2.0);
        filter.run(&mut mock, Some(&mut mock_band)).unwrap();

        assert_fields_identical(&mock.to_vec(), dense.as_slice());
        prop_assert_eq!(mock_band, dense_band);
    }

    #[test]
    fn cells_outside_region_are_never_written(
        axes in proptest::collection::vec(1usize..7, 2),
        origin in proptest::collection::vec(0usize..6, 2),
        size in proptest::collection::vec(0usize..7, 2),
        mask in proptest::collection::vec(any::<bool>(), 36),
    ) {
        let origin: Vec<i32> = origin.iter().zip(&axes).map(|(&o, &n)| (o % n) as i32).collect();
        let size: Vec<usize> = size
            .iter()
            .zip(&axes)
            .zip(&origin)
            .map(|((&s, &n), &o)| s.min(n - o as usize))
            .collect();
        let region = Region::new(&origin, &size).unwrap();
        let before = signed_grid(&axes, &mask);
        let mut after = before.clone();
        FastChamfer::builder(2)
            .region(region.clone())
            .build()
            .unwrap()
            .run(&mut after, None)
            .unwrap();

        for index in before.extent().unwrap().iter() {
            if !region.contains(&index) {
                prop_assert_eq!(before.get(&index), after.get(&index));
            }
        }
    }
}
