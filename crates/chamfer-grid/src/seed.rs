//! Seeding an initial signed-distance grid from a binary indicator.

use crate::dense::DenseGrid;
use chamfer_core::GridError;

impl DenseGrid {
    /// Build the initial grid for a chamfer sweep from a binary indicator.
    ///
    /// `mask` is a raster-order buffer (axis `0` fastest) where `true`
    /// marks the object. Cells are initialised as:
    ///
    /// - `0.0` for object cells with at least one face neighbour outside
    ///   the object (the zero level set),
    /// - `-sentinel` for the remaining object cells (inside),
    /// - `+sentinel` for background cells (outside).
    ///
    /// Only face neighbours inside the grid are inspected, so an object
    /// touching the grid border is not seeded along that border.
    /// `sentinel` should be at least the sweep's maximum distance.
    ///
    /// # Errors
    ///
    /// The shape checks of [`DenseGrid::new`], and
    /// `Err(GridError::DataLength)` if `mask` does not cover the shape.
    pub fn from_indicator(shape: &[usize], mask: &[bool], sentinel: f32) -> Result<Self, GridError> {
        let mut grid = DenseGrid::new(shape, sentinel)?;
        if mask.len() != grid.len() {
            return Err(GridError::DataLength {
                expected: grid.len(),
                got: mask.len(),
            });
        }

        let strides: Vec<usize> = grid.strides().to_vec();
        let mut coord = vec![0usize; shape.len()];
        let data = grid.as_mut_slice();
        for (i, &inside) in mask.iter().enumerate() {
            if inside {
                let on_surface = (0..shape.len()).any(|axis| {
                    let below = coord[axis] > 0 && !mask[i - strides[axis]];
                    let above = coord[axis] + 1 < shape[axis] && !mask[i + strides[axis]];
                    below || above
                });
                data[i] = if on_surface { 0.0 } else { -sentinel };
            }

            for axis in 0..shape.len() {
                coord[axis] += 1;
                if coord[axis] < shape[axis] {
                    break;
                }
                coord[axis] = 0;
            }
        }
        Ok(grid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chamfer_core::DistanceGrid;

    #[test]
    fn single_cell_object_is_all_surface() {
        let mut mask = vec![false; 9];
        mask[4] = true;
        let g = DenseGrid::from_indicator(&[3, 3], &mask, 100.0).unwrap();
        assert_eq!(g.get(&[1, 1]), Some(0.0));
        assert_eq!(g.get(&[0, 0]), Some(100.0));
        assert_eq!(g.get(&[2, 1]), Some(100.0));
    }

    #[test]
    fn block_has_inside_core() {
        // 5x5 grid, object is the central 3x3 block.
        let mask: Vec<bool> = (0..25)
            .map(|i| {
                let (x, y) = (i % 5, i / 5);
                (1..=3).contains(&x) && (1..=3).contains(&y)
            })
            .collect();
        let g = DenseGrid::from_indicator(&[5, 5], &mask, 50.0).unwrap();
        assert_eq!(g.get(&[2, 2]), Some(-50.0));
        assert_eq!(g.get(&[1, 1]), Some(0.0));
        assert_eq!(g.get(&[3, 2]), Some(0.0));
        assert_eq!(g.get(&[0, 2]), Some(50.0));
    }

    #[test]
    fn full_mask_has_no_surface() {
        let g = DenseGrid::from_indicator(&[4], &[true; 4], 10.0).unwrap();
        assert!(g.as_slice().iter().all(|&v| v == -10.0));
    }

    #[test]
    fn rejects_short_mask() {
        assert_eq!(
            DenseGrid::from_indicator(&[2, 2], &[true; 3], 1.0),
            Err(GridError::DataLength {
                expected: 4,
                got: 3
            })
        );
    }
}
