//! The [`Coord`] index type and small helpers over it.

use smallvec::SmallVec;

/// An integer index into an N-dimensional grid.
///
/// Uses `SmallVec<[i32; 4]>` to avoid heap allocation for grids up to
/// 4 dimensions, which covers every medical volume layout in practice
/// (2D slices, 3D volumes, 3D + time). Higher-dimensional grids spill to
/// the heap transparently.
///
/// Component `0` is the fastest-varying axis in raster order.
pub type Coord = SmallVec<[i32; 4]>;

/// Write `a + b` component-wise into `out`, reusing its allocation.
///
/// `out` is resized to `a.len()`. Both inputs must have the same length.
#[inline]
pub fn offset_into(a: &[i32], b: &[i32], out: &mut Coord) {
    debug_assert_eq!(a.len(), b.len());
    out.clear();
    out.extend(a.iter().zip(b).map(|(x, d)| x + d));
}

/// Number of non-zero components of `offset`.
#[inline]
pub fn nonzero_axes(offset: &[i32]) -> usize {
    offset.iter().filter(|&&d| d != 0).count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use smallvec::smallvec;

    #[test]
    fn offset_into_reuses_buffer() {
        let mut out: Coord = smallvec![9, 9, 9, 9, 9];
        offset_into(&[1, 2], &[-1, 1], &mut out);
        assert_eq!(out.as_slice(), &[0, 3]);
    }

    #[test]
    fn nonzero_axes_counts() {
        assert_eq!(nonzero_axes(&[0, 0, 0]), 0);
        assert_eq!(nonzero_axes(&[1, 0, -1]), 2);
        assert_eq!(nonzero_axes(&[-1, -1, -1, -1]), 4);
    }
}
