//! Radius-1 neighbourhood enumeration and neighbour-type classification.

use chamfer_core::coord::nonzero_axes;
use chamfer_core::{Coord, GridError};
use smallvec::{smallvec, SmallVec};

/// One non-center cell of a radius-1 hypercube neighbourhood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourOffset {
    /// Relative offset from the center cell; every component is -1, 0 or 1.
    pub offset: Coord,
    /// Neighbour type: number of non-zero components minus one.
    ///
    /// `0` for face neighbours, `ndim - 1` for the full diagonal. Indexes
    /// the chamfer weight table.
    pub kind: usize,
}

/// Precomputed offsets and neighbour types of a radius-1 neighbourhood.
///
/// Entries follow the neighbourhood's linear order: the component on axis
/// `n` of linear position `i` is `(i / 3^n) % 3 - 1`, so axis `0` varies
/// fastest, matching grid raster order. The center (position
/// `(3^ndim - 1) / 2`) is skipped, leaving `3^ndim - 1` entries.
///
/// Because both orders vary axis `0` fastest, the entries before the center
/// ([`preceding`](Self::preceding)) are exactly the neighbours visited
/// earlier in raster order, and the entries after it
/// ([`following`](Self::following)) are exactly those visited later.
/// Each physical offset appears once, with one fixed type, in one half.
///
/// # Examples
///
/// ```
/// use chamfer_grid::NeighbourTable;
///
/// let table = NeighbourTable::new(2).unwrap();
/// assert_eq!(table.len(), 8);
/// assert_eq!(table.preceding().len(), 4);
/// assert_eq!(table.following().len(), 4);
///
/// // First entry is the (-1, -1) diagonal.
/// assert_eq!(table.entries()[0].offset.as_slice(), &[-1, -1]);
/// assert_eq!(table.entries()[0].kind, 1);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighbourTable {
    ndim: usize,
    entries: Vec<NeighbourOffset>,
}

impl NeighbourTable {
    /// Largest dimensionality whose `3^ndim - 1` neighbours are enumerated.
    pub const MAX_DIMENSION: usize = 10;

    /// Enumerate the radius-1 neighbourhood of an `ndim`-dimensional grid.
    ///
    /// A zero-dimensional table is empty.
    ///
    /// # Errors
    ///
    /// `GridError::TooManyAxes` if `ndim` exceeds [`Self::MAX_DIMENSION`].
    pub fn new(ndim: usize) -> Result<Self, GridError> {
        let too_many = GridError::TooManyAxes {
            ndim,
            max: Self::MAX_DIMENSION,
        };
        if ndim > Self::MAX_DIMENSION {
            return Err(too_many);
        }
        if ndim == 0 {
            return Ok(Self {
                ndim,
                entries: Vec::new(),
            });
        }
        let size = u32::try_from(ndim)
            .ok()
            .and_then(|n| 3usize.checked_pow(n))
            .ok_or(too_many)?;
        let center = size / 2;
        let mut entries = Vec::with_capacity(size - 1);
        for i in (0..size).filter(|&i| i != center) {
            let mut rest = i;
            let offset: Coord = (0..ndim)
                .map(|_| {
                    let d = (rest % 3) as i32 - 1;
                    rest /= 3;
                    d
                })
                .collect();
            let kind = nonzero_axes(&offset) - 1;
            entries.push(NeighbourOffset { offset, kind });
        }
        Ok(Self { ndim, entries })
    }

    /// Number of axes.
    pub fn ndim(&self) -> usize {
        self.ndim
    }

    /// Number of neighbours (`3^ndim - 1`).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` only for the zero-dimensional table.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every neighbour in linear order.
    pub fn entries(&self) -> &[NeighbourOffset] {
        &self.entries
    }

    /// Iterate every neighbour in linear order.
    pub fn iter(&self) -> std::slice::Iter<'_, NeighbourOffset> {
        self.entries.iter()
    }

    /// Neighbours visited before the center in raster order.
    pub fn preceding(&self) -> &[NeighbourOffset] {
        &self.entries[..self.entries.len() / 2]
    }

    /// Neighbours visited after the center in raster order.
    pub fn following(&self) -> &[NeighbourOffset] {
        &self.entries[self.entries.len() / 2..]
    }

    /// Number of neighbours of each type, indexed by `kind`.
    pub fn kind_counts(&self) -> SmallVec<[usize; 4]> {
        let mut counts: SmallVec<[usize; 4]> = smallvec![0; self.ndim];
        for e in &self.entries {
            counts[e.kind] += 1;
        }
        counts
    }

    /// Linear buffer delta of every entry for a raster buffer with the
    /// given strides, in the same order as [`entries`](Self::entries).
    pub fn linear_deltas(&self, strides: &[usize]) -> Vec<isize> {
        debug_assert_eq!(strides.len(), self.ndim);
        self.entries
            .iter()
            .map(|e| {
                e.offset
                    .iter()
                    .zip(strides)
                    .map(|(&d, &s)| d as isize * s as isize)
                    .sum()
            })
            .collect()
    }
}

impl<'a> IntoIterator for &'a NeighbourTable {
    type Item = &'a NeighbourOffset;
    type IntoIter = std::slice::Iter<'a, NeighbourOffset>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn one_dimensional_table() {
        let t = NeighbourTable::new(1).unwrap();
        let offsets: Vec<&[i32]> = t.iter().map(|e| e.offset.as_slice()).collect();
        assert_eq!(offsets, vec![&[-1][..], &[1][..]]);
        assert!(t.iter().all(|e| e.kind == 0));
    }

    #[test]
    fn zero_dimensional_table_is_empty() {
        let t = NeighbourTable::new(0).unwrap();
        assert!(t.is_empty());
        assert!(t.preceding().is_empty());
        assert!(t.following().is_empty());
    }

    #[test]
    fn two_dimensional_halves() {
        let t = NeighbourTable::new(2).unwrap();
        let pre: Vec<&[i32]> = t.preceding().iter().map(|e| e.offset.as_slice()).collect();
        assert_eq!(pre, vec![&[-1, -1][..], &[0, -1][..], &[1, -1][..], &[-1, 0][..]]);
        let fol: Vec<&[i32]> = t.following().iter().map(|e| e.offset.as_slice()).collect();
        assert_eq!(fol, vec![&[1, 0][..], &[-1, 1][..], &[0, 1][..], &[1, 1][..]]);
    }

    #[test]
    fn three_dimensional_kind_counts() {
        // 6 faces, 12 edges, 8 corners.
        let t = NeighbourTable::new(3).unwrap();
        assert_eq!(t.len(), 26);
        assert_eq!(t.kind_counts().as_slice(), &[6, 12, 8]);
    }

    #[test]
    fn oversized_dimension_is_rejected() {
        let max = NeighbourTable::MAX_DIMENSION;
        assert_eq!(NeighbourTable::new(max).unwrap().len(), 3usize.pow(max as u32) - 1);
        for ndim in [max + 1, 41, usize::MAX] {
            assert_eq!(
                NeighbourTable::new(ndim),
                Err(GridError::TooManyAxes { ndim, max })
            );
        }
    }

    #[test]
    fn linear_deltas_follow_strides() {
        let t = NeighbourTable::new(2).unwrap();
        let deltas = t.linear_deltas(&[1, 5]);
        assert_eq!(deltas, vec![-6, -5, -4, -1, 1, 4, 5, 6]);
    }

    proptest! {
        #[test]
        fn halves_are_mirror_images(ndim in 1usize..6) {
            let t = NeighbourTable::new(ndim).unwrap();
            let pre = t.preceding();
            let fol = t.following();
            prop_assert_eq!(pre.len(), fol.len());
            // Position k before the center mirrors position k after it.
            for (p, f) in pre.iter().zip(fol.iter().rev()) {
                let negated: Coord = f.offset.iter().map(|d| -d).collect();
                prop_assert_eq!(&p.offset, &negated);
                prop_assert_eq!(p.kind, f.kind);
            }
        }

        #[test]
        fn kind_is_nonzero_count_minus_one(ndim in 1usize..6) {
            let t = NeighbourTable::new(ndim).unwrap();
            prop_assert_eq!(t.len(), 3usize.pow(ndim as u32) - 1);
            for e in &t {
                prop_assert_eq!(e.kind + 1, e.offset.iter().filter(|&&d| d != 0).count());
                prop_assert!(e.kind < ndim);
            }
        }
    }
}
