//! The [`DistanceGrid`] access trait and `dyn DistanceGrid` downcast support.

use crate::error::GridError;
use crate::region::Region;
use std::any::Any;

/// Index-addressed access to a dense N-dimensional scalar grid.
///
/// The sweep engine reads and writes distance values exclusively through
/// this trait, so any storage layout can be swept. Cells are addressed by
/// integer index slices whose length equals [`ndim`](Self::ndim); the
/// allocated extent always starts at index zero on every axis.
///
/// # Contract
///
/// - `get` returns `None` for any index outside the allocated extent.
/// - `set` is bounds-checked: it returns `false` and leaves the grid
///   unchanged when the index is outside the allocated extent.
/// - `shape` never changes while a sweep holds the grid.
pub trait DistanceGrid: Any {
    /// Allocated extent on every axis.
    fn shape(&self) -> &[usize];

    /// Number of axes.
    fn ndim(&self) -> usize {
        self.shape().len()
    }

    /// Read the value at `index`.
    fn get(&self, index: &[i32]) -> Option<f32>;

    /// Write `value` at `index`, returning whether the write landed.
    fn set(&mut self, index: &[i32], value: f32) -> bool;

    /// The region covering the whole allocated extent.
    fn extent(&self) -> Result<Region, GridError> {
        Region::from_shape(self.shape())
    }
}

impl dyn DistanceGrid {
    /// Attempt to downcast a trait object to a concrete grid type.
    ///
    /// Lets code holding `&dyn DistanceGrid` check for a known storage
    /// layout and take a type-specific fast path.
    pub fn downcast_ref<T: DistanceGrid>(&self) -> Option<&T> {
        (self as &dyn Any).downcast_ref::<T>()
    }

    /// Mutable counterpart of [`downcast_ref`](Self::downcast_ref).
    pub fn downcast_mut<T: DistanceGrid>(&mut self) -> Option<&mut T> {
        (self as &mut dyn Any).downcast_mut::<T>()
    }
}
