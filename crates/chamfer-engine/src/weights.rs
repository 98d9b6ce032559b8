//! Chamfer step weights indexed by neighbour type.

use crate::error::ConfigError;
use smallvec::SmallVec;
use std::fmt;

/// Tabulated weights for 1-, 2- and 3-axis steps (Borgefors-style
/// optimal chamfer coefficients on a unit-spaced grid).
const TABULATED: [f32; 3] = [0.92644, 1.34065, 1.65849];

/// Propagation cost per neighbour type.
///
/// Entry `k` is the distance added when stepping to a neighbour that moves
/// along `k + 1` axes at once: `get(0)` for face neighbours, `get(ndim - 1)`
/// for the full diagonal.
///
/// # Examples
///
/// ```
/// use chamfer_engine::ChamferWeights;
///
/// let w = ChamferWeights::for_dimension(2);
/// assert_eq!(w.as_slice(), &[0.92644, 1.34065]);
/// assert!(w.is_monotonic());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct ChamferWeights {
    values: SmallVec<[f32; 4]>,
}

impl ChamferWeights {
    /// Default weights for an `ndim`-dimensional grid.
    ///
    /// Dimensions 1 to 3 use the tabulated constants. Higher dimensions
    /// fall back to `sqrt(k + 1)` for type `k`, the exact Euclidean step
    /// length, and log a warning since no tuned table exists for them.
    pub fn for_dimension(ndim: usize) -> Self {
        if (1..=TABULATED.len()).contains(&ndim) {
            return Self {
                values: SmallVec::from_slice(&TABULATED[..ndim]),
            };
        }
        tracing::warn!(ndim, "no tabulated chamfer weights, using sqrt(i) defaults");
        Self {
            values: (1..=ndim).map(|i| (i as f32).sqrt()).collect(),
        }
    }

    /// Use caller-supplied weights, one per neighbour type.
    ///
    /// Monotonicity is not checked; see [`is_monotonic`](Self::is_monotonic).
    ///
    /// # Errors
    ///
    /// `Err(ConfigError::ZeroDimension)` for an empty slice.
    pub fn from_slice(values: &[f32]) -> Result<Self, ConfigError> {
        if values.is_empty() {
            return Err(ConfigError::ZeroDimension);
        }
        Ok(Self {
            values: SmallVec::from_slice(values),
        })
    }

    /// Number of neighbour types, equal to the grid dimensionality.
    pub fn ndim(&self) -> usize {
        self.values.len()
    }

    /// Weight for neighbour type `kind`.
    pub fn get(&self, kind: usize) -> Option<f32> {
        self.values.get(kind).copied()
    }

    /// Override the weight for neighbour type `kind`, e.g. to account for
    /// anisotropic spacing.
    pub fn set(&mut self, kind: usize, value: f32) -> Result<(), ConfigError> {
        let ndim = self.ndim();
        let slot = self
            .values
            .get_mut(kind)
            .ok_or(ConfigError::WeightIndex { index: kind, ndim })?;
        *slot = value;
        Ok(())
    }

    /// All weights, indexed by neighbour type.
    pub fn as_slice(&self) -> &[f32] {
        &self.values
    }

    /// Whether the weights never decrease with neighbour type.
    ///
    /// Non-monotonic weights still sweep, but produce a degraded field.
    pub fn is_monotonic(&self) -> bool {
        self.values.windows(2).all(|w| w[0] <= w[1])
    }
}

impl fmt::Display for ChamferWeights {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (kind, w) in self.values.iter().enumerate() {
            writeln!(f, "Chamfer weight {kind}: {w}")?;
        }
        Ok(())
    }
}
