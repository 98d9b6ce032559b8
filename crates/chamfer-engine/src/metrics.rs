//! Per-sweep counters and timings.

/// Counters for a single raster pass.
///
/// `elapsed_us` is wall-clock time in microseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PassMetrics {
    /// Region cells visited.
    pub cells_visited: u64,
    /// Visited cells skipped because `|v| >= maximum distance`.
    pub cells_saturated: u64,
    /// Neighbour writes that lowered (or, inside, raised) a value.
    pub updates: u64,
    /// Wall-clock time for the pass, in microseconds.
    pub elapsed_us: u64,
}

/// Timing and counters for one full two-pass sweep.
///
/// Returned by [`FastChamfer::run`](crate::FastChamfer::run) and
/// [`FastChamfer::apply`](crate::FastChamfer::apply).
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SweepMetrics {
    /// Wall-clock time for the whole sweep, in microseconds.
    pub total_us: u64,
    /// The raster-order pass.
    pub forward: PassMetrics,
    /// The reverse raster-order pass.
    pub reverse: PassMetrics,
    /// Nodes recorded into the narrow band, zero without one.
    pub band_nodes: usize,
    /// Saturation threshold the sweep actually used.
    ///
    /// Differs from the configured value when a narrow band is attached.
    pub maximum_distance: f32,
}

impl SweepMetrics {
    /// Neighbour writes over both passes.
    pub fn updates(&self) -> u64 {
        self.forward.updates + self.reverse.updates
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_metrics_are_zero() {
        let m = SweepMetrics::default();
        assert_eq!(m.total_us, 0);
        assert_eq!(m.forward, PassMetrics::default());
        assert_eq!(m.reverse, PassMetrics::default());
        assert_eq!(m.band_nodes, 0);
        assert_eq!(m.updates(), 0);
    }

    #[test]
    fn updates_sum_both_passes() {
        let m = SweepMetrics {
            forward: PassMetrics {
                updates: 3,
                ..Default::default()
            },
            reverse: PassMetrics {
                updates: 4,
                ..Default::default()
            },
            ..Default::default()
        };
        assert_eq!(m.updates(), 7);
    }
}
