//! Solver configuration.

/// Relative pivot tolerance used by [`SolverConfig::default`].
pub const DEFAULT_PIVOT_TOLERANCE: f64 = 1e-12;

/// Tuning knobs for Gaussian elimination.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolverConfig {
    /// A pivot is treated as zero when `|pivot| <= pivot_tolerance * scale`,
    /// where `scale` is the largest magnitude among the original entry and
    /// the terms subtracted from it during elimination. Must be finite and
    /// non-negative; anything else is read as zero, so only exact zero
    /// pivots are rejected.
    pub pivot_tolerance: f64,
}

impl SolverConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_pivot_tolerance(mut self, pivot_tolerance: f64) -> Self {
        self.pivot_tolerance = pivot_tolerance;
        self
    }

    /// The tolerance actually applied by the solver.
    pub fn effective_tolerance(&self) -> f64 {
        if self.pivot_tolerance.is_finite() && self.pivot_tolerance >= 0.0 {
            self.pivot_tolerance
        } else {
            0.0
        }
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            pivot_tolerance: DEFAULT_PIVOT_TOLERANCE,
        }
    }
}
