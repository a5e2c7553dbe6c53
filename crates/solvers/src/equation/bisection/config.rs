/// Configuration for the bisection solver.
///
/// One `tolerance` serves both stopping tests: the bracket width and the
/// magnitude of `f(c)`. Any value is accepted. A tolerance of zero or below
/// never satisfies either test, so the run lasts `max_iters` iterations;
/// `max_iters == 0` produces no iterations at all.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Config {
    tolerance: f64,
    max_iters: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self::new(1e-4, 100)
    }
}

impl Config {
    /// Creates a new config.
    #[must_use]
    pub fn new(tolerance: f64, max_iters: usize) -> Self {
        Self {
            tolerance,
            max_iters,
        }
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Returns the maximum number of iterations.
    #[must_use]
    pub fn max_iters(&self) -> usize {
        self.max_iters
    }
}
