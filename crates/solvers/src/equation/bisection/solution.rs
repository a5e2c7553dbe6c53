use super::IterationRecord;

/// Why a batch run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum Status {
    /// The last midpoint satisfied `|f(c)| < tolerance`.
    ResidualConverged,
    /// The bracket width is no longer above the tolerance.
    WidthConverged,
    /// The iteration limit was reached first.
    MaxIters,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// The result of a batch bisection run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Every iteration, in order.
    pub records: Vec<IterationRecord>,
    /// Final solver status.
    pub status: Status,
}

impl Solution {
    /// Returns the last iteration, if any ran.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Returns the last midpoint as the root estimate.
    #[must_use]
    pub fn root(&self) -> Option<f64> {
        self.last().map(|record| record.c)
    }

    /// Returns the number of iterations performed.
    #[must_use]
    pub fn iters(&self) -> usize {
        self.records.len()
    }
}
