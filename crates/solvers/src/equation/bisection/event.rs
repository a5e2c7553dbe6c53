use super::IterationRecord;

/// Event emitted once per iteration, after the record is stored.
#[derive(Debug, Clone, Copy)]
pub struct Event<'a> {
    /// The record just produced.
    pub record: &'a IterationRecord,
}

impl Event<'_> {
    /// Returns the midpoint evaluated in this iteration.
    #[must_use]
    pub fn x(&self) -> f64 {
        self.record.c
    }

    /// Returns the function value at the midpoint.
    #[must_use]
    pub fn residual(&self) -> f64 {
        self.record.fc
    }
}
