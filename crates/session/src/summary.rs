use rootstep_solvers::equation::bisection::IterationRecord;

/// Headline numbers for a finished run.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Summary {
    /// Root estimate, the last midpoint.
    pub root: f64,
    /// Function value at the root estimate.
    pub f_root: f64,
    /// Width of the last bracket searched.
    pub error: f64,
    /// Number of iterations performed.
    pub iterations: usize,
}

impl Summary {
    /// Summarizes a run from its records.
    ///
    /// Returns `None` if no iteration ran.
    #[must_use]
    pub fn from_records(records: &[IterationRecord]) -> Option<Self> {
        let last = records.last()?;

        Some(Self {
            root: last.c,
            f_root: last.fc,
            error: last.width(),
            iterations: records.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use rootstep_solvers::equation::bisection::SignClass;

    #[test]
    fn empty_run_has_no_summary() {
        assert_eq!(Summary::from_records(&[]), None);
    }

    #[test]
    fn summarizes_last_record() {
        let records = [
            IterationRecord {
                index: 1,
                a: 1.0,
                b: 2.0,
                c: 1.5,
                sign: SignClass::Positive,
                fc: -0.125,
            },
            IterationRecord {
                index: 2,
                a: 1.5,
                b: 2.0,
                c: 1.75,
                sign: SignClass::Negative,
                fc: 1.609_375,
            },
        ];

        let summary = Summary::from_records(&records).expect("has records");
        assert_relative_eq!(summary.root, 1.75);
        assert_relative_eq!(summary.f_root, 1.609_375);
        assert_relative_eq!(summary.error, 0.5);
        assert_eq!(summary.iterations, 2);
    }
}
