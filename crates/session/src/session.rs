use rootstep_expr::{Expression, compile};
use rootstep_solvers::equation::bisection::{self, IterationRecord, Status};

use crate::{Error, Inputs};

/// Snapshot of a session's step state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct SessionState {
    /// True while a step-by-step run is in progress.
    pub active: bool,
    /// Steps taken in the active run, zero when idle.
    pub step_index: usize,
}

/// What a single call to [`Session::step`] produced.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct StepReport {
    /// The new record, or `None` if the run had nothing left to do.
    pub record: Option<IterationRecord>,
    /// True if the run ended with this step and the session is idle again.
    pub finished: bool,
}

/// A step-by-step run in progress.
#[derive(Debug)]
struct Stepping {
    inputs: Inputs,
    expression: Expression,
}

impl Stepping {
    /// Compiles the inputs and checks that the bounds bracket a root.
    fn start(inputs: &Inputs) -> Result<Self, Error> {
        let expression = compile(&inputs.expression)?;
        bisection::check_sign_change(&expression, inputs.bounds)?;

        Ok(Self {
            inputs: inputs.clone(),
            expression,
        })
    }
}

/// Record store and step state for one root-finding front end.
///
/// A session is either idle or running a step-by-step search. While a step
/// run is active, the expression, bounds and config captured by the first
/// [`step`](Self::step) are used until the run ends, and the inputs passed
/// to later calls are ignored. [`calculate`](Self::calculate) and
/// [`reset`](Self::reset) end any active run.
#[derive(Debug, Default)]
pub struct Session {
    records: Vec<IterationRecord>,
    stepping: Option<Stepping>,
    status: Option<Status>,
}

impl Session {
    /// Creates an idle session with no records.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs the whole search at once and stores its records.
    ///
    /// Any active step run is abandoned and the store is cleared first, so a
    /// failed call leaves the session idle and empty.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compile`] for a bad expression, or
    /// [`Error::Bisection`] if the bounds do not bracket a root or the
    /// expression fails to evaluate.
    pub fn calculate(&mut self, inputs: &Inputs) -> Result<&[IterationRecord], Error> {
        self.stepping = None;
        self.status = None;
        self.records.clear();

        let expression = compile(&inputs.expression)?;
        let solution = bisection::solve_unobserved(&expression, inputs.bounds, &inputs.config)?;

        self.records = solution.records;
        self.status = Some(solution.status);
        Ok(&self.records)
    }

    /// Performs one bisection iteration.
    ///
    /// When idle, this starts a new run from `inputs`: the store is cleared,
    /// the expression compiled and the sign change checked. When a run is
    /// active, `inputs` is ignored.
    ///
    /// The session returns to idle when the run finishes or any error
    /// occurs. Records stored before an error are kept.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Compile`] or [`Error::Bisection`] as for
    /// [`calculate`](Self::calculate).
    pub fn step(&mut self, inputs: &Inputs) -> Result<StepReport, Error> {
        let stepping = match self.stepping.take() {
            Some(stepping) => stepping,
            None => {
                self.status = None;
                self.records.clear();
                Stepping::start(inputs)?
            }
        };

        let outcome = bisection::step(
            &stepping.expression,
            stepping.inputs.bounds,
            &self.records,
            &stepping.inputs.config,
        )?;

        let record = outcome.record().copied();
        if let Some(record) = record {
            self.records.push(record);
        }

        let finished = outcome.is_finished();
        if !finished {
            self.stepping = Some(stepping);
        }

        Ok(StepReport { record, finished })
    }

    /// Clears all records and ends any active run.
    pub fn reset(&mut self) {
        self.records.clear();
        self.stepping = None;
        self.status = None;
    }

    /// Returns the stored records, oldest first.
    #[must_use]
    pub fn records(&self) -> &[IterationRecord] {
        &self.records
    }

    /// Returns the most recent record.
    #[must_use]
    pub fn last(&self) -> Option<&IterationRecord> {
        self.records.last()
    }

    /// Returns whether a step run is active and how far it has gone.
    #[must_use]
    pub fn state(&self) -> SessionState {
        match self.stepping {
            Some(_) => SessionState {
                active: true,
                step_index: self.records.len(),
            },
            None => SessionState::default(),
        }
    }

    /// Returns true while a step run is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.stepping.is_some()
    }

    /// Returns the inputs frozen at the start of the active step run.
    #[must_use]
    pub fn step_inputs(&self) -> Option<&Inputs> {
        self.stepping.as_ref().map(|stepping| &stepping.inputs)
    }

    /// Returns why the last [`calculate`](Self::calculate) stopped.
    ///
    /// `None` after a step run, a reset, or a failed calculation.
    #[must_use]
    pub fn status(&self) -> Option<Status> {
        self.status
    }
}
