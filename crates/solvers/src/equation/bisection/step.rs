use rootstep_core::Function;

use crate::equation::evaluate;

use super::{Bracket, Config, Error, IterationRecord, bisect};

/// Outcome of a single bisection step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// A record was produced and the search can go on.
    Continue(IterationRecord),
    /// A record was produced and it met a stopping tolerance.
    Done(IterationRecord),
    /// No record was produced: the iteration limit is reached or the
    /// bracket is already within tolerance.
    Exhausted,
}

impl Step {
    /// Returns the record produced by this step, if any.
    #[must_use]
    pub fn record(&self) -> Option<&IterationRecord> {
        match self {
            Step::Continue(record) | Step::Done(record) => Some(record),
            Step::Exhausted => None,
        }
    }

    /// Returns true if no further step should be taken.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        !matches!(self, Step::Continue(_))
    }
}

/// Performs one bisection iteration after `history`.
///
/// `history` holds the records of earlier steps, oldest first; `bounds` is
/// only used while it is empty. The function is re-evaluated at the last
/// record's `a` and `c` to rebuild the current bracket (see
/// [`current_bracket`]), then one iteration runs on that bracket. The
/// sign-change precondition is not checked here; see
/// [`check_sign_change`](super::check_sign_change).
///
/// The step reports [`Step::Done`] when the batch driver would stop after
/// the same record: `|f(c)| < tolerance`, the narrowed bracket is within
/// tolerance, or the record reaches `max_iters`.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if the function fails to evaluate.
pub fn step<F: Function>(
    function: &F,
    bounds: [f64; 2],
    history: &[IterationRecord],
    config: &Config,
) -> Result<Step, Error> {
    let bracket = current_bracket(function, bounds, history)?;
    let tolerance = config.tolerance();

    if history.len() >= config.max_iters() || bracket.is_within(tolerance) {
        return Ok(Step::Exhausted);
    }

    let fa = evaluate(function, bracket.a())?;
    let record = bisect(function, &bracket, fa, history.len() + 1)?;

    let mut next = bracket;
    next.narrow(record.c, record.sign);

    if record.fc.abs() < tolerance
        || next.is_within(tolerance)
        || record.index >= config.max_iters()
    {
        Ok(Step::Done(record))
    } else {
        Ok(Step::Continue(record))
    }
}

/// Returns the bracket the next step searches.
///
/// With no history this is `bounds`. Otherwise the sign of
/// `f(last.a) · f(last.c)` is recomputed rather than read from the record.
///
/// # Errors
///
/// Returns [`Error::Evaluation`] if the function fails to evaluate.
pub fn current_bracket<F: Function>(
    function: &F,
    bounds: [f64; 2],
    history: &[IterationRecord],
) -> Result<Bracket, Error> {
    match history.last() {
        None => Ok(Bracket::new(bounds)),
        Some(last) => {
            let fa = evaluate(function, last.a)?;
            let fc = evaluate(function, last.c)?;
            Ok(Bracket::rederive(last, fa, fc))
        }
    }
}
