//! Bisection root finding with a full iteration history.
//!
//! # Algorithm
//!
//! Given `f(a)` and `f(b)` of opposite sign (or one of them zero), each
//! iteration evaluates the midpoint `c = (a + b) / 2`, records
//! `{index, a, b, c, sign of f(a)·f(c), f(c)}`, and keeps the half of the
//! bracket where the sign change persists. Iteration stops when
//! `|f(c)| < tolerance`, when `|b - a|` is no longer above the tolerance, or
//! when `max_iters` iterations have run. Running out of iterations is not an
//! error; the caller inspects the [`Solution`].
//!
//! # Drivers
//!
//! - [`solve`] / [`run_to_convergence`] run the whole loop at once.
//! - [`step`] performs one iteration against a record history, so a caller
//!   can advance the search interactively. The bracket for the next step is
//!   rebuilt from the last record, and the resulting records match the batch
//!   driver's exactly.
//!
//! # Observer Events
//!
//! [`solve`] emits one [`Event`] per iteration after the record is stored.
//! Returning [`Action::StopEarly`] ends the run with
//! [`Status::StoppedByObserver`].

mod action;
mod bracket;
mod config;
mod error;
mod event;
mod record;
mod solution;
mod step;


pub use action::Action;
pub use bracket::Bracket;
pub use config::Config;
pub use error::Error;
pub use event::Event;
pub use record::{IterationRecord, SignClass};
pub use solution::{Solution, Status};
pub use step::{Step, current_bracket, step};

use rootstep_core::{Function, Observer};

use crate::equation::evaluate;

/// Finds a root of `function` in `bounds` using the bisection method.
///
/// The observer sees every iteration record as it is produced.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if `f(a) * f(b) > 0`, or
/// [`Error::Evaluation`] if the function fails to evaluate.
pub fn solve<F, Obs>(
    function: &F,
    bounds: [f64; 2],
    config: &Config,
    mut observer: Obs,
) -> Result<Solution, Error>
where
    F: Function,
    Obs: for<'a> Observer<Event<'a>, Action>,
{
    let [mut fa, _] = check_sign_change(function, bounds)?;
    let mut bracket = Bracket::new(bounds);
    let tolerance = config.tolerance();
    let mut records = Vec::new();

    while records.len() < config.max_iters() && !bracket.is_within(tolerance) {
        let record = bisect(function, &bracket, fa, records.len() + 1)?;
        records.push(record);

        if let Some(action) = observer.observe(&Event { record: &record }) {
            match action {
                Action::StopEarly => {
                    return Ok(Solution {
                        records,
                        status: Status::StoppedByObserver,
                    });
                }
            }
        }

        if record.fc.abs() < tolerance {
            return Ok(Solution {
                records,
                status: Status::ResidualConverged,
            });
        }

        bracket.narrow(record.c, record.sign);
        if record.sign == SignClass::Positive {
            fa = record.fc;
        }
    }

    let status = if bracket.is_within(tolerance) {
        Status::WidthConverged
    } else {
        Status::MaxIters
    };

    Ok(Solution { records, status })
}

/// Runs bisection without observation.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn solve_unobserved<F: Function>(
    function: &F,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Solution, Error> {
    solve(function, bounds, config, ())
}

/// Runs bisection to completion and returns only the iteration records.
///
/// An empty vector means no iteration ran, which is distinct from a root
/// being found.
///
/// # Errors
///
/// Returns an error under the same conditions as [`solve`].
pub fn run_to_convergence<F: Function>(
    function: &F,
    bounds: [f64; 2],
    config: &Config,
) -> Result<Vec<IterationRecord>, Error> {
    solve_unobserved(function, bounds, config).map(|solution| solution.records)
}

/// Evaluates both bounds and checks that they bracket a root.
///
/// A product of exactly zero (a root at an endpoint) is accepted.
///
/// # Errors
///
/// Returns [`Error::NoSignChange`] if `f(a) * f(b) > 0`, or
/// [`Error::Evaluation`] if either evaluation fails.
pub fn check_sign_change<F: Function>(function: &F, bounds: [f64; 2]) -> Result<[f64; 2], Error> {
    let [a, b] = bounds;
    let fa = evaluate(function, a)?;
    let fb = evaluate(function, b)?;

    if fa * fb > 0.0 {
        return Err(Error::NoSignChange { a, b, fa, fb });
    }

    Ok([fa, fb])
}

/// Performs the evaluation and bookkeeping of one iteration.
fn bisect<F: Function>(
    function: &F,
    bracket: &Bracket,
    fa: f64,
    index: usize,
) -> Result<IterationRecord, Error> {
    let c = bracket.midpoint();
    let fc = evaluate(function, c)?;

    Ok(IterationRecord {
        index,
        a: bracket.a(),
        b: bracket.b(),
        c,
        sign: SignClass::of_product(fa * fc),
        fc,
    })
}
