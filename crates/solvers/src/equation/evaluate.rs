use thiserror::Error;

use rootstep_core::Function;

/// A function failed to evaluate at a specific point.
#[derive(Debug, Error)]
#[error("function evaluation failed at x = {x}")]
pub struct EvalError<E> {
    /// The point being evaluated.
    pub x: f64,
    /// The underlying failure.
    #[source]
    pub source: E,
}

/// Evaluates `function` at `x`, attaching `x` to any failure.
///
/// Non-finite results are returned as values.
///
/// # Errors
///
/// Returns an error if the function itself reports a failure.
pub fn evaluate<F: Function>(function: &F, x: f64) -> Result<f64, EvalError<F::Error>> {
    function.call(x).map_err(|source| EvalError { x, source })
}
