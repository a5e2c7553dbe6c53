use rootstep_expr::CompileError;
use rootstep_solvers::equation::bisection;
use thiserror::Error;

/// Errors surfaced by a [`Session`](crate::Session).
#[derive(Debug, Error)]
pub enum Error {
    /// The expression text could not be compiled.
    #[error(transparent)]
    Compile(#[from] CompileError),

    /// The solver rejected the bounds or failed to evaluate the expression.
    #[error(transparent)]
    Bisection(#[from] bisection::Error),
}
