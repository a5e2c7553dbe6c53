use std::error::Error as StdError;

use thiserror::Error;

use crate::equation::EvalError;

/// Errors that can occur during bisection.
#[derive(Debug, Error)]
pub enum Error {
    #[error("no sign change in [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange { a: f64, b: f64, fa: f64, fb: f64 },

    #[error("function evaluation failed at x = {x}")]
    Evaluation {
        x: f64,
        #[source]
        source: Box<dyn StdError + Send + Sync>,
    },
}

impl<E> From<EvalError<E>> for Error
where
    E: StdError + Send + Sync + 'static,
{
    fn from(err: EvalError<E>) -> Self {
        Self::Evaluation {
            x: err.x,
            source: Box::new(err.source),
        }
    }
}
