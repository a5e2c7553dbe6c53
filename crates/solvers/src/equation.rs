//! Solvers for equations `f(x) = 0` of a single real variable.
//!
//! Functions are anything implementing [`rootstep_core::Function`]; plain
//! closures and compiled expressions both qualify.

mod evaluate;

pub use evaluate::{EvalError, evaluate};

pub mod bisection;
