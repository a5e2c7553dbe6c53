//! Numerical solvers for the rootstep workspace.
//!
//! - [`equation::bisection`]: bracketed root finding that records every
//!   iteration, driven either to completion or one step at a time

pub mod equation;
