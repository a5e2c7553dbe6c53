//! Core traits for the rootstep workspace.
//!
//! This crate defines the seams that the expression, solver, and session
//! crates build on:
//!
//! - [`Function`]: a real function of one variable that may fail to evaluate
//! - [`Observer`]: receives solver events and optionally returns control actions

mod function;
mod observer;

pub use function::Function;
pub use observer::Observer;
