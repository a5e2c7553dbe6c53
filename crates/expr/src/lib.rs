//! Single-variable math expressions for the rootstep root finder.
//!
//! A formula such as `x^3 - x - 2` or `sin(x) - ln(x + 1)` is tokenized,
//! parsed into an [`Expr`] tree, and evaluated by walking that tree. No text
//! is ever rewritten or executed as code.
//!
//! # Vocabulary
//!
//! - the variable `x`
//! - numbers: `2`, `0.5`, `.5`, `1e-3`
//! - operators `+ - * /`, unary `-`/`+`, and power `^` (or `**`)
//! - functions `sin cos tan ln log sqrt abs exp` (`log` is base 10)
//! - constants `pi` and `e`
//!
//! Nesting (parentheses, signs, `^` and chained operators) is capped at
//! [`MAX_DEPTH`] levels; deeper formulas are a [`CompileError::TooDeep`].
//!
//! # Compiling
//!
//! [`compile`] parses and then evaluates once at `x = 0` so that unknown
//! names are reported up front. [`Expression::parse`] only checks syntax and
//! defers name errors to evaluation.
//!
//! ```
//! use rootstep_expr::compile;
//!
//! let f = compile("x^3 - x - 2").unwrap();
//! assert!((f.eval(1.5).unwrap() + 0.125).abs() < 1e-12);
//! ```

mod ast;
mod error;
mod expression;
mod parse;
mod token;

pub use ast::{BinaryOp, Constant, Expr, Func};
pub use error::{CompileError, EvalError};
pub use expression::{Expression, NEUTRAL_POINT, compile};
pub use parse::MAX_DEPTH;
