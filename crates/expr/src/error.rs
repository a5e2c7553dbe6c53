use thiserror::Error;

/// Errors raised while turning source text into an [`Expression`].
///
/// [`Expression`]: crate::Expression
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CompileError {
    #[error("expression is empty")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unexpected '{found}' at position {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("parenthesis opened at position {pos} is never closed")]
    UnclosedParen { pos: usize },

    #[error("expression nests too deeply at position {pos}")]
    TooDeep { pos: usize },

    #[error("expression does not evaluate: {0}")]
    Unresolved(#[from] EvalError),
}

/// Structural faults found while evaluating an expression.
///
/// Undefined results such as `ln(-1)` or `1/0` are not errors; they evaluate
/// to `NaN` or an infinity.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum EvalError {
    #[error("unknown variable `{name}`")]
    UnknownVariable { name: String },

    #[error("unknown function `{name}`")]
    UnknownFunction { name: String },
}
