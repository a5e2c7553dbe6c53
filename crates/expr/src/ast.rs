use std::{f64::consts, fmt};

use crate::EvalError;

/// A parsed expression tree.
///
/// Names the parser does not recognize are kept as [`Expr::Unbound`] and
/// [`Expr::UnboundCall`] so that they fail when evaluated rather than when
/// parsed.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// A numeric literal.
    Number(f64),
    /// The independent variable `x`.
    Variable,
    /// A named constant.
    Constant(Constant),
    /// An unknown name used as a value.
    Unbound(String),
    /// Unary negation.
    Neg(Box<Expr>),
    /// A binary operation.
    Binary {
        op: BinaryOp,
        lhs: Box<Expr>,
        rhs: Box<Expr>,
    },
    /// A call to a known function.
    Call { func: Func, arg: Box<Expr> },
    /// A call to an unknown function name.
    UnboundCall { name: String, arg: Box<Expr> },
}

impl Expr {
    /// Evaluates the tree with the variable bound to `x`.
    ///
    /// Every node is visited, so an unbound name fails regardless of `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the tree contains an unknown variable or function.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        match self {
            Expr::Number(value) => Ok(*value),
            Expr::Variable => Ok(x),
            Expr::Constant(constant) => Ok(constant.value()),
            Expr::Unbound(name) => Err(EvalError::UnknownVariable { name: name.clone() }),
            Expr::Neg(inner) => Ok(-inner.eval(x)?),
            Expr::Binary { op, lhs, rhs } => {
                let lhs = lhs.eval(x)?;
                let rhs = rhs.eval(x)?;
                Ok(op.apply(lhs, rhs))
            }
            Expr::Call { func, arg } => Ok(func.apply(arg.eval(x)?)),
            Expr::UnboundCall { name, .. } => {
                Err(EvalError::UnknownFunction { name: name.clone() })
            }
        }
    }
}

/// Fully parenthesized rendering, useful for checking how a formula parsed.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Number(value) => write!(f, "{value}"),
            Expr::Variable => f.write_str("x"),
            Expr::Constant(constant) => write!(f, "{constant}"),
            Expr::Unbound(name) => f.write_str(name),
            Expr::Neg(inner) => write!(f, "(-{inner})"),
            Expr::Binary { op, lhs, rhs } => write!(f, "({lhs} {op} {rhs})"),
            Expr::Call { func, arg } => write!(f, "{func}({arg})"),
            Expr::UnboundCall { name, arg } => write!(f, "{name}({arg})"),
        }
    }
}

/// Binary operators in the expression language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinaryOp {
    fn apply(self, lhs: f64, rhs: f64) -> f64 {
        match self {
            BinaryOp::Add => lhs + rhs,
            BinaryOp::Sub => lhs - rhs,
            BinaryOp::Mul => lhs * rhs,
            BinaryOp::Div => lhs / rhs,
            BinaryOp::Pow => lhs.powf(rhs),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Pow => "^",
        })
    }
}

/// Named constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constant {
    Pi,
    E,
}

impl Constant {
    /// Looks up a constant by its source name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "pi" => Some(Constant::Pi),
            "e" => Some(Constant::E),
            _ => None,
        }
    }

    /// Returns the numeric value of the constant.
    #[must_use]
    pub fn value(self) -> f64 {
        match self {
            Constant::Pi => consts::PI,
            Constant::E => consts::E,
        }
    }
}

impl fmt::Display for Constant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Constant::Pi => "pi",
            Constant::E => "e",
        })
    }
}

/// Unary functions available in expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Func {
    Sin,
    Cos,
    Tan,
    /// Natural logarithm.
    Ln,
    /// Base-10 logarithm.
    Log,
    Sqrt,
    Abs,
    Exp,
}

impl Func {
    /// Looks up a function by its source name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "sin" => Some(Func::Sin),
            "cos" => Some(Func::Cos),
            "tan" => Some(Func::Tan),
            "ln" => Some(Func::Ln),
            "log" => Some(Func::Log),
            "sqrt" => Some(Func::Sqrt),
            "abs" => Some(Func::Abs),
            "exp" => Some(Func::Exp),
            _ => None,
        }
    }

    /// Returns the name used in source text.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Func::Sin => "sin",
            Func::Cos => "cos",
            Func::Tan => "tan",
            Func::Ln => "ln",
            Func::Log => "log",
            Func::Sqrt => "sqrt",
            Func::Abs => "abs",
            Func::Exp => "exp",
        }
    }

    fn apply(self, value: f64) -> f64 {
        match self {
            Func::Sin => value.sin(),
            Func::Cos => value.cos(),
            Func::Tan => value.tan(),
            Func::Ln => value.ln(),
            Func::Log => value.log10(),
            Func::Sqrt => value.sqrt(),
            Func::Abs => value.abs(),
            Func::Exp => value.exp(),
        }
    }
}

impl fmt::Display for Func {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
