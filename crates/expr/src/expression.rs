use std::{fmt, str::FromStr};

use rootstep_core::Function;

use crate::{CompileError, EvalError, Expr, parse::parse, token::tokenize};

/// Point at which [`compile`] test-evaluates an expression.
pub const NEUTRAL_POINT: f64 = 0.0;

/// A parsed single-variable expression, ready to evaluate many times.
#[derive(Debug, Clone, PartialEq)]
pub struct Expression {
    source: String,
    root: Expr,
}

impl Expression {
    /// Parses `source` without resolving names.
    ///
    /// Unknown variables or functions are only reported when the expression
    /// is evaluated. Use [`compile`] to catch them immediately.
    ///
    /// # Errors
    ///
    /// Returns an error if `source` is empty or not syntactically valid.
    pub fn parse(source: &str) -> Result<Self, CompileError> {
        let tokens = tokenize(source)?;
        let root = parse(&tokens)?;
        Ok(Self {
            source: source.to_string(),
            root,
        })
    }

    /// Returns the text this expression was parsed from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Returns the parsed tree.
    #[must_use]
    pub fn ast(&self) -> &Expr {
        &self.root
    }

    /// Evaluates the expression at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the expression references an unknown name.
    pub fn eval(&self, x: f64) -> Result<f64, EvalError> {
        self.root.eval(x)
    }
}

impl Function for Expression {
    type Error = EvalError;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        self.eval(x)
    }
}

impl FromStr for Expression {
    type Err = CompileError;

    fn from_str(source: &str) -> Result<Self, Self::Err> {
        compile(source)
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.source)
    }
}

/// Parses `source` and checks that every name in it resolves.
///
/// The check is a single evaluation at [`NEUTRAL_POINT`]. Its value is
/// discarded, so a `NaN` or infinite result there (as for `ln(x)`) is fine.
///
/// # Errors
///
/// Returns an error if `source` is not valid syntax or uses an unknown name.
pub fn compile(source: &str) -> Result<Expression, CompileError> {
    let expression = Expression::parse(source)?;
    expression.eval(NEUTRAL_POINT)?;
    Ok(expression)
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::f64::consts;

    use approx::assert_relative_eq;

    #[test]
    fn evaluates_cubic() {
        let f = compile("x^3 - x - 2").expect("should compile");
        assert_relative_eq!(f.eval(1.0).unwrap(), -2.0);
        assert_relative_eq!(f.eval(1.5).unwrap(), -0.125);
        assert_relative_eq!(f.eval(2.0).unwrap(), 4.0);
    }

    #[test]
    fn supports_full_vocabulary() {
        let cases = [
            ("sin(pi/2)", 1.0),
            ("cos(0)", 1.0),
            ("tan(pi/4)", 1.0),
            ("ln(e)", 1.0),
            ("log(100)", 2.0),
            ("sqrt(16)", 4.0),
            ("abs(-3)", 3.0),
            ("exp(1)", consts::E),
            ("2**10", 1024.0),
            ("-2^2", -4.0),
            ("(-2)^2", 4.0),
            ("1e-3 * 1000", 1.0),
        ];
        for (source, expected) in cases {
            let f = compile(source).expect("should compile");
            assert_relative_eq!(f.eval(0.0).unwrap(), expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn e_and_exp_do_not_collide() {
        let f = compile("exp(x) - e").expect("should compile");
        assert_relative_eq!(f.eval(1.0).unwrap(), 0.0, epsilon = 1e-15);

        let g = compile("e^x").expect("should compile");
        assert_relative_eq!(g.eval(2.0).unwrap(), consts::E * consts::E, epsilon = 1e-12);
    }

    #[test]
    fn non_finite_values_propagate() {
        let f = compile("ln(x)").expect("ln(0) is -inf, not an error");
        assert_eq!(f.eval(0.0), Ok(f64::NEG_INFINITY));
        assert!(f.eval(-1.0).unwrap().is_nan());

        let g = compile("1/x").expect("should compile");
        assert_eq!(g.eval(0.0), Ok(f64::INFINITY));
    }

    #[test]
    fn compile_rejects_unknown_names() {
        assert_eq!(
            compile("x + y"),
            Err(CompileError::Unresolved(EvalError::UnknownVariable {
                name: "y".to_string()
            }))
        );
        assert_eq!(
            compile("sinh(x)"),
            Err(CompileError::Unresolved(EvalError::UnknownFunction {
                name: "sinh".to_string()
            }))
        );
    }

    #[test]
    fn parse_defers_unknown_names_to_evaluation() {
        let f = Expression::parse("x * k").expect("syntax is fine");
        assert_eq!(
            f.eval(1.0),
            Err(EvalError::UnknownVariable {
                name: "k".to_string()
            })
        );
        assert_eq!(
            f.call(2.0),
            Err(EvalError::UnknownVariable {
                name: "k".to_string()
            })
        );
    }

    #[test]
    fn rejects_host_language_syntax() {
        assert!(matches!(
            compile("Math.sin(x)"),
            Err(CompileError::InvalidNumber { pos: 4, .. })
        ));
        assert!(matches!(
            compile("x; 1"),
            Err(CompileError::UnexpectedChar { ch: ';', .. })
        ));
    }

    #[test]
    fn hostile_nesting_is_a_compile_error() {
        let parens = format!("{}x{}", "(".repeat(10_000), ")".repeat(10_000));
        assert!(matches!(
            compile(&parens),
            Err(CompileError::TooDeep { pos: crate::MAX_DEPTH })
        ));

        let signs = format!("{}x", "-".repeat(50_000));
        assert!(matches!(compile(&signs), Err(CompileError::TooDeep { .. })));

        let deepest = format!("{}x", "-".repeat(crate::MAX_DEPTH));
        assert_relative_eq!(compile(&deepest).unwrap().eval(3.0).unwrap(), 3.0);
    }

    #[test]
    fn from_str_compiles() {
        let f: Expression = "2*x + 1".parse().expect("should compile");
        assert_eq!(f.source(), "2*x + 1");
        assert_eq!(f.to_string(), "2*x + 1");
        assert_eq!(f.ast().to_string(), "((2 * x) + 1)");
        assert_relative_eq!(f.call(3.0).unwrap(), 7.0);

        assert!("".parse::<Expression>().is_err());
    }
}
