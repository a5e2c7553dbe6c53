use rootstep_solvers::equation::bisection::Config;

/// Already-parsed values from the input form.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Inputs {
    /// Formula in `x`, e.g. `x^3 - x - 2`.
    pub expression: String,
    /// Initial bracket `[a, b]`, used as given.
    pub bounds: [f64; 2],
    /// Tolerance and iteration limit.
    pub config: Config,
}

impl Inputs {
    /// Creates inputs from their parts.
    pub fn new(expression: impl Into<String>, bounds: [f64; 2], config: Config) -> Self {
        Self {
            expression: expression.into(),
            bounds,
            config,
        }
    }

    /// The preset problem: `x^3 - x - 2` on `[1, 2]` with default config.
    #[must_use]
    pub fn example() -> Self {
        Self::new("x^3 - x - 2", [1.0, 2.0], Config::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn example_matches_preset() {
        let inputs = Inputs::example();

        assert_eq!(inputs.expression, "x^3 - x - 2");
        assert_eq!(inputs.bounds, [1.0, 2.0]);
        assert_eq!(inputs.config.tolerance(), 1e-4);
        assert_eq!(inputs.config.max_iters(), 100);
    }
}
