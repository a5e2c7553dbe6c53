use std::convert::Infallible;

/// A real-valued function of a single real variable.
///
/// Evaluation may fail for structural reasons (an unknown name in a parsed
/// expression, for example). A mathematically undefined result is not a
/// failure: implementations return `NaN` or an infinity and let it propagate.
///
/// Plain closures of type `Fn(f64) -> f64` implement this trait with an
/// [`Infallible`] error.
pub trait Function {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Evaluates the function at `x`.
    ///
    /// # Errors
    ///
    /// Returns an error if the function cannot be evaluated at all.
    fn call(&self, x: f64) -> Result<f64, Self::Error>;
}

impl<F> Function for F
where
    F: Fn(f64) -> f64,
{
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Self::Error> {
        Ok(self(x))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_twice<F: Function>(function: &F, x: f64) -> Result<f64, F::Error> {
        let once = function.call(x)?;
        function.call(once)
    }

    #[test]
    fn closures_are_functions() {
        let double = |x: f64| 2.0 * x;
        assert_eq!(call_twice(&double, 1.5), Ok(6.0));
    }

    #[test]
    fn non_finite_values_pass_through() {
        let reciprocal = |x: f64| 1.0 / x;
        assert_eq!(reciprocal.call(0.0), Ok(f64::INFINITY));

        let root = |x: f64| x.sqrt();
        assert!(root.call(-1.0).is_ok_and(f64::is_nan));
    }
}
