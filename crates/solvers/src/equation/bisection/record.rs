/// One iteration of the bisection method.
///
/// Records are produced by the solver and never modified afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct IterationRecord {
    /// Iteration number, starting at 1.
    pub index: usize,
    /// Left end of the bracket searched in this iteration.
    pub a: f64,
    /// Right end of the bracket searched in this iteration.
    pub b: f64,
    /// Bracket midpoint, `(a + b) / 2`.
    pub c: f64,
    /// Sign of `f(a) * f(c)`.
    pub sign: SignClass,
    /// Function value at the midpoint.
    pub fc: f64,
}

impl IterationRecord {
    /// Returns the width of the bracket searched in this iteration.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }
}

/// Classification of the product `f(a) * f(c)`.
///
/// `Negative` means the root lies in `[a, c]`; otherwise the search moves to
/// `[c, b]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub enum SignClass {
    /// `f(a)` and `f(c)` have opposite signs; the root lies in `[a, c]`.
    Negative,
    /// No sign change between `a` and `c`; the root lies in `[c, b]`.
    Positive,
}

impl SignClass {
    /// Classifies a sign product.
    ///
    /// Zero and `NaN` are `Positive`.
    #[must_use]
    pub fn of_product(product: f64) -> Self {
        if product < 0.0 {
            SignClass::Negative
        } else {
            SignClass::Positive
        }
    }
}
