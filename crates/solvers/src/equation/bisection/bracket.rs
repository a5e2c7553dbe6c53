use super::{IterationRecord, SignClass};

/// The interval currently searched for a root.
///
/// Endpoints keep the orientation they were given; widths are absolute.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bracket {
    a: f64,
    b: f64,
}

impl Bracket {
    /// Creates a bracket from user bounds.
    #[must_use]
    pub fn new(bounds: [f64; 2]) -> Self {
        let [a, b] = bounds;
        Self { a, b }
    }

    /// Rebuilds the bracket that follows `last` from fresh evaluations of
    /// `f(last.a)` and `f(last.c)`.
    ///
    /// The half `[a, c]` is kept when the values have opposite signs,
    /// otherwise `[c, b]`.
    #[must_use]
    pub fn rederive(last: &IterationRecord, fa: f64, fc: f64) -> Self {
        let mut bracket = Self::new([last.a, last.b]);
        bracket.narrow(last.c, SignClass::of_product(fa * fc));
        bracket
    }

    /// Returns the left endpoint.
    #[must_use]
    pub fn a(&self) -> f64 {
        self.a
    }

    /// Returns the right endpoint.
    #[must_use]
    pub fn b(&self) -> f64 {
        self.b
    }

    /// Returns the endpoints as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.a, self.b]
    }

    /// Returns the midpoint `(a + b) / 2`.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.a + self.b) / 2.0
    }

    /// Returns the absolute width `|b - a|`.
    #[must_use]
    pub fn width(&self) -> f64 {
        (self.b - self.a).abs()
    }

    /// Returns true unless the width still exceeds `tolerance`.
    ///
    /// A `NaN` width or tolerance counts as within tolerance, so no further
    /// iteration is attempted.
    #[must_use]
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn is_within(&self, tolerance: f64) -> bool {
        !(self.width() > tolerance)
    }

    /// Replaces one endpoint with the midpoint `c`.
    pub(super) fn narrow(&mut self, c: f64, sign: SignClass) {
        match sign {
            SignClass::Negative => self.b = c,
            SignClass::Positive => self.a = c,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn record(a: f64, b: f64) -> IterationRecord {
        IterationRecord {
            index: 1,
            a,
            b,
            c: 0.5 * (a + b),
            sign: SignClass::Positive,
            fc: 0.0,
        }
    }

    #[test]
    fn narrow_moves_one_endpoint() {
        let mut bracket = Bracket::new([0.0, 2.0]);

        bracket.narrow(1.0, SignClass::Positive);
        assert_eq!(bracket.as_array(), [1.0, 2.0]);

        bracket.narrow(1.5, SignClass::Negative);
        assert_eq!(bracket.as_array(), [1.0, 1.5]);
        assert_relative_eq!(bracket.width(), 0.5);
    }

    #[test]
    fn rederive_keeps_half_with_sign_change() {
        let last = record(1.0, 2.0);

        let left = Bracket::rederive(&last, -2.0, 1.0);
        assert_eq!(left.as_array(), [1.0, 1.5]);

        let right = Bracket::rederive(&last, -2.0, -0.125);
        assert_eq!(right.as_array(), [1.5, 2.0]);
    }

    #[test]
    fn reversed_bounds_keep_orientation() {
        let bracket = Bracket::new([2.0, 1.0]);
        assert_relative_eq!(bracket.midpoint(), 1.5);
        assert_relative_eq!(bracket.width(), 1.0);
    }

    #[test]
    fn within_tolerance() {
        let bracket = Bracket::new([0.0, 1e-3]);
        assert!(bracket.is_within(1e-3));
        assert!(!bracket.is_within(1e-4));
        assert!(!bracket.is_within(-1.0));
        assert!(bracket.is_within(f64::NAN));
        assert!(Bracket::new([f64::NAN, 1.0]).is_within(1.0));
    }
}
