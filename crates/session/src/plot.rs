use rootstep_core::Function;
use rootstep_solvers::equation::bisection::IterationRecord;

/// Number of uniform intervals across the x window.
pub const SAMPLE_INTERVALS: usize = 200;

/// Render-ready samples of a function around a bracket.
///
/// The canvas itself is out of scope; a front end maps `x_range` and
/// `y_range` to its own pixels and strokes `curve` in order.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Frame {
    /// Horizontal window, one unit beyond the bounds on each side.
    pub x_range: [f64; 2],
    /// Vertical window with 10% padding, or `None` if nothing was plottable.
    pub y_range: Option<[f64; 2]>,
    /// `(x, f(x))` points with finite values, in increasing `x`.
    pub curve: Vec<[f64; 2]>,
    /// Markers for the most recent iteration.
    pub overlay: Option<Overlay>,
}

/// Bracket and midpoint markers taken from one iteration record.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde-derive",
    derive(serde::Serialize, serde::Deserialize)
)]
pub struct Overlay {
    /// Left end of the bracket.
    pub a: f64,
    /// Right end of the bracket.
    pub b: f64,
    /// Midpoint marker.
    pub c: f64,
    /// Function value at the midpoint.
    pub fc: f64,
}

impl From<&IterationRecord> for Overlay {
    fn from(record: &IterationRecord) -> Self {
        Self {
            a: record.a,
            b: record.b,
            c: record.c,
            fc: record.fc,
        }
    }
}

impl Frame {
    /// Samples `function` over the window around `bounds`.
    ///
    /// Points where evaluation fails or is not finite are skipped, leaving
    /// gaps in the curve rather than an error.
    pub fn sample<F: Function>(function: &F, bounds: [f64; 2], records: &[IterationRecord]) -> Self {
        let [a, b] = bounds;
        let x_min = a.min(b) - 1.0;
        let x_max = a.max(b) + 1.0;
        let dx = (x_max - x_min) / SAMPLE_INTERVALS as f64;

        let curve: Vec<[f64; 2]> = (0..=SAMPLE_INTERVALS)
            .map(|i| x_min + dx * i as f64)
            .filter_map(|x| match function.call(x) {
                Ok(y) if y.is_finite() => Some([x, y]),
                _ => None,
            })
            .collect();

        Self {
            x_range: [x_min, x_max],
            y_range: padded_range(&curve),
            curve,
            overlay: records.last().map(Overlay::from),
        }
    }

    /// Returns true if `y = 0` lies inside the vertical window.
    #[must_use]
    pub fn shows_x_axis(&self) -> bool {
        self.y_range.is_some_and(|[lo, hi]| lo <= 0.0 && 0.0 <= hi)
    }
}

/// Min/max of the sampled values, widened by 10% of the span on each side.
///
/// A flat curve has no span, so it gets one unit of padding instead.
fn padded_range(curve: &[[f64; 2]]) -> Option<[f64; 2]> {
    let (lo, hi) = curve
        .iter()
        .map(|&[_, y]| y)
        .fold(None, |range, y| match range {
            None => Some((y, y)),
            Some((lo, hi)) => Some((f64::min(lo, y), f64::max(hi, y))),
        })?;

    let span = hi - lo;
    let pad = if span > 0.0 { 0.1 * span } else { 1.0 };
    Some([lo - pad, hi + pad])
}
