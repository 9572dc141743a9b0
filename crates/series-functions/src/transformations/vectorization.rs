//! VECTOR (vectorization) transformation.
//!
//! Removes samples that lie on, or very close to, the line through a moving
//! pair of reference points. The result keeps the visual shape of the
//! series with fewer samples, so later aggregations touch less data.
//!
//! # Algorithm
//!
//! A greedy, single pass variant of perpendicular-distance simplification:
//!
//! ```text
//! a, b = 0, 1                      keep a, keep b
//! for i in 2..n:
//!     d = distance(point i, line a-b)
//!     if d < tolerance:            drop i-1, keep i   (chord absorbs i-1)
//!     elif i is last:              keep i, stop
//!     else:                        a, b = i, i+1; keep both; skip i+1
//! ```
//!
//! with timestamps as x and values as y:
//!
//! ```text
//!      (Ay-Cy)(Bx-Ax) - (Ax-Cx)(By-Ay)
//! s = ---------------------------------        distance = |s| * L
//!                   L^2
//! ```
//!
//! A chord of length zero gives `NaN` or an infinite distance, which never
//! compares below the tolerance, so the point is kept. Inputs of exactly
//! three samples are returned unchanged.
//!
//! # Complexity
//!
//! O(n) time, one `Vec<bool>` of scratch space plus the output.

use tracing::debug;

use crate::error::{Error, Result};
use crate::kind::TransformationType;
use crate::series::TimeSeries;
use crate::traits::Transformation;

const ARGUMENTS: &[&str] = &["tolerance"];

/// Default distance below which a point is absorbed by the current chord.
pub const DEFAULT_TOLERANCE: f64 = 0.01;

/// Vectorization configuration.
///
/// # Example
///
/// ```
/// use series_functions::series::TimeSeries;
/// use series_functions::traits::Transformation;
/// use series_functions::transformations::Vectorization;
///
/// let series = TimeSeries::builder("disk.io")
///     .points(vec![0, 1, 2, 3], vec![0.0, 1.0, 2.0, 3.0])
///     .build()
///     .unwrap();
///
/// let vectorized = Vectorization::new().transform(&series).unwrap();
/// assert_eq!(vectorized.timestamps(), &[0, 3]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vectorization {
    tolerance: f64,
}

impl Default for Vectorization {
    /// Creates a vectorization with the default tolerance (0.01).
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
        }
    }
}

impl Vectorization {
    /// Creates a vectorization with the default tolerance (0.01).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the distance tolerance.
    ///
    /// Default: 0.01
    #[must_use]
    pub const fn tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Returns the distance tolerance.
    #[must_use]
    pub const fn get_tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Computes which samples survive vectorization.
    ///
    /// The returned mask has one entry per sample.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` if the tolerance is negative or not finite
    /// - `Error::LengthMismatch` if `timestamps` and `values` differ in length
    pub fn keep_mask(&self, timestamps: &[i64], values: &[f64]) -> Result<Vec<bool>> {
        self.validate()?;
        if timestamps.len() != values.len() {
            return Err(Error::LengthMismatch {
                timestamps: timestamps.len(),
                values: values.len(),
            });
        }
        let n = timestamps.len();

        if n == 3 {
            return Ok(vec![true; n]);
        }

        let mut keep = vec![false; n];
        keep.iter_mut().take(2).for_each(|k| *k = true);

        let (mut a, mut b) = (0, 1);
        let mut i = 2;
        while i < n {
            let dist = distance(
                (timestamps[i], values[i]),
                (timestamps[a], values[a]),
                (timestamps[b], values[b]),
            );

            if dist < self.tolerance {
                keep[i - 1] = false;
                keep[i] = true;
                i += 1;
            } else if i + 1 >= n {
                keep[i] = true;
                break;
            } else {
                a = i;
                b = i + 1;
                keep[a] = true;
                keep[b] = true;
                i += 2;
            }
        }

        Ok(keep)
    }

    fn validate(&self) -> Result<()> {
        if self.tolerance.is_finite() && self.tolerance >= 0.0 {
            Ok(())
        } else {
            Err(Error::InvalidArgument {
                function: TransformationType::Vector.name(),
                argument: "tolerance",
                reason: "must be finite and non-negative",
            })
        }
    }
}

/// Difference `to - from` of two timestamps as `f64`, exact for any pair
/// that fits the mantissa and never overflowing.
#[allow(clippy::cast_precision_loss)]
#[inline]
fn delta(to: i64, from: i64) -> f64 {
    (i128::from(to) - i128::from(from)) as f64
}

/// Perpendicular distance from `p` to the line through `a` and `b`.
#[inline]
fn distance(p: (i64, f64), a: (i64, f64), b: (i64, f64)) -> f64 {
    let dx = delta(b.0, a.0);
    let dy = b.1 - a.1;
    let l_2 = dx * dx + dy * dy;
    let s = ((a.1 - p.1) * dx - delta(a.0, p.0) * dy) / l_2;
    s.abs() * l_2.sqrt()
}

impl Transformation for Vectorization {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let timestamps = series.timestamps();
        let values = series.values();
        let keep = self.keep_mask(timestamps, values)?;

        let kept = keep.iter().filter(|&&k| k).count();
        let mut out_timestamps = Vec::with_capacity(kept);
        let mut out_values = Vec::with_capacity(kept);
        for (i, &k) in keep.iter().enumerate() {
            if k {
                out_timestamps.push(timestamps[i]);
                out_values.push(values[i]);
            }
        }

        debug!(
            metric = series.metric(),
            input = series.len(),
            output = kept,
            tolerance = self.tolerance,
            "vectorized time series"
        );

        series.derive().points(out_timestamps, out_values).build()
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Vector
    }

    fn arguments(&self) -> &'static [&'static str] {
        ARGUMENTS
    }
}
