//! DTW (dynamic time warping) analysis.
//!
//! Compares the first series against a reference series the host obtains by
//! running [`Dtw::subquery`](crate::traits::Analysis::subquery). The result
//! is the accumulated warping cost, the sum of `|a_i - b_j|` over the
//! cheapest monotone alignment of both value sequences.
//!
//! # Band
//!
//! Row `i` of the cost matrix is only evaluated for columns between the
//! diagonal position of row `i` and that of row `i + 1`, widened by
//! `search_radius` on both sides. Consecutive rows always overlap, so the
//! corner cell stays reachable for any radius, and the cost is
//! `O(n * (m / n + radius))`.

use crate::error::{require_series, Error, Result};
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

const ARGUMENTS: &[&str] = &["subquery", "search_radius"];

/// Dynamic time warping against a subquery result.
///
/// # Example
///
/// ```
/// use series_functions::analyses::Dtw;
/// use series_functions::series::TimeSeries;
/// use series_functions::traits::Analysis;
///
/// let dtw = Dtw::new("metric:load AND host:reference").search_radius(2);
/// assert!(dtw.needs_subquery());
/// assert_eq!(dtw.subquery(), Some("metric:load AND host:reference"));
///
/// let observed = TimeSeries::builder("load")
///     .points(vec![0, 1, 2, 3], vec![1.0, 2.0, 3.0, 4.0])
///     .build()
///     .unwrap();
/// // what the host fetched by running the subquery
/// let reference = TimeSeries::builder("load")
///     .points(vec![0, 1, 2, 3, 4], vec![1.0, 1.0, 2.0, 3.0, 4.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(dtw.execute(&[&observed, &reference]).unwrap(), 0.0);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dtw {
    subquery: String,
    search_radius: usize,
}

impl Dtw {
    /// Creates a DTW analysis against the series selected by `subquery`.
    ///
    /// The search radius defaults to 5.
    #[must_use]
    pub fn new(subquery: impl Into<String>) -> Self {
        Self {
            subquery: subquery.into(),
            search_radius: 5,
        }
    }

    /// Sets how many cells around the diagonal band are evaluated.
    ///
    /// Default: 5
    #[must_use]
    pub const fn search_radius(mut self, search_radius: usize) -> Self {
        self.search_radius = search_radius;
        self
    }

    /// Returns the configured search radius.
    #[must_use]
    pub const fn get_search_radius(&self) -> usize {
        self.search_radius
    }
}

impl Analysis for Dtw {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        require_series(AnalysisType::Dtw.name(), 2, series.len())?;
        if self.subquery.trim().is_empty() {
            return Err(Error::InvalidArgument {
                function: AnalysisType::Dtw.name(),
                argument: "subquery",
                reason: "must not be blank",
            });
        }

        let (observed, reference) = (series[0].values(), series[1].values());
        if observed.is_empty() || reference.is_empty() {
            return Ok(f64::NAN);
        }
        Ok(warping_cost(observed, reference, self.search_radius))
    }

    fn arguments(&self) -> &'static [&'static str] {
        ARGUMENTS
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Dtw
    }

    fn needs_subquery(&self) -> bool {
        true
    }

    fn subquery(&self) -> Option<&str> {
        Some(&self.subquery)
    }
}

/// Column bounds `[lo, hi]` of row `row` for `cols` columns.
#[allow(
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss
)]
fn band(row: usize, rows: usize, cols: usize, radius: usize) -> (usize, usize) {
    let slope = (cols - 1) as f64 / rows.saturating_sub(1).max(1) as f64;
    let lo = ((row as f64 * slope).floor() as usize).saturating_sub(radius);
    let hi = (((row + 1) as f64 * slope).ceil() as usize)
        .saturating_add(radius)
        .min(cols - 1);
    (lo.min(cols - 1), hi)
}

/// Banded DTW over two non-empty slices, keeping two rows of the matrix.
fn warping_cost(a: &[f64], b: &[f64], radius: usize) -> f64 {
    let (rows, cols) = (a.len(), b.len());
    let mut prev = vec![f64::INFINITY; cols];
    let mut curr = vec![f64::INFINITY; cols];
    let mut prev_band = (0, 0);

    for (i, &x) in a.iter().enumerate() {
        let (lo, hi) = band(i, rows, cols, radius);
        for j in lo..=hi {
            let cost = (x - b[j]).abs();
            let best = if i == 0 && j == 0 {
                0.0
            } else {
                let up = if i > 0 { prev[j] } else { f64::INFINITY };
                let left = if j > lo { curr[j - 1] } else { f64::INFINITY };
                let diag = if i > 0 && j > 0 { prev[j - 1] } else { f64::INFINITY };
                up.min(left).min(diag)
            };
            curr[j] = cost + best;
        }

        // the row about to be reused must read as unreachable outside its band
        std::mem::swap(&mut prev, &mut curr);
        for cell in &mut curr[prev_band.0..=prev_band.1] {
            *cell = f64::INFINITY;
        }
        prev_band = (lo, hi);
    }

    prev[cols - 1]
}
