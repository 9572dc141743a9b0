//! P (percentile) aggregation.
//!
//! Nearest-rank percentile: the values are sorted with [`f64::total_cmp`]
//! and the element at rank `ceil(p * n)` (1-based) is returned. Positive
//! `NaN` samples sort above every number.

use crate::error::{Error, Result};
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

use super::first_series;

const ARGUMENTS: &[&str] = &["percentile"];

/// Percentile aggregation configuration.
///
/// # Example
///
/// ```
/// use series_functions::aggregations::Percentile;
/// use series_functions::series::TimeSeries;
/// use series_functions::traits::Analysis;
///
/// let series = TimeSeries::builder("rt")
///     .points((0..10).collect(), (1..=10).map(f64::from).collect())
///     .build()
///     .unwrap();
///
/// let p95 = Percentile::new().percentile(0.95);
/// assert_eq!(p95.execute(&[&series]).unwrap(), 10.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Percentile {
    percentile: f64,
}

impl Default for Percentile {
    /// Creates a median (0.5) configuration.
    fn default() -> Self {
        Self { percentile: 0.5 }
    }
}

impl Percentile {
    /// Creates a median configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the percentile as a fraction in `(0, 1]`.
    ///
    /// Default: 0.5
    #[must_use]
    pub const fn percentile(mut self, percentile: f64) -> Self {
        self.percentile = percentile;
        self
    }

    /// Returns the configured percentile.
    #[must_use]
    pub const fn get_percentile(&self) -> f64 {
        self.percentile
    }

    fn validate(&self) -> Result<()> {
        if self.percentile > 0.0 && self.percentile <= 1.0 {
            Ok(())
        } else {
            Err(Error::InvalidArgument {
                function: AnalysisType::Percentile.name(),
                argument: "percentile",
                reason: "must be in (0, 1]",
            })
        }
    }
}

impl Analysis for Percentile {
    #[allow(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Percentile, series)?;
        self.validate()?;

        let values = series.values();
        if values.is_empty() {
            return Ok(f64::NAN);
        }

        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let rank = (self.percentile * sorted.len() as f64).ceil() as usize;
        let index = rank.saturating_sub(1).min(sorted.len() - 1);
        Ok(sorted[index])
    }

    fn arguments(&self) -> &'static [&'static str] {
        ARGUMENTS
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Percentile
    }
}
