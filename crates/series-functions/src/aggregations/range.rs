//! RANGE aggregation: `max - min` of the first series.

use crate::error::Result;
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

use super::max::scan_max;
use super::min::scan_min;
use super::first_series;

/// Spread between the largest and the smallest value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Range;

impl Range {
    /// Creates the range aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Range {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Range, series)?;
        let values = series.values();
        Ok(scan_max(values) - scan_min(values))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Range
    }
}
