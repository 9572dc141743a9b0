//! Aggregations that only look at the first and last sample:
//! FIRST, LAST, DIFF and SDIFF.

use crate::error::Result;
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

use super::first_series;

/// Returns `(first, last)` values, or `None` for an empty series.
#[inline]
fn endpoints(series: &TimeSeries) -> Option<(f64, f64)> {
    let values = series.values();
    Some((*values.first()?, *values.last()?))
}

/// Value of the first sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct First;

impl First {
    /// Creates the first-value aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for First {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::First, series)?;
        Ok(endpoints(series).map_or(f64::NAN, |(first, _)| first))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::First
    }
}

/// Value of the last sample.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Last;

impl Last {
    /// Creates the last-value aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Last {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Last, series)?;
        Ok(endpoints(series).map_or(f64::NAN, |(_, last)| last))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Last
    }
}

/// Absolute difference between the last and the first value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Diff;

impl Diff {
    /// Creates the absolute difference aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Diff {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Diff, series)?;
        Ok(endpoints(series).map_or(f64::NAN, |(first, last)| (last - first).abs()))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Diff
    }
}

/// Signed difference `last - first`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SignedDiff;

impl SignedDiff {
    /// Creates the signed difference aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for SignedDiff {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::SignedDiff, series)?;
        Ok(endpoints(series).map_or(f64::NAN, |(first, last)| last - first))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::SignedDiff
    }
}
