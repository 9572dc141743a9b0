//! MAX aggregation.
//!
//! Mirror image of [`Min`](super::Min): strict `>` scan seeded at index 0.

use crate::error::Result;
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

use super::first_series;

/// The maximum aggregation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Max;

impl Max {
    /// Creates the maximum aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Scans `values` for the maximum; `NaN` for an empty slice.
#[inline]
pub(crate) fn scan_max(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return f64::NAN;
    };

    let mut max = first;
    for &next in rest {
        if next > max {
            max = next;
        }
    }
    max
}

impl Analysis for Max {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Max, series)?;
        Ok(scan_max(series.values()))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Max
    }
}
