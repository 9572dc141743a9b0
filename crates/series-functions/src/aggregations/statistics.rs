//! Statistical aggregations: AVG, SUM, COUNT and DEV.
//!
//! # Mathematical Conventions
//!
//! - **Population formulas**: DEV divides by n, not n-1
//! - **NaN**: propagates through AVG, SUM and DEV like any IEEE arithmetic
//! - **COUNT**: an empty series counts as `0.0`, the only aggregation whose
//!   empty result is not `NaN`

use crate::error::Result;
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

use super::first_series;

#[allow(clippy::cast_precision_loss)]
#[inline]
fn len_as_f64(values: &[f64]) -> f64 {
    values.len() as f64
}

#[inline]
fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / len_as_f64(values)
}

// =============================================================================
// AVG
// =============================================================================

/// Arithmetic mean of the first series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Avg;

impl Avg {
    /// Creates the average aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Avg {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Avg, series)?;
        Ok(mean(series.values()))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Avg
    }
}

// =============================================================================
// SUM
// =============================================================================

/// Sum of the values of the first series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Sum;

impl Sum {
    /// Creates the sum aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Sum {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Sum, series)?;
        if series.is_empty() {
            return Ok(f64::NAN);
        }
        Ok(series.values().iter().sum())
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Sum
    }
}

// =============================================================================
// COUNT
// =============================================================================

/// Number of samples in the first series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Count;

impl Count {
    /// Creates the count aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Count {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Count, series)?;
        Ok(len_as_f64(series.values()))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Count
    }
}

// =============================================================================
// DEV
// =============================================================================

/// Population standard deviation of the first series.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Dev;

impl Dev {
    /// Creates the standard deviation aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Analysis for Dev {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Dev, series)?;
        let values = series.values();
        if values.is_empty() {
            return Ok(f64::NAN);
        }

        let mean = mean(values);
        let variance = values
            .iter()
            .map(|&v| {
                let d = v - mean;
                d * d
            })
            .sum::<f64>()
            / len_as_f64(values);
        Ok(variance.sqrt())
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Dev
    }
}
