//! MIN aggregation.
//!
//! Returns the smallest value of the first series.
//!
//! # Algorithm
//!
//! A single linear scan seeded with the value at index 0, replaced whenever a
//! later value compares strictly smaller. A `NaN` sample never compares
//! smaller, so it is skipped, unless it sits at index 0, in which case it
//! is the result.

use crate::error::Result;
use crate::kind::AnalysisType;
use crate::series::TimeSeries;
use crate::traits::Analysis;

use super::first_series;

/// The minimum aggregation.
///
/// # Example
///
/// ```
/// use series_functions::aggregations::Min;
/// use series_functions::series::TimeSeries;
/// use series_functions::traits::Analysis;
///
/// let series = TimeSeries::builder("temp")
///     .points(vec![0, 1, 2], vec![5.0, 3.0, 5.0])
///     .build()
///     .unwrap();
///
/// assert_eq!(Min::new().execute(&[&series]).unwrap(), 3.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Min;

impl Min {
    /// Creates the minimum aggregation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

/// Scans `values` for the minimum; `NaN` for an empty slice.
#[inline]
pub(crate) fn scan_min(values: &[f64]) -> f64 {
    let Some((&first, rest)) = values.split_first() else {
        return f64::NAN;
    };

    let mut min = first;
    for &next in rest {
        if next < min {
            min = next;
        }
    }
    min
}

impl Analysis for Min {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        let series = first_series(AnalysisType::Min, series)?;
        Ok(scan_min(series.values()))
    }

    fn kind(&self) -> AnalysisType {
        AnalysisType::Min
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::error::Error;

    fn series(values: Vec<f64>) -> TimeSeries {
        let timestamps = (0..values.len() as i64).collect();
        TimeSeries::builder("m")
            .points(timestamps, values)
            .build()
            .unwrap()
    }

    #[test]
    fn test_min_basic() {
        let s = series(vec![5.0, 3.0, 5.0]);
        assert_eq!(Min::new().execute(&[&s]).unwrap(), 3.0);
    }

    #[test]
    fn test_min_empty_series_is_nan() {
        let s = TimeSeries::empty("m");
        assert!(Min::new().execute(&[&s]).unwrap().is_nan());
    }

    #[test]
    fn test_min_no_series() {
        let result = Min::new().execute(&[]);
        assert_eq!(
            result,
            Err(Error::InsufficientSeries {
                function: "MIN",
                required: 1,
                actual: 0,
            })
        );
    }

    #[test]
    fn test_min_only_first_series() {
        let a = series(vec![4.0, 6.0]);
        let b = series(vec![-100.0]);
        assert_eq!(Min::new().execute(&[&a, &b]).unwrap(), 4.0);
    }

    #[test]
    fn test_min_single_value() {
        let s = series(vec![7.5]);
        assert_eq!(Min::new().execute(&[&s]).unwrap(), 7.5);
    }

    #[test]
    fn test_min_negative_values() {
        let s = series(vec![-1.0, -3.5, 2.0, -3.0]);
        assert_eq!(Min::new().execute(&[&s]).unwrap(), -3.5);
    }

    #[test]
    fn test_min_nan_inside_is_skipped() {
        let s = series(vec![2.0, f64::NAN, 1.0]);
        assert_eq!(Min::new().execute(&[&s]).unwrap(), 1.0);
    }

    #[test]
    fn test_min_leading_nan_propagates() {
        let s = series(vec![f64::NAN, 1.0, 0.5]);
        assert!(Min::new().execute(&[&s]).unwrap().is_nan());
    }

    #[test]
    fn test_min_descriptor() {
        let min = Min::new();
        assert_eq!(min.kind(), AnalysisType::Min);
        assert!(min.arguments().is_empty());
        assert!(!min.needs_subquery());
        assert_eq!(min.subquery(), None);
    }
}
