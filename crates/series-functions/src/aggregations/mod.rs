//! Aggregations: analyses that reduce the first series to a scalar.
//!
//! # Overview
//!
//! All aggregations in this module share the following contract:
//!
//! - **At least one series**: calling with an empty argument list fails with
//!   [`InsufficientSeries`](crate::error::Error::InsufficientSeries)
//! - **First series only**: further series are ignored
//! - **Empty is NaN**: an empty first series yields `NaN` (COUNT yields `0.0`)
//! - **No subquery**: the host never has to run a secondary lookup
//!
//! # Aggregations
//!
//! - [`Min`] / [`Max`] - extreme values
//! - [`Avg`] / [`Sum`] / [`Count`] / [`Dev`] - summary statistics
//! - [`Percentile`] - nearest-rank percentile
//! - [`First`] / [`Last`] - boundary values
//! - [`Range`] - `max - min`
//! - [`Diff`] / [`SignedDiff`] - change from first to last value

pub mod endpoints;
pub mod max;
pub mod min;
pub mod percentile;
pub mod range;
pub mod statistics;

pub use endpoints::{Diff, First, Last, SignedDiff};
pub use max::Max;
pub use min::Min;
pub use percentile::Percentile;
pub use range::Range;
pub use statistics::{Avg, Count, Dev, Sum};

use crate::error::{Error, Result};
use crate::kind::AnalysisType;
use crate::series::TimeSeries;

/// Returns the first supplied series or the argument error for `kind`.
#[inline]
pub(crate) fn first_series<'a>(
    kind: AnalysisType,
    series: &[&'a TimeSeries],
) -> Result<&'a TimeSeries> {
    series
        .first()
        .copied()
        .ok_or(Error::InsufficientSeries {
            function: kind.name(),
            required: 1,
            actual: 0,
        })
}
