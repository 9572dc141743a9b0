//! Transformations: functions that map a series to a new series.
//!
//! Every transformation builds its output through
//! [`TimeSeries::derive`], so the metric name and attributes of the input
//! carry over unchanged, and never reorders samples.
//!
//! # Transformations
//!
//! ## Down-sampling
//!
//! - [`Vectorization`] - perpendicular-distance line simplification
//! - [`MovingAverage`] - rolling mean over a sample window
//!
//! ## Value arithmetic
//!
//! - [`Scale`] / [`Divide`] / [`Add`] / [`Subtract`]
//!
//! ## Time
//!
//! - [`Timeshift`] - move every sample in time
//! - [`Derivative`] / [`NonNegativeDerivative`] - rate of change

pub mod arithmetic;
pub mod moving_average;
pub mod temporal;
pub mod vectorization;

pub use arithmetic::{Add, Divide, Scale, Subtract};
pub use moving_average::MovingAverage;
pub use temporal::{Derivative, NonNegativeDerivative, Timeshift};
pub use vectorization::{Vectorization, DEFAULT_TOLERANCE};

use crate::error::Result;
use crate::series::TimeSeries;

/// Builds a copy of `series` with `f` applied to every value.
pub(crate) fn map_values(series: &TimeSeries, f: impl Fn(f64) -> f64) -> Result<TimeSeries> {
    let values = series.values().iter().map(|&v| f(v)).collect();
    series
        .derive()
        .points(series.timestamps().to_vec(), values)
        .build()
}
