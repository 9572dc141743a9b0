//! MOVAVG (moving average) transformation.
//!
//! # Algorithm
//!
//! O(n) rolling sum over a window of `window` samples:
//! 1. Each step adds the newest value and subtracts the one leaving the window
//! 2. The running total uses Neumaier compensation, so a large value leaving
//!    the window does not take the small values still inside it along
//! 3. Every output sample is stamped with the last timestamp of its window
//!
//! The output therefore has `len - window + 1` samples, or none if the
//! series is shorter than the window.
//!
//! # Non-finite Values
//!
//! `NaN` and infinite values are counted instead of entering the running
//! total. A window holding any of them is summed directly, so it yields
//! `NaN` or an infinity by the usual IEEE rules, and later windows are
//! unaffected once they leave. If the finite total itself overflows it is
//! rebuilt from the window, and a window whose finite values really do sum
//! past `f64::MAX` is summed directly.

use tracing::debug;

use crate::error::{Error, Result};
use crate::kind::TransformationType;
use crate::series::TimeSeries;
use crate::traits::Transformation;

/// Moving average configuration.
///
/// # Example
///
/// ```
/// use series_functions::series::TimeSeries;
/// use series_functions::traits::Transformation;
/// use series_functions::transformations::MovingAverage;
///
/// let series = TimeSeries::builder("rps")
///     .points(vec![1, 2, 3, 4, 5], vec![10.0, 11.0, 12.0, 13.0, 14.0])
///     .build()
///     .unwrap();
///
/// let smoothed = MovingAverage::new().window(3).transform(&series).unwrap();
/// assert_eq!(smoothed.timestamps(), &[3, 4, 5]);
/// assert_eq!(smoothed.values(), &[11.0, 12.0, 13.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovingAverage {
    window: usize,
}

impl Default for MovingAverage {
    /// Creates a moving average over 5 samples.
    fn default() -> Self {
        Self { window: 5 }
    }
}

impl MovingAverage {
    /// Creates a moving average over 5 samples.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of samples per window.
    ///
    /// Default: 5
    #[must_use]
    pub const fn window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    /// Returns the window size.
    #[must_use]
    pub const fn get_window(&self) -> usize {
        self.window
    }
}

/// Neumaier-compensated running sum of finite values.
#[derive(Debug, Default, Clone, Copy)]
struct CompensatedSum {
    sum: f64,
    compensation: f64,
}

impl CompensatedSum {
    fn over(values: &[f64]) -> Self {
        let mut total = Self::default();
        values
            .iter()
            .filter(|v| v.is_finite())
            .for_each(|&v| total.add(v));
        total
    }

    #[inline]
    fn add(&mut self, value: f64) {
        let t = self.sum + value;
        if self.sum.abs() >= value.abs() {
            self.compensation += (self.sum - t) + value;
        } else {
            self.compensation += (value - t) + self.sum;
        }
        self.sum = t;
    }

    #[inline]
    fn total(&self) -> f64 {
        self.sum + self.compensation
    }
}

impl Transformation for MovingAverage {
    #[allow(clippy::cast_precision_loss)]
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let window = self.window;
        if window == 0 {
            return Err(Error::InvalidArgument {
                function: TransformationType::MovingAverage.name(),
                argument: "window",
                reason: "window must be at least 1",
            });
        }

        let timestamps = series.timestamps();
        let values = series.values();
        let n = values.len();
        if n < window {
            return series.derive().build();
        }

        let window_f = window as f64;
        let mut out_timestamps = Vec::with_capacity(n - window + 1);
        let mut out_values = Vec::with_capacity(n - window + 1);

        let mut running = CompensatedSum::default();
        let mut non_finite = 0_usize;

        for i in 0..n {
            let entering = values[i];
            if entering.is_finite() {
                running.add(entering);
            } else {
                non_finite += 1;
            }

            if i >= window {
                let leaving = values[i - window];
                if leaving.is_finite() {
                    running.add(-leaving);
                } else {
                    non_finite -= 1;
                }
            }

            if i + 1 < window {
                continue;
            }

            let current = &values[i + 1 - window..=i];
            if non_finite == 0 && !running.total().is_finite() {
                running = CompensatedSum::over(current);
            }
            let total = running.total();
            let sum = if non_finite == 0 && total.is_finite() {
                total
            } else {
                current.iter().sum()
            };
            out_timestamps.push(timestamps[i]);
            out_values.push(sum / window_f);
        }

        debug!(
            metric = series.metric(),
            input = n,
            output = out_values.len(),
            window,
            "moving average"
        );

        series.derive().points(out_timestamps, out_values).build()
    }

    fn kind(&self) -> TransformationType {
        TransformationType::MovingAverage
    }

    fn arguments(&self) -> &'static [&'static str] {
        &["window"]
    }
}
