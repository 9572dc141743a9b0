//! Time-aware transformations: TIMESHIFT, DERIVATIVE and NNDERIVATIVE.

use tracing::debug;

use crate::error::{Error, Result};
use crate::kind::TransformationType;
use crate::series::TimeSeries;
use crate::traits::Transformation;

// =============================================================================
// TIMESHIFT
// =============================================================================

/// Moves every sample by a fixed amount of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timeshift {
    shift: i64,
}

impl Timeshift {
    /// Creates a timeshift by `shift` timestamp units (may be negative).
    #[must_use]
    pub const fn new(shift: i64) -> Self {
        Self { shift }
    }

    /// Returns the shift.
    #[must_use]
    pub const fn shift(&self) -> i64 {
        self.shift
    }
}

impl Transformation for Timeshift {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let timestamps = series
            .timestamps()
            .iter()
            .map(|&timestamp| {
                timestamp
                    .checked_add(self.shift)
                    .ok_or(Error::TimestampOverflow {
                        timestamp,
                        shift: self.shift,
                    })
            })
            .collect::<Result<Vec<i64>>>()?;

        series
            .derive()
            .points(timestamps, series.values().to_vec())
            .build()
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Timeshift
    }

    fn arguments(&self) -> &'static [&'static str] {
        &["shift"]
    }
}

// =============================================================================
// DERIVATIVE / NNDERIVATIVE
// =============================================================================

/// Forward-difference rates `(v[i] - v[i-1]) / (t[i] - t[i-1])` stamped at
/// `t[i]`. Timestamps are strictly increasing, so every gap is positive.
#[allow(clippy::cast_precision_loss)]
fn rates(series: &TimeSeries, keep: impl Fn(f64) -> bool) -> (Vec<i64>, Vec<f64>) {
    let timestamps = series.timestamps();
    let values = series.values();
    let capacity = timestamps.len().saturating_sub(1);
    let mut out_timestamps = Vec::with_capacity(capacity);
    let mut out_values = Vec::with_capacity(capacity);

    for i in 1..timestamps.len() {
        let dt = (i128::from(timestamps[i]) - i128::from(timestamps[i - 1])) as f64;
        let rate = (values[i] - values[i - 1]) / dt;
        if keep(rate) {
            out_timestamps.push(timestamps[i]);
            out_values.push(rate);
        }
    }

    (out_timestamps, out_values)
}

/// Rate of change between consecutive samples.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Derivative;

impl Derivative {
    /// Creates the derivative transformation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformation for Derivative {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let (timestamps, values) = rates(series, |_| true);
        debug!(
            metric = series.metric(),
            input = series.len(),
            output = timestamps.len(),
            "derivative"
        );
        series.derive().points(timestamps, values).build()
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Derivative
    }
}

/// Rate of change with negative rates dropped, for counters that reset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NonNegativeDerivative;

impl NonNegativeDerivative {
    /// Creates the non-negative derivative transformation.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Transformation for NonNegativeDerivative {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        let (timestamps, values) = rates(series, |rate| rate >= 0.0);
        debug!(
            metric = series.metric(),
            input = series.len(),
            output = timestamps.len(),
            "non-negative derivative"
        );
        series.derive().points(timestamps, values).build()
    }

    fn kind(&self) -> TransformationType {
        TransformationType::NonNegativeDerivative
    }
}
