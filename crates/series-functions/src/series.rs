//! Time series value container.
//!
//! A [`TimeSeries`] is a metric name, an attribute map and two parallel
//! arrays of timestamps and values, kept in strictly increasing timestamp order,
//! so no two samples share a timestamp.
//! Series are immutable once built; functions borrow their inputs and build
//! fresh outputs through [`TimeSeriesBuilder`].
//!
//! # Example
//!
//! ```
//! use series_functions::series::TimeSeries;
//!
//! let series = TimeSeries::builder("cpu.load")
//!     .attribute("host", "web-01")
//!     .points(vec![0, 1, 2], vec![0.5, 0.7, 0.6])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(series.metric(), "cpu.load");
//! assert_eq!(series.len(), 3);
//! assert_eq!(series.value(1), Some(0.7));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single `(timestamp, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    /// Epoch timestamp; the unit is chosen by the host.
    pub timestamp: i64,
    /// Observed value.
    pub value: f64,
}

impl Sample {
    /// Creates a new sample.
    #[inline]
    #[must_use]
    pub const fn new(timestamp: i64, value: f64) -> Self {
        Self { timestamp, value }
    }
}

/// Value of a series attribute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer attribute.
    Integer(i64),
    /// Floating point attribute.
    Float(f64),
    /// Free text attribute.
    String(String),
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_owned())
    }
}

impl From<String> for AttributeValue {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

impl From<i64> for AttributeValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Metadata carried unchanged through every transformation.
pub type Attributes = BTreeMap<String, AttributeValue>;

/// An immutable, time-ordered sequence of samples with a metric name and
/// attributes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSeries {
    metric: String,
    attributes: Attributes,
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeries {
    /// Starts building a series for the given metric.
    #[must_use]
    pub fn builder(metric: impl Into<String>) -> TimeSeriesBuilder {
        TimeSeriesBuilder::new(metric)
    }

    /// Creates a series without samples.
    #[must_use]
    pub fn empty(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            attributes: Attributes::new(),
            timestamps: Vec::new(),
            values: Vec::new(),
        }
    }

    /// Returns the metric name.
    #[inline]
    #[must_use]
    pub fn metric(&self) -> &str {
        &self.metric
    }

    /// Returns the attribute map.
    #[inline]
    #[must_use]
    pub const fn attributes(&self) -> &Attributes {
        &self.attributes
    }

    /// Returns the number of samples.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.timestamps.len()
    }

    /// Alias for [`len`](Self::len).
    #[inline]
    #[must_use]
    pub fn size(&self) -> usize {
        self.len()
    }

    /// Returns true if the series holds no samples.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timestamps.is_empty()
    }

    /// Returns the timestamp at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn timestamp(&self, index: usize) -> Option<i64> {
        self.timestamps.get(index).copied()
    }

    /// Returns the value at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn value(&self, index: usize) -> Option<f64> {
        self.values.get(index).copied()
    }

    /// Returns the sample at `index`, or `None` if out of range.
    #[inline]
    #[must_use]
    pub fn sample(&self, index: usize) -> Option<Sample> {
        Some(Sample::new(self.timestamp(index)?, self.value(index)?))
    }

    /// Returns all timestamps in order.
    #[inline]
    #[must_use]
    pub fn timestamps(&self) -> &[i64] {
        &self.timestamps
    }

    /// Returns all values in timestamp order.
    #[inline]
    #[must_use]
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    /// Iterates over the samples in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = Sample> + '_ {
        self.timestamps
            .iter()
            .zip(&self.values)
            .map(|(&timestamp, &value)| Sample::new(timestamp, value))
    }

    /// Starts a builder that carries this series' metric and attributes but
    /// no samples. Transformations use it to assemble their output.
    #[must_use]
    pub fn derive(&self) -> TimeSeriesBuilder {
        TimeSeriesBuilder::new(self.metric.clone()).attributes(self.attributes.clone())
    }
}

/// Builder for [`TimeSeries`].
///
/// Samples may be supplied as parallel arrays with [`points`](Self::points)
/// or one at a time with [`point`](Self::point); both append. Ordering and
/// length are checked in [`build`](Self::build).
#[derive(Debug, Clone, Default)]
pub struct TimeSeriesBuilder {
    metric: String,
    attributes: Attributes,
    timestamps: Vec<i64>,
    values: Vec<f64>,
}

impl TimeSeriesBuilder {
    /// Creates a builder for the given metric.
    #[must_use]
    pub fn new(metric: impl Into<String>) -> Self {
        Self {
            metric: metric.into(),
            ..Self::default()
        }
    }

    /// Replaces the attribute map.
    #[must_use]
    pub fn attributes(mut self, attributes: Attributes) -> Self {
        self.attributes = attributes;
        self
    }

    /// Sets a single attribute.
    #[must_use]
    pub fn attribute(mut self, key: impl Into<String>, value: impl Into<AttributeValue>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    /// Appends parallel arrays of timestamps and values.
    #[must_use]
    pub fn points(mut self, timestamps: Vec<i64>, values: Vec<f64>) -> Self {
        if self.timestamps.is_empty() && self.values.is_empty() {
            self.timestamps = timestamps;
            self.values = values;
        } else {
            self.timestamps.extend(timestamps);
            self.values.extend(values);
        }
        self
    }

    /// Appends a single sample.
    #[must_use]
    pub fn point(mut self, timestamp: i64, value: f64) -> Self {
        self.timestamps.push(timestamp);
        self.values.push(value);
        self
    }

    /// Validates the samples and builds the series.
    ///
    /// # Errors
    ///
    /// - `Error::LengthMismatch` if the timestamp and value arrays differ in length
    /// - `Error::UnsortedTimestamps` if a timestamp is not greater than its predecessor
    pub fn build(self) -> Result<TimeSeries> {
        if self.timestamps.len() != self.values.len() {
            return Err(Error::LengthMismatch {
                timestamps: self.timestamps.len(),
                values: self.values.len(),
            });
        }

        if let Some(pos) = self.timestamps.windows(2).position(|w| w[1] <= w[0]) {
            return Err(Error::UnsortedTimestamps { index: pos + 1 });
        }

        Ok(TimeSeries {
            metric: self.metric,
            attributes: self.attributes,
            timestamps: self.timestamps,
            values: self.values,
        })
    }
}
