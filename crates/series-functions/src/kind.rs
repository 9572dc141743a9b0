//! Function type tags.
//!
//! [`AnalysisType`] and [`TransformationType`] are the closed sets of tags a
//! host uses to label results and to pick which function to run. The
//! mapping from an external query name to a tag belongs to the host.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Enumeration of supported analyses.
///
/// All variants except [`Dtw`](Self::Dtw) are plain aggregations that reduce
/// the first series to a scalar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum AnalysisType {
    /// Minimum value
    Min,
    /// Maximum value
    Max,
    /// Arithmetic mean
    Avg,
    /// Sum of values
    Sum,
    /// Number of samples
    Count,
    /// Population standard deviation
    Dev,
    /// Nearest-rank percentile
    #[serde(rename = "P")]
    Percentile,
    /// Value of the first sample
    First,
    /// Value of the last sample
    Last,
    /// Difference between maximum and minimum
    Range,
    /// Absolute difference between last and first value
    Diff,
    /// Signed difference between last and first value
    #[serde(rename = "SDIFF")]
    SignedDiff,
    /// Dynamic time warping cost against a subquery result
    Dtw,
}

impl AnalysisType {
    /// Every analysis type, in declaration order.
    pub const ALL: [Self; 13] = [
        Self::Min,
        Self::Max,
        Self::Avg,
        Self::Sum,
        Self::Count,
        Self::Dev,
        Self::Percentile,
        Self::First,
        Self::Last,
        Self::Range,
        Self::Diff,
        Self::SignedDiff,
        Self::Dtw,
    ];

    /// Returns the label used in results.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Min => "MIN",
            Self::Max => "MAX",
            Self::Avg => "AVG",
            Self::Sum => "SUM",
            Self::Count => "COUNT",
            Self::Dev => "DEV",
            Self::Percentile => "P",
            Self::First => "FIRST",
            Self::Last => "LAST",
            Self::Range => "RANGE",
            Self::Diff => "DIFF",
            Self::SignedDiff => "SDIFF",
            Self::Dtw => "DTW",
        }
    }

    /// Returns whether this analysis is a single-series aggregation.
    ///
    /// Non-aggregations need the host to run a subquery first.
    #[must_use]
    pub const fn is_aggregation(self) -> bool {
        !matches!(self, Self::Dtw)
    }
}

impl fmt::Display for AnalysisType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Enumeration of supported transformations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransformationType {
    /// Line-simplification vectorization
    Vector,
    /// Multiply every value by a factor
    Scale,
    /// Divide every value by a divisor
    Divide,
    /// Add a constant to every value
    Add,
    /// Subtract a constant from every value
    Subtract,
    /// Shift every timestamp
    Timeshift,
    /// Forward-difference rate of change
    Derivative,
    /// Rate of change with negative rates dropped
    #[serde(rename = "NNDERIVATIVE")]
    NonNegativeDerivative,
    /// Rolling mean over a sample window
    #[serde(rename = "MOVAVG")]
    MovingAverage,
}

impl TransformationType {
    /// Every transformation type, in declaration order.
    pub const ALL: [Self; 9] = [
        Self::Vector,
        Self::Scale,
        Self::Divide,
        Self::Add,
        Self::Subtract,
        Self::Timeshift,
        Self::Derivative,
        Self::NonNegativeDerivative,
        Self::MovingAverage,
    ];

    /// Returns the label used in results.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Vector => "VECTOR",
            Self::Scale => "SCALE",
            Self::Divide => "DIVIDE",
            Self::Add => "ADD",
            Self::Subtract => "SUBTRACT",
            Self::Timeshift => "TIMESHIFT",
            Self::Derivative => "DERIVATIVE",
            Self::NonNegativeDerivative => "NNDERIVATIVE",
            Self::MovingAverage => "MOVAVG",
        }
    }
}

impl fmt::Display for TransformationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
