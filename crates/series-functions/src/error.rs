//! Error types for series-functions.
//!
//! This module defines the error types returned by analyses, transformations
//! and the time series builder.
//!
//! Empty input is deliberately absent here: an aggregation over an empty
//! series returns `NaN`, and a degenerate vectorization chord keeps the point.
//! Neither condition is an error.

use thiserror::Error;

/// The main error type for series-functions operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Fewer time series were supplied than the function requires.
    ///
    /// Returned by [`Analysis::execute`](crate::traits::Analysis::execute)
    /// when called with an empty argument list, or with a single series for
    /// a function that compares two.
    #[error("{function} needs at least {required} time series, got {actual}")]
    InsufficientSeries {
        /// Label of the function that rejected the call.
        function: &'static str,
        /// The number of series required.
        required: usize,
        /// The number of series supplied.
        actual: usize,
    },

    /// A function was configured with a value it cannot work with.
    #[error("invalid argument {argument} for {function}: {reason}")]
    InvalidArgument {
        /// Label of the function that rejected the argument.
        function: &'static str,
        /// Name of the offending argument.
        argument: &'static str,
        /// Description of why the value is invalid.
        reason: &'static str,
    },

    /// The timestamp and value arrays handed to the builder differ in length.
    #[error("length mismatch: {timestamps} timestamps but {values} values")]
    LengthMismatch {
        /// Number of timestamps supplied.
        timestamps: usize,
        /// Number of values supplied.
        values: usize,
    },

    /// A timestamp is not greater than its predecessor.
    #[error("timestamps must be strictly increasing, violated at index {index}")]
    UnsortedTimestamps {
        /// Index of the first sample that is out of order.
        index: usize,
    },

    /// Shifting a timestamp left the representable `i64` range.
    #[error("timestamp {timestamp} shifted by {shift} overflows")]
    TimestampOverflow {
        /// The unshifted timestamp.
        timestamp: i64,
        /// The requested shift.
        shift: i64,
    },
}

/// Convenience type alias for Results using the series-functions Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::InsufficientSeries`] unless at least `required` series
/// were supplied.
///
/// # Errors
///
/// Returns `Error::InsufficientSeries` if `actual < required`.
#[inline]
pub(crate) const fn require_series(
    function: &'static str,
    required: usize,
    actual: usize,
) -> Result<()> {
    if actual < required {
        Err(Error::InsufficientSeries {
            function,
            required,
            actual,
        })
    } else {
        Ok(())
    }
}
