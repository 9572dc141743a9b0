//! Function contracts.
//!
//! Every analysis implements [`Analysis`] and every series-to-series
//! transform implements [`Transformation`]. Implementors hold only immutable
//! configuration, so a single instance can be shared by any number of
//! threads.
//!
//! # Example
//!
//! ```
//! use series_functions::prelude::*;
//!
//! let series = TimeSeries::builder("latency")
//!     .points(vec![0, 1, 2], vec![5.0, 3.0, 5.0])
//!     .build()
//!     .unwrap();
//!
//! let min = Min::new();
//! assert_eq!(min.kind(), AnalysisType::Min);
//! assert!(!min.needs_subquery());
//! assert_eq!(min.execute(&[&series]).unwrap(), 3.0);
//! ```

use crate::error::Result;
use crate::kind::{AnalysisType, TransformationType};
use crate::series::TimeSeries;

/// A function that reduces one or more time series to a scalar.
pub trait Analysis: Send + Sync {
    /// Computes the analysis value.
    ///
    /// Only the first series is read unless the function is explicitly
    /// multi-series. An empty first series yields `NaN`.
    ///
    /// # Errors
    ///
    /// Returns `Error::InsufficientSeries` if fewer series are supplied than
    /// the function requires, or `Error::InvalidArgument` if the function's
    /// configuration is unusable.
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64>;

    /// Returns the ordered names of the arguments the host must resolve.
    fn arguments(&self) -> &'static [&'static str] {
        &[]
    }

    /// Returns the type tag of this analysis.
    fn kind(&self) -> AnalysisType;

    /// Returns whether the host has to run [`subquery`](Self::subquery)
    /// and pass its result to [`execute`](Self::execute).
    fn needs_subquery(&self) -> bool {
        false
    }

    /// Returns the query the host has to run, if any.
    fn subquery(&self) -> Option<&str> {
        None
    }
}

/// A function that maps a time series to a new, possibly shorter one.
pub trait Transformation: Send + Sync {
    /// Builds the transformed series.
    ///
    /// The result carries the input's metric name and attributes. The input
    /// is never modified.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` if the function's configuration is
    /// unusable, or another error if the output cannot be represented.
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries>;

    /// Returns the type tag of this transformation.
    fn kind(&self) -> TransformationType;

    /// Returns the ordered names of the arguments the host must resolve.
    fn arguments(&self) -> &'static [&'static str] {
        &[]
    }
}
