//! Batch execution of one function over many time series.
//!
//! Functions are stateless and `Send + Sync`, so a single instance can run
//! against many series at once. With the `parallel` feature enabled this
//! module uses Rayon once a batch is large enough; without it, or for small
//! batches, series are processed sequentially.
//!
//! # Feature Flag
//!
//! ```toml
//! [dependencies]
//! series-functions = { version = "0.1", features = ["parallel"] }
//! ```
//!
//! # Example
//!
//! ```
//! use series_functions::batch::BatchProcessor;
//! use series_functions::aggregations::Max;
//! use series_functions::series::TimeSeries;
//!
//! let series: Vec<TimeSeries> = (0..3)
//!     .map(|host| {
//!         TimeSeries::builder("cpu")
//!             .attribute("host", i64::from(host))
//!             .points(vec![0, 1], vec![f64::from(host), 10.0 + f64::from(host)])
//!             .build()
//!             .unwrap()
//!     })
//!     .collect();
//!
//! let maxima = BatchProcessor::new().aggregate(&Max::new(), &series).unwrap();
//! assert_eq!(maxima, vec![10.0, 11.0, 12.0]);
//! ```

use tracing::trace;

use crate::error::Result;
use crate::series::TimeSeries;
use crate::traits::{Analysis, Transformation};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Batch processor for running a function across many series.
#[derive(Debug, Clone)]
pub struct BatchProcessor {
    /// Minimum number of series before parallel processing kicks in.
    min_parallel_threshold: usize,
}

impl Default for BatchProcessor {
    fn default() -> Self {
        Self::new()
    }
}

impl BatchProcessor {
    /// Creates a new batch processor with default settings.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            min_parallel_threshold: 1000,
        }
    }

    /// Sets the minimum number of series required to use parallel processing.
    ///
    /// Default: 1000
    #[must_use]
    pub const fn min_parallel_threshold(mut self, threshold: usize) -> Self {
        self.min_parallel_threshold = threshold;
        self
    }

    /// Returns the parallel threshold.
    #[must_use]
    pub const fn get_min_parallel_threshold(&self) -> usize {
        self.min_parallel_threshold
    }

    /// Executes `analysis` once per series, passing that series alone.
    ///
    /// Results are in input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by any execution.
    pub fn aggregate<A>(&self, analysis: &A, series: &[TimeSeries]) -> Result<Vec<f64>>
    where
        A: Analysis + ?Sized,
    {
        self.process(series, |s| analysis.execute(&[s]))
    }

    /// Transforms every series with `transformation`.
    ///
    /// Results are in input order.
    ///
    /// # Errors
    ///
    /// Returns the first error produced by any transformation.
    pub fn transform<T>(&self, transformation: &T, series: &[TimeSeries]) -> Result<Vec<TimeSeries>>
    where
        T: Transformation + ?Sized,
    {
        self.process(series, |s| transformation.transform(s))
    }

    /// Applies `function` to every series, in parallel when enabled and the
    /// batch reaches the threshold.
    ///
    /// # Errors
    ///
    /// Returns an error if any computation fails.
    #[cfg(feature = "parallel")]
    pub fn process<F, R>(&self, series: &[TimeSeries], function: F) -> Result<Vec<R>>
    where
        F: Fn(&TimeSeries) -> Result<R> + Send + Sync,
        R: Send,
    {
        if series.len() < self.min_parallel_threshold {
            trace!(series = series.len(), "sequential batch");
            series.iter().map(function).collect()
        } else {
            trace!(series = series.len(), "parallel batch");
            series.par_iter().map(function).collect()
        }
    }

    /// Sequential version when parallel feature is disabled.
    ///
    /// # Errors
    ///
    /// Returns an error if any computation fails.
    #[cfg(not(feature = "parallel"))]
    pub fn process<F, R>(&self, series: &[TimeSeries], function: F) -> Result<Vec<R>>
    where
        F: Fn(&TimeSeries) -> Result<R>,
    {
        trace!(series = series.len(), "sequential batch");
        series.iter().map(function).collect()
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::all, clippy::pedantic, clippy::nursery)]
    use super::*;
    use crate::aggregations::{Min, Percentile};
    use crate::error::Error;
    use crate::function::AnalysisFunction;
    use crate::transformations::Vectorization;

    fn batch(count: usize) -> Vec<TimeSeries> {
        (0..count)
            .map(|k| {
                let ts: Vec<i64> = (0..10).collect();
                let vs: Vec<f64> = ts.iter().map(|&t| (t as f64) * (k as f64)).collect();
                TimeSeries::builder(format!("series-{k}"))
                    .points(ts, vs)
                    .build()
                    .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_aggregate_in_order() {
        let series = batch(5);
        let result = BatchProcessor::new().aggregate(&Min::new(), &series).unwrap();
        assert_eq!(result, vec![0.0; 5]);
    }

    #[test]
    fn test_transform_in_order() {
        let series = batch(4);
        let result = BatchProcessor::new()
            .transform(&Vectorization::new(), &series)
            .unwrap();
        assert_eq!(result.len(), 4);
        for (k, out) in result.iter().enumerate() {
            assert_eq!(out.metric(), format!("series-{k}"));
            // every input is a straight line
            assert_eq!(out.timestamps(), &[0, 9]);
        }
    }

    #[test]
    fn test_low_threshold_matches_sequential() {
        let series = batch(50);
        let sequential = BatchProcessor::new()
            .aggregate(&Percentile::new(), &series)
            .unwrap();
        let eager = BatchProcessor::new()
            .min_parallel_threshold(1)
            .aggregate(&Percentile::new(), &series)
            .unwrap();
        assert_eq!(sequential, eager);
    }

    #[test]
    fn test_error_propagates() {
        let series = batch(3);
        let bad = Percentile::new().percentile(2.0);
        let result = BatchProcessor::new()
            .min_parallel_threshold(1)
            .aggregate(&bad, &series);
        assert!(matches!(result, Err(Error::InvalidArgument { .. })));
    }

    #[test]
    fn test_dyn_and_enum_functions() {
        let series = batch(2);
        let boxed: Box<dyn Analysis> = Box::new(Min::new());
        let processor = BatchProcessor::new();
        assert_eq!(processor.aggregate(boxed.as_ref(), &series).unwrap().len(), 2);
        let dispatched = AnalysisFunction::from(Min::new());
        assert_eq!(processor.aggregate(&dispatched, &series).unwrap().len(), 2);
    }

    #[test]
    fn test_empty_batch() {
        let result = BatchProcessor::new().aggregate(&Min::new(), &[]).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(BatchProcessor::default().get_min_parallel_threshold(), 1000);
    }
}
