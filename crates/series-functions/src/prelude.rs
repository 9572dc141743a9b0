//! Commonly used types and traits for convenient importing.
//!
//! # Usage
//!
//! ```
//! use series_functions::prelude::*;
//!
//! let series = TimeSeries::builder("m")
//!     .points(vec![0, 1, 2, 3], vec![1.0, 2.0, 3.0, 4.0])
//!     .build()
//!     .unwrap();
//!
//! let avg = Avg::new().execute(&[&series]).unwrap();
//! let shifted = Timeshift::new(60).transform(&series).unwrap();
//! assert_eq!(avg, 2.5);
//! assert_eq!(shifted.timestamp(0), Some(60));
//! ```
//!
//! # Contents
//!
//! ## Error Handling
//! - [`Error`], [`Result`]
//!
//! ## Contracts and tags
//! - [`Analysis`], [`Transformation`]
//! - [`AnalysisType`], [`TransformationType`]
//! - [`AnalysisFunction`], [`TransformationFunction`]
//!
//! ## Data
//! - [`TimeSeries`], [`TimeSeriesBuilder`], [`Sample`], [`AttributeValue`], [`Attributes`]
//!
//! ## Functions
//! Every aggregation, analysis and transformation type.

// Error types
pub use crate::error::{Error, Result};

// Contracts, tags and dispatch
pub use crate::function::{AnalysisFunction, TransformationFunction};
pub use crate::kind::{AnalysisType, TransformationType};
pub use crate::traits::{Analysis, Transformation};

// Data
pub use crate::series::{AttributeValue, Attributes, Sample, TimeSeries, TimeSeriesBuilder};

// Functions
pub use crate::aggregations::{
    Avg, Count, Dev, Diff, First, Last, Max, Min, Percentile, Range, SignedDiff, Sum,
};
pub use crate::analyses::Dtw;
pub use crate::transformations::{
    Add, Derivative, Divide, MovingAverage, NonNegativeDerivative, Scale, Subtract, Timeshift,
    Vectorization,
};

// Batch execution
pub use crate::batch::BatchProcessor;
