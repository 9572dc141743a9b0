//! series-functions: stateless analysis and transformation functions for
//! time series.
//!
//! This crate is the numeric core a query host calls after it has fetched
//! raw series. It provides two kinds of functions:
//!
//! - **Analyses** ([`traits::Analysis`]) reduce one or more series to an `f64`
//! - **Transformations** ([`traits::Transformation`]) map a series to a new,
//!   possibly shorter series with the same metric name and attributes
//!
//! # Features
//!
//! - **Pure**: no I/O, no caching, no shared mutable state; every function
//!   is `Send + Sync`
//! - **Closed dispatch**: [`function::AnalysisFunction`] and
//!   [`function::TransformationFunction`] cover every function with an
//!   exhaustive `match`
//! - **Down-sampling**: O(n) single pass line simplification in
//!   [`transformations::Vectorization`]
//! - **Batching**: [`batch::BatchProcessor`] runs one function over many
//!   series, in parallel with the `parallel` feature
//!
//! # Quick Start
//!
//! ```
//! use series_functions::prelude::*;
//!
//! let series = TimeSeries::builder("cpu.user")
//!     .attribute("host", "web-01")
//!     .points(vec![0, 1, 2], vec![5.0, 3.0, 5.0])
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(Min::new().execute(&[&series]).unwrap(), 3.0);
//!
//! let vectorized = Vectorization::new().transform(&series).unwrap();
//! assert_eq!(vectorized.attributes(), series.attributes());
//! ```
//!
//! # Error Handling
//!
//! Calls return [`Result<T, Error>`]. Missing series are an error; an empty
//! series is not:
//!
//! ```
//! use series_functions::prelude::*;
//!
//! assert!(Min::new().execute(&[]).is_err());
//!
//! let empty = TimeSeries::empty("idle");
//! assert!(Min::new().execute(&[&empty]).unwrap().is_nan());
//! ```
//!
//! # Logging
//!
//! Transformations that drop samples emit `tracing` events at `debug` level
//! with the metric and the input/output sizes. The crate never installs a
//! subscriber.

#![deny(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::perf)]
#![warn(clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod aggregations;
pub mod analyses;
pub mod batch;
pub mod error;
pub mod function;
pub mod kind;
pub mod prelude;
pub mod series;
pub mod traits;
pub mod transformations;

// Re-export commonly used types at crate root
pub use error::{Error, Result};
pub use function::{AnalysisFunction, TransformationFunction};
pub use kind::{AnalysisType, TransformationType};
pub use series::{AttributeValue, Attributes, Sample, TimeSeries, TimeSeriesBuilder};
pub use traits::{Analysis, Transformation};
