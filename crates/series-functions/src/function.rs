//! Closed dispatch over every function this crate provides.
//!
//! [`AnalysisFunction`] and [`TransformationFunction`] wrap one concrete
//! function per variant and forward the contract through an exhaustive
//! `match`. A host that stores these enums instead of trait objects gets a
//! compile error when a variant is added and not handled.
//!
//! # Example
//!
//! ```
//! use series_functions::prelude::*;
//!
//! let series = TimeSeries::builder("queue.depth")
//!     .points(vec![0, 1, 2, 3], vec![4.0, 2.0, 8.0, 6.0])
//!     .build()
//!     .unwrap();
//!
//! let requested = vec![
//!     AnalysisFunction::from(Min::new()),
//!     AnalysisFunction::from(Max::new()),
//!     AnalysisFunction::from(Percentile::new().percentile(0.5)),
//! ];
//!
//! let labelled: Vec<(AnalysisType, f64)> = requested
//!     .iter()
//!     .map(|f| (f.kind(), f.execute(&[&series]).unwrap()))
//!     .collect();
//!
//! assert_eq!(labelled[0], (AnalysisType::Min, 2.0));
//! assert_eq!(labelled[1], (AnalysisType::Max, 8.0));
//! ```

use crate::aggregations::{
    Avg, Count, Dev, Diff, First, Last, Max, Min, Percentile, Range, SignedDiff, Sum,
};
use crate::analyses::Dtw;
use crate::error::Result;
use crate::kind::{AnalysisType, TransformationType};
use crate::series::TimeSeries;
use crate::traits::{Analysis, Transformation};
use crate::transformations::{
    Add, Derivative, Divide, MovingAverage, NonNegativeDerivative, Scale, Subtract, Timeshift,
    Vectorization,
};

/// Forwards a contract method to whichever function the enum holds.
macro_rules! dispatch {
    ($self:ident, $enum:ident { $($variant:ident),+ $(,)? }, $f:ident => $body:expr) => {
        match $self {
            $( $enum::$variant($f) => $body, )+
        }
    };
}

/// Implements `From<Concrete>` for each variant.
macro_rules! from_variants {
    ($enum:ident { $($variant:ident),+ $(,)? }) => {
        $(
            impl From<$variant> for $enum {
                fn from(function: $variant) -> Self {
                    Self::$variant(function)
                }
            }
        )+
    };
}

/// Any analysis provided by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum AnalysisFunction {
    /// See [`Min`].
    Min(Min),
    /// See [`Max`].
    Max(Max),
    /// See [`Avg`].
    Avg(Avg),
    /// See [`Sum`].
    Sum(Sum),
    /// See [`Count`].
    Count(Count),
    /// See [`Dev`].
    Dev(Dev),
    /// See [`Percentile`].
    Percentile(Percentile),
    /// See [`First`].
    First(First),
    /// See [`Last`].
    Last(Last),
    /// See [`Range`].
    Range(Range),
    /// See [`Diff`].
    Diff(Diff),
    /// See [`SignedDiff`].
    SignedDiff(SignedDiff),
    /// See [`Dtw`].
    Dtw(Dtw),
}

from_variants!(AnalysisFunction {
    Min, Max, Avg, Sum, Count, Dev, Percentile, First, Last, Range, Diff, SignedDiff, Dtw,
});

impl AnalysisFunction {
    /// Creates the default-configured function for a parameter-free type.
    ///
    /// Returns `None` for types that need configuration the host must
    /// supply ([`AnalysisType::Dtw`] needs its subquery).
    #[must_use]
    pub fn with_defaults(kind: AnalysisType) -> Option<Self> {
        Some(match kind {
            AnalysisType::Min => Min::new().into(),
            AnalysisType::Max => Max::new().into(),
            AnalysisType::Avg => Avg::new().into(),
            AnalysisType::Sum => Sum::new().into(),
            AnalysisType::Count => Count::new().into(),
            AnalysisType::Dev => Dev::new().into(),
            AnalysisType::Percentile => Percentile::new().into(),
            AnalysisType::First => First::new().into(),
            AnalysisType::Last => Last::new().into(),
            AnalysisType::Range => Range::new().into(),
            AnalysisType::Diff => Diff::new().into(),
            AnalysisType::SignedDiff => SignedDiff::new().into(),
            AnalysisType::Dtw => return None,
        })
    }
}

macro_rules! analysis_dispatch {
    ($self:ident, $f:ident => $body:expr) => {
        dispatch!($self, AnalysisFunction {
            Min, Max, Avg, Sum, Count, Dev, Percentile, First, Last, Range, Diff, SignedDiff, Dtw,
        }, $f => $body)
    };
}

impl Analysis for AnalysisFunction {
    fn execute(&self, series: &[&TimeSeries]) -> Result<f64> {
        analysis_dispatch!(self, f => f.execute(series))
    }

    fn arguments(&self) -> &'static [&'static str] {
        analysis_dispatch!(self, f => f.arguments())
    }

    fn kind(&self) -> AnalysisType {
        analysis_dispatch!(self, f => f.kind())
    }

    fn needs_subquery(&self) -> bool {
        analysis_dispatch!(self, f => f.needs_subquery())
    }

    fn subquery(&self) -> Option<&str> {
        analysis_dispatch!(self, f => f.subquery())
    }
}

/// Any transformation provided by this crate.
#[derive(Debug, Clone, PartialEq)]
pub enum TransformationFunction {
    /// See [`Vectorization`].
    Vectorization(Vectorization),
    /// See [`Scale`].
    Scale(Scale),
    /// See [`Divide`].
    Divide(Divide),
    /// See [`Add`].
    Add(Add),
    /// See [`Subtract`].
    Subtract(Subtract),
    /// See [`Timeshift`].
    Timeshift(Timeshift),
    /// See [`Derivative`].
    Derivative(Derivative),
    /// See [`NonNegativeDerivative`].
    NonNegativeDerivative(NonNegativeDerivative),
    /// See [`MovingAverage`].
    MovingAverage(MovingAverage),
}

from_variants!(TransformationFunction {
    Vectorization, Scale, Divide, Add, Subtract, Timeshift, Derivative,
    NonNegativeDerivative, MovingAverage,
});

macro_rules! transformation_dispatch {
    ($self:ident, $f:ident => $body:expr) => {
        dispatch!($self, TransformationFunction {
            Vectorization, Scale, Divide, Add, Subtract, Timeshift, Derivative,
            NonNegativeDerivative, MovingAverage,
        }, $f => $body)
    };
}

impl Transformation for TransformationFunction {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        transformation_dispatch!(self, f => f.transform(series))
    }

    fn kind(&self) -> TransformationType {
        transformation_dispatch!(self, f => f.kind())
    }

    fn arguments(&self) -> &'static [&'static str] {
        transformation_dispatch!(self, f => f.arguments())
    }
}
