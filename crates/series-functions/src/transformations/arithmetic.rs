//! Value arithmetic: SCALE, DIVIDE, ADD and SUBTRACT.
//!
//! Each transformation applies one operation to every value and keeps the
//! timestamps as they are, so the output has the same length as the input.

use crate::error::{Error, Result};
use crate::kind::TransformationType;
use crate::series::TimeSeries;
use crate::traits::Transformation;

use super::map_values;

/// Multiplies every value by a factor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scale {
    factor: f64,
}

impl Scale {
    /// Creates a scale transformation.
    #[must_use]
    pub const fn new(factor: f64) -> Self {
        Self { factor }
    }

    /// Returns the factor.
    #[must_use]
    pub const fn factor(&self) -> f64 {
        self.factor
    }
}

impl Transformation for Scale {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        map_values(series, |v| v * self.factor)
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Scale
    }

    fn arguments(&self) -> &'static [&'static str] {
        &["factor"]
    }
}

/// Divides every value by a divisor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Divide {
    divisor: f64,
}

impl Divide {
    /// Creates a divide transformation.
    #[must_use]
    pub const fn new(divisor: f64) -> Self {
        Self { divisor }
    }

    /// Returns the divisor.
    #[must_use]
    pub const fn divisor(&self) -> f64 {
        self.divisor
    }
}

impl Transformation for Divide {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        if self.divisor == 0.0 || !self.divisor.is_finite() {
            return Err(Error::InvalidArgument {
                function: TransformationType::Divide.name(),
                argument: "divisor",
                reason: "must be finite and non-zero",
            });
        }
        map_values(series, |v| v / self.divisor)
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Divide
    }

    fn arguments(&self) -> &'static [&'static str] {
        &["divisor"]
    }
}

/// Adds a constant to every value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Add {
    amount: f64,
}

impl Add {
    /// Creates an add transformation.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

impl Transformation for Add {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        map_values(series, |v| v + self.amount)
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Add
    }

    fn arguments(&self) -> &'static [&'static str] {
        &["amount"]
    }
}

/// Subtracts a constant from every value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Subtract {
    amount: f64,
}

impl Subtract {
    /// Creates a subtract transformation.
    #[must_use]
    pub const fn new(amount: f64) -> Self {
        Self { amount }
    }

    /// Returns the amount.
    #[must_use]
    pub const fn amount(&self) -> f64 {
        self.amount
    }
}

impl Transformation for Subtract {
    fn transform(&self, series: &TimeSeries) -> Result<TimeSeries> {
        map_values(series, |v| v - self.amount)
    }

    fn kind(&self) -> TransformationType {
        TransformationType::Subtract
    }

    fn arguments(&self) -> &'static [&'static str] {
        &["amount"]
    }
}
