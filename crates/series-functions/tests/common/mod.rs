//! Shared test utilities for series-functions tests.
//!
//! This module provides common utilities used across multiple test files.

use series_functions::series::TimeSeries;

/// Approximate equality check for floating-point values.
///
/// Two NaN values are considered equal for testing purposes.
#[allow(dead_code)]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    if a.is_nan() && b.is_nan() {
        return true;
    }
    if a.is_nan() || b.is_nan() {
        return false;
    }
    (a - b).abs() < eps
}

/// Standard epsilon for high-precision comparisons.
#[allow(dead_code)]
pub const EPSILON: f64 = 1e-10;

/// Looser epsilon for comparisons involving accumulated floating-point operations.
#[allow(dead_code)]
pub const LOOSE_EPSILON: f64 = 1e-6;

/// Builds a series named `metric` with a `host` attribute.
#[allow(dead_code)]
pub fn series(timestamps: Vec<i64>, values: Vec<f64>) -> TimeSeries {
    TimeSeries::builder("test.metric")
        .attribute("host", "test-host")
        .attribute("shard", 3_i64)
        .points(timestamps, values)
        .build()
        .expect("test series must be valid")
}

/// Builds a series with timestamps `0..values.len()`.
#[allow(dead_code)]
pub fn indexed(values: Vec<f64>) -> TimeSeries {
    let timestamps = (0..values.len() as i64).collect();
    series(timestamps, values)
}

/// Returns true if `sub` is a subsequence of `full`.
#[allow(dead_code)]
pub fn is_subsequence(sub: &[i64], full: &[i64]) -> bool {
    let mut it = full.iter();
    sub.iter().all(|s| it.any(|f| f == s))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_approx_eq_basic() {
        assert!(approx_eq(1.0, 1.0, EPSILON));
        assert!(approx_eq(1.0, 1.0 + 1e-11, EPSILON));
        assert!(!approx_eq(1.0, 2.0, EPSILON));
        assert!(approx_eq(f64::NAN, f64::NAN, EPSILON));
        assert!(!approx_eq(f64::NAN, 1.0, EPSILON));
    }

    #[test]
    fn test_is_subsequence() {
        assert!(is_subsequence(&[1, 3], &[1, 2, 3]));
        assert!(is_subsequence(&[], &[1, 2]));
        assert!(!is_subsequence(&[3, 1], &[1, 2, 3]));
    }
}
