//! Error types for the numeric primitives.
//!
//! All failures in this crate are invalid-argument failures: a value outside
//! a required interval, an interval with nonsensical bounds, or a polynomial
//! with a zero leading coefficient. Every one of them is deterministic and
//! fails fast at construction; none is retried internally.

use thiserror::Error;

/// Convenience alias for `Result<T, MathError>`.
pub type MathResult<T> = Result<T, MathError>;

/// Invalid-argument failures from the numeric primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// A value fell outside the interval that was required of it.
    #[error("value {value} not contained in interval {interval}")]
    OutOfInterval { value: f64, interval: String },

    /// Interval construction with `low >= high` (or non-positive size).
    #[error("invalid interval bounds: low {low} must be less than high {high}")]
    InvalidBounds { low: f64, high: f64 },

    /// DMS angle with a negative degrees component.
    #[error("negative degrees component: {0}")]
    NegativeDegrees(i32),

    /// Polynomial construction with a zero leading coefficient.
    #[error("polynomial leading coefficient must be non-zero")]
    ZeroLeadingCoefficient,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_interval_message() {
        let err = MathError::OutOfInterval {
            value: 7.0,
            interval: "[0,6.283185307179586[".to_string(),
        };
        assert!(err.to_string().contains("7"));
        assert!(err.to_string().contains("not contained"));
    }

    #[test]
    fn test_send_sync() {
        fn _assert_send<T: Send>() {}
        fn _assert_sync<T: Sync>() {}
        _assert_send::<MathError>();
        _assert_sync::<MathError>();
    }
}
