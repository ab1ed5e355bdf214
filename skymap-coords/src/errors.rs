//! Error type for coordinate construction and conversion.

use thiserror::Error;

use skymap_core::MathError;

/// Convenience alias for `Result<T, CoordError>`.
pub type CoordResult<T> = Result<T, CoordError>;

/// Failures while constructing or converting coordinates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordError {
    /// A component fell outside the interval its coordinate system requires.
    #[error("coordinate component out of range: {0}")]
    ComponentOutOfRange(#[from] MathError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wraps_math_error() {
        let math = MathError::OutOfInterval {
            value: 9.0,
            interval: "[0,6.283185307179586[".to_string(),
        };
        let err: CoordError = math.into();
        assert!(err.to_string().contains("out of range"));
        assert!(err.to_string().contains('9'));
    }
}
