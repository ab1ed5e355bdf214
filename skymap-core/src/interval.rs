//! Closed and right-open intervals over `f64`.
//!
//! Two flavors, with deliberately different semantics:
//!
//! | Type | `contains` | Mapping operation |
//! |------|-----------|-------------------|
//! | [`ClosedInterval`] | inclusive on both ends | [`clip`](ClosedInterval::clip) saturates to the nearest bound |
//! | [`RightOpenInterval`] | excludes the upper bound | [`reduce`](RightOpenInterval::reduce) wraps by floored division |
//!
//! `reduce` is the canonical angle-wrapping primitive of the workspace:
//! reducing into `[0, τ)` is exactly what
//! [`angle::normalize_positive`](crate::angle::normalize_positive) does.
//!
//! Neither type implements equality or hashing; an interval is a range of
//! reals, not a key.

use std::fmt;

use crate::errors::{MathError, MathResult};

/// Interval with both bounds included.
#[derive(Debug, Clone, Copy)]
pub struct ClosedInterval {
    low: f64,
    high: f64,
}

impl ClosedInterval {
    /// Creates `[low, high]`; fails unless `low < high`.
    pub fn of(low: f64, high: f64) -> MathResult<Self> {
        if low < high {
            Ok(Self { low, high })
        } else {
            Err(MathError::InvalidBounds { low, high })
        }
    }

    /// Creates the symmetric interval `[-size/2, size/2]`; fails unless `size > 0`.
    pub fn symmetric(size: f64) -> MathResult<Self> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Compile-time constructor for interval constants.
    ///
    /// Bounds must be statically known; `low >= high` is a compile error when
    /// used in `const` position.
    pub const fn of_const(low: f64, high: f64) -> Self {
        assert!(low < high, "interval bounds must satisfy low < high");
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn size(&self) -> f64 {
        self.high - self.low
    }

    /// Inclusive on both ends.
    pub fn contains(&self, v: f64) -> bool {
        self.low <= v && v <= self.high
    }

    /// Saturates `v` to the nearest bound.
    pub fn clip(&self, v: f64) -> f64 {
        v.clamp(self.low, self.high)
    }

    /// Returns `v` unchanged if contained, an out-of-interval error otherwise.
    pub fn check(&self, v: f64) -> MathResult<f64> {
        if self.contains(v) {
            Ok(v)
        } else {
            Err(MathError::OutOfInterval {
                value: v,
                interval: self.to_string(),
            })
        }
    }
}

impl fmt::Display for ClosedInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}]", self.low, self.high)
    }
}

/// Interval with the lower bound included and the upper bound excluded.
#[derive(Debug, Clone, Copy)]
pub struct RightOpenInterval {
    low: f64,
    high: f64,
}

impl RightOpenInterval {
    /// Creates `[low, high)`; fails unless `low < high`.
    pub fn of(low: f64, high: f64) -> MathResult<Self> {
        if low < high {
            Ok(Self { low, high })
        } else {
            Err(MathError::InvalidBounds { low, high })
        }
    }

    /// Creates the symmetric interval `[-size/2, size/2)`; fails unless `size > 0`.
    pub fn symmetric(size: f64) -> MathResult<Self> {
        Self::of(-size / 2.0, size / 2.0)
    }

    /// Compile-time constructor for interval constants.
    pub const fn of_const(low: f64, high: f64) -> Self {
        assert!(low < high, "interval bounds must satisfy low < high");
        Self { low, high }
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    pub fn size(&self) -> f64 {
        self.high - self.low
    }

    /// Excludes the upper bound.
    pub fn contains(&self, v: f64) -> bool {
        self.low <= v && v < self.high
    }

    /// Maps any real `v` to its equivalent inside the interval.
    ///
    /// Uses floored division, so the result lands in `[low, high)` for every
    /// finite input, negative or positive. Idempotent: reducing an already
    /// reduced value returns it unchanged.
    pub fn reduce(&self, v: f64) -> f64 {
        let span = self.high - self.low;
        v - span * ((v - self.low) / span).floor()
    }

    /// Returns `v` unchanged if contained, an out-of-interval error otherwise.
    pub fn check(&self, v: f64) -> MathResult<f64> {
        if self.contains(v) {
            Ok(v)
        } else {
            Err(MathError::OutOfInterval {
                value: v,
                interval: self.to_string(),
            })
        }
    }
}

impl fmt::Display for RightOpenInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{},{}[", self.low, self.high)
    }
}
