//! Small math helpers shared by the workspace.

/// Floating-point modulo via `libm`, well-defined for negative dividends.
#[inline]
pub fn fmod(x: f64, y: f64) -> f64 {
    libm::fmod(x, y)
}

/// `asin` with the argument clamped to [-1, 1].
///
/// Spherical-trigonometry expressions can drift a few ulps outside the
/// mathematical range and would otherwise produce NaN at the poles.
#[inline]
pub fn asin_safe(x: f64) -> f64 {
    x.clamp(-1.0, 1.0).asin()
}
