//! Polynomials with Horner evaluation.

use std::fmt;

use crate::errors::{MathError, MathResult};

/// A real polynomial, coefficients stored highest degree first.
#[derive(Debug, Clone)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

impl Polynomial {
    /// Creates a polynomial from its leading coefficient and the remaining
    /// coefficients in decreasing degree order.
    ///
    /// Fails if the leading coefficient is zero, which would misrepresent the
    /// degree.
    pub fn new(leading: f64, rest: &[f64]) -> MathResult<Self> {
        if leading == 0.0 {
            return Err(MathError::ZeroLeadingCoefficient);
        }

        let mut coefficients = Vec::with_capacity(rest.len() + 1);
        coefficients.push(leading);
        coefficients.extend_from_slice(rest);
        Ok(Self { coefficients })
    }

    /// Degree of the polynomial.
    pub fn degree(&self) -> usize {
        self.coefficients.len() - 1
    }

    /// Evaluates the polynomial at `x` using Horner's method.
    pub fn at(&self, x: f64) -> f64 {
        let mut acc = self.coefficients[0];
        for &c in &self.coefficients[1..] {
            acc = acc * x + c;
        }
        acc
    }
}

impl fmt::Display for Polynomial {
    /// Prints the usual `ax^n + bx^(n-1) + ...` form, skipping zero
    /// coefficients and unit factors.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let degree = self.degree();
        let mut first = true;
        for (i, &c) in self.coefficients.iter().enumerate() {
            if c == 0.0 {
                continue;
            }

            if c < 0.0 {
                write!(f, "-")?;
            } else if !first {
                write!(f, "+")?;
            }
            first = false;

            let power = degree - i;
            if c.abs() != 1.0 || power == 0 {
                write!(f, "{}", c.abs())?;
            }
            match power {
                0 => {}
                1 => write!(f, "x")?,
                p => write!(f, "x^{p}")?,
            }
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_at_matches_direct_evaluation() {
        // x^2 + 2x + 3 at x = 2: 4 + 4 + 3 = 11
        let p = Polynomial::new(1.0, &[2.0, 3.0]).unwrap();
        assert_eq!(p.at(2.0), 11.0);
    }

    #[test]
    fn test_constant_polynomial() {
        let p = Polynomial::new(4.5, &[]).unwrap();
        assert_eq!(p.degree(), 0);
        assert_eq!(p.at(123.0), 4.5);
    }

    #[test]
    fn test_cubic() {
        // 2x^3 - x + 5 at x = -1: -2 + 1 + 5 = 4
        let p = Polynomial::new(2.0, &[0.0, -1.0, 5.0]).unwrap();
        assert_eq!(p.at(-1.0), 4.0);
        assert_eq!(p.degree(), 3);
    }

    #[test]
    fn test_zero_leading_coefficient_rejected() {
        assert!(matches!(
            Polynomial::new(0.0, &[1.0]),
            Err(MathError::ZeroLeadingCoefficient)
        ));
    }

    #[test]
    fn test_display() {
        let p = Polynomial::new(1.0, &[-2.0, 0.0, 3.0]).unwrap();
        assert_eq!(p.to_string(), "x^3-2x^2+3");
        let q = Polynomial::new(-1.0, &[1.0]).unwrap();
        assert_eq!(q.to_string(), "-x+1");
    }
}
