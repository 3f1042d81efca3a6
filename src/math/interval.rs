use std::fmt;

use crate::quadratureerror::QuadratureError;

/// Closed integration interval `[lower, upper]` with `lower < upper`.
///
/// The invariant is checked once on construction; every quadrature routine
/// that receives an `Interval` trusts it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    lower: f64,
    upper: f64
}

impl Interval {
    pub fn new(lower: f64, upper: f64) -> Result<Interval, QuadratureError> {
        if !lower.is_finite() || !upper.is_finite() || lower >= upper {
            return Err(QuadratureError::InvalidInterval { lower, upper });
        }
        Ok(Interval { lower, upper })
    }

    pub fn lower(&self) -> f64 {
        self.lower
    }

    pub fn upper(&self) -> f64 {
        self.upper
    }

    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.lower, self.upper)
    }
}
