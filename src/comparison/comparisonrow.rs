use serde::Serialize;

use crate::quadrature::relativeerror::relative_error;

/// One line of the convergence table: both estimates at refinement level
/// `level` (`n = 2^level` subintervals) and their relative errors in percent.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ComparisonRow {
    level: usize,
    n: usize,
    trapezoid: f64,
    trapezoid_error: f64,
    romberg: f64,
    romberg_error: f64
}

impl ComparisonRow {
    pub fn new(level: usize, trapezoid: f64, romberg: f64, reference: f64) -> ComparisonRow {
        ComparisonRow {
            level,
            n: 1 << level,
            trapezoid,
            trapezoid_error: relative_error(trapezoid, reference),
            romberg,
            romberg_error: relative_error(romberg, reference)
        }
    }

    pub fn level(&self) -> usize {
        self.level
    }

    pub fn n(&self) -> usize {
        self.n
    }

    pub fn trapezoid(&self) -> f64 {
        self.trapezoid
    }

    pub fn trapezoid_error(&self) -> f64 {
        self.trapezoid_error
    }

    pub fn romberg(&self) -> f64 {
        self.romberg
    }

    pub fn romberg_error(&self) -> f64 {
        self.romberg_error
    }
}
