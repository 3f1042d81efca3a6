use tracing::debug;

use crate::math::integrand::Integrand;
use crate::math::interval::Interval;
use crate::quadratureerror::QuadratureError;
use crate::quadrature::trapezoidal::trapezoidal;

/// Deepest refinement level accepted by the checked API. Level `k` costs
/// `2^k + 1` evaluations for its trapezoidal column alone.
pub const MAX_LEVEL: usize = 30;

// ─────────────────────────────────────────────────────────────────────────────
// RombergTable
// ─────────────────────────────────────────────────────────────────────────────
//
// Triangular Richardson table on a doubling trapezoidal sequence:
//
//   R[k][0] = T(2^k)
//   R[k][j] = (4^j · R[k][j-1] - R[k-1][j-1]) / (4^j - 1),   1 <= j <= k
//
// Row k holds k + 1 entries. Column j cancels the h^(2j) term of the
// Euler-Maclaurin expansion, so the diagonal converges fastest.

#[derive(Debug, Clone)]
pub struct RombergTable {
    lower: f64,
    upper: f64,
    rows: Vec<Vec<f64>>
}

impl RombergTable {
    /// Builds rows `0..=max_level` for `f` over `interval`.
    pub fn build<F>(f: &F, interval: &Interval, max_level: usize) -> Result<RombergTable, QuadratureError> where
        F: Integrand {
        check_level(max_level)?;
        Ok(Self::from_bounds(f, interval.lower(), interval.upper(), max_level))
    }

    fn from_bounds<F>(f: &F, a: f64, b: f64, max_level: usize) -> RombergTable where
        F: Integrand {
        let mut table = RombergTable {
            lower: a,
            upper: b,
            rows: Vec::with_capacity(max_level + 1)
        };
        for _ in 0..=max_level {
            table.push_row(f);
        }
        table
    }

    /// Appends the next level, reusing the retained previous row, and returns
    /// its diagonal entry. `f` must be the integrand the table was built with.
    pub fn extend<F>(&mut self, f: &F) -> Result<f64, QuadratureError> where
        F: Integrand {
        check_level(self.rows.len())?;
        Ok(self.push_row(f))
    }

    fn push_row<F>(&mut self, f: &F) -> f64 where
        F: Integrand {
        let k = self.rows.len();
        let n = 1usize << k;
        let mut row = Vec::with_capacity(k + 1);
        row.push(trapezoidal(f, self.lower, self.upper, n));

        if let Some(prev) = self.rows.last() {
            for j in 1..=k {
                let factor = 4.0_f64.powi(j as i32);
                let refined = (factor * row[j - 1] - prev[j - 1]) / (factor - 1.0);
                row.push(refined);
            }
        }

        let diagonal = row[k];
        debug!(level = k, n, trapezoid = row[0], diagonal, "romberg row");
        self.rows.push(row);
        diagonal
    }

    pub fn max_level(&self) -> usize {
        self.rows.len() - 1
    }

    pub fn entry(&self, k: usize, j: usize) -> Option<f64> {
        self.rows.get(k).and_then(|row| row.get(j)).copied()
    }

    pub fn row(&self, k: usize) -> Option<&[f64]> {
        self.rows.get(k).map(|row| row.as_slice())
    }

    /// Raw trapezoidal value at level `k`.
    pub fn trapezoid(&self, k: usize) -> Option<f64> {
        self.entry(k, 0)
    }

    /// Most extrapolated value at level `k`.
    pub fn diagonal(&self, k: usize) -> Option<f64> {
        self.entry(k, k)
    }

    pub fn terminal(&self) -> f64 {
        let k = self.max_level();
        self.rows[k][k]
    }
}

fn check_level(level: usize) -> Result<(), QuadratureError> {
    if level > MAX_LEVEL {
        return Err(QuadratureError::LevelTooDeep { level, limit: MAX_LEVEL });
    }
    Ok(())
}

/// Romberg estimate `R[max_level][max_level]`, rebuilding the whole table on
/// every call.
///
/// Panics if `a >= b` or `max_level > MAX_LEVEL`.
pub fn romberg<F>(f: &F, a: f64, b: f64, max_level: usize) -> f64 where
    F: Integrand {
    assert!(a < b, "romberg: lower bound {} must be below upper bound {}", a, b);
    assert!(
        max_level <= MAX_LEVEL,
        "romberg: level {} exceeds the supported limit {}", max_level, MAX_LEVEL
    );
    RombergTable::from_bounds(f, a, b, max_level).terminal()
}
