use tracing::{
    debug,
    info
};

use crate::comparison::comparisonrow::ComparisonRow;
use crate::configuration::ComparisonSettings;
use crate::math::integrand::Integrand;
use crate::math::interval::Interval;
use crate::quadratureerror::QuadratureError;
use crate::quadrature::romberg::{
    romberg,
    RombergTable
};
use crate::quadrature::trapezoidal::trapezoidal_on;

// ─────────────────────────────────────────────────────────────────────────────
// ComparisonDriver
// ─────────────────────────────────────────────────────────────────────────────
//
// The reference estimate is computed once in `new` and only read afterwards;
// every row depends on it and on nothing else shared. The retained table
// spans max(reference_level, max_level), so the incremental rows never run
// past it.

pub struct ComparisonDriver<F> {
    integrand: F,
    interval: Interval,
    settings: ComparisonSettings,
    reference: f64,
    table: RombergTable
}

impl <F> ComparisonDriver<F> where
    F: Integrand {
    pub fn new(integrand: F, interval: Interval, settings: ComparisonSettings) -> Result<ComparisonDriver<F>, QuadratureError> {
        settings.validate()?;
        let mut table = RombergTable::build(&integrand, &interval, settings.reference_level())?;
        let reference = table.terminal();
        info!(
            interval = %interval,
            level = settings.reference_level(),
            reference,
            "reference value computed"
        );
        while table.max_level() < settings.max_level() {
            table.extend(&integrand)?;
        }
        Ok(ComparisonDriver { integrand, interval, settings, reference, table })
    }

    pub fn reference(&self) -> f64 {
        self.reference
    }

    pub fn interval(&self) -> &Interval {
        &self.interval
    }

    pub fn settings(&self) -> &ComparisonSettings {
        &self.settings
    }

    /// Rows for levels `0..=max_level`, each computed on demand by fresh
    /// trapezoidal and Romberg evaluations.
    pub fn rows(&self) -> ComparisonRows<'_, F> {
        ComparisonRows {
            driver: self,
            next_level: 0
        }
    }

    /// Same rows as [`rows`](Self::rows), read from the retained table.
    /// Every entry is produced by the same arithmetic, so the values are
    /// identical.
    pub fn rows_incremental(&self) -> impl Iterator<Item = ComparisonRow> + '_ {
        let reference = self.reference;
        (0..=self.settings.max_level()).filter_map(move |level| {
            let trapezoid = self.table.trapezoid(level)?;
            let diagonal = self.table.diagonal(level)?;
            Some(ComparisonRow::new(level, trapezoid, diagonal, reference))
        })
    }

    fn row(&self, level: usize) -> ComparisonRow {
        let trap = trapezoidal_on(&self.integrand, &self.interval, 1 << level);
        let romb = romberg(&self.integrand, self.interval.lower(), self.interval.upper(), level);
        let row = ComparisonRow::new(level, trap, romb, self.reference());
        debug!(
            level,
            n = row.n(),
            trapezoid_error = row.trapezoid_error(),
            romberg_error = row.romberg_error(),
            "comparison row"
        );
        row
    }
}

pub struct ComparisonRows<'a, F> {
    driver: &'a ComparisonDriver<F>,
    next_level: usize
}

impl <'a, F> Iterator for ComparisonRows<'a, F> where
    F: Integrand {
    type Item = ComparisonRow;

    fn next(&mut self) -> Option<ComparisonRow> {
        if self.next_level > self.driver.settings.max_level() {
            return None;
        }
        let row = self.driver.row(self.next_level);
        self.next_level += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.driver.settings.max_level() + 1).saturating_sub(self.next_level);
        (remaining, Some(remaining))
    }
}

impl <'a, F> ExactSizeIterator for ComparisonRows<'a, F> where
    F: Integrand {}

/// Computes the reference at `reference_level` and one row per level
/// `0..=max_level`.
///
/// Panics if `a >= b` or the levels are out of range.
pub fn compare<F>(f: F, a: f64, b: f64, reference_level: usize, max_level: usize) -> Vec<ComparisonRow> where
    F: Integrand {
    assert!(a < b, "compare: lower bound {} must be below upper bound {}", a, b);
    let run = Interval::new(a, b)
        .and_then(|interval| {
            let settings = ComparisonSettings::new(reference_level, max_level, 0)?;
            ComparisonDriver::new(f, interval, settings)
        });
    match run {
        Ok(driver) => driver.rows().collect(),
        Err(error) => panic!("compare: {}", error)
    }
}
