/// Relative error in percent: `|approx - exact| / |exact| · 100`.
///
/// A zero `exact` gives `+inf` (also for `approx == 0`) instead of NaN, so the
/// value stays orderable and renders as "inf".
pub fn relative_error(approx: f64, exact: f64) -> f64 {
    if exact == 0.0 {
        return f64::INFINITY;
    }
    ((approx - exact) / exact).abs() * 100.0
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn percentage_of_reference() {
        assert_relative_eq!(relative_error(1.01, 1.0), 1.0, max_relative = 1e-12);
        assert_relative_eq!(relative_error(-2.2, -2.0), 10.0, max_relative = 1e-12);
        assert_eq!(relative_error(3.5, 3.5), 0.0);
    }

    #[test]
    fn zero_reference_is_infinite() {
        assert_eq!(relative_error(0.25, 0.0), f64::INFINITY);
        assert_eq!(relative_error(0.0, 0.0), f64::INFINITY);
        assert_eq!(relative_error(-1.0, -0.0), f64::INFINITY);
    }
}
