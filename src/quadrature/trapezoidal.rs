use crate::math::integrand::Integrand;
use crate::math::interval::Interval;

/// Composite trapezoidal rule with `n` equal subintervals:
///
///   T(n) = h/2 · [ f(a) + f(b) + 2 · Σ_{i=1}^{n-1} f(a + i·h) ],  h = (b - a) / n
///
/// Panics if `a >= b` or `n == 0`; callers own the validation of both.
pub fn trapezoidal<F>(f: &F, a: f64, b: f64, n: usize) -> f64 where
    F: Integrand {
    assert!(a < b, "trapezoidal: lower bound {} must be below upper bound {}", a, b);
    assert!(n >= 1, "trapezoidal: at least one subinterval is required");

    let h = (b - a) / n as f64;
    let mut sum = f.value(a) + f.value(b);
    for i in 1..n {
        sum += 2.0 * f.value(a + i as f64 * h);
    }
    (h / 2.0) * sum
}

pub fn trapezoidal_on<F>(f: &F, interval: &Interval, n: usize) -> f64 where
    F: Integrand {
    trapezoidal(f, interval.lower(), interval.upper(), n)
}
