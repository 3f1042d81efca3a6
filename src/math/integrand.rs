/// A real function of one real variable that can be handed to the quadrature
/// routines. Implementations must be pure: the same `x` always yields the same
/// value.
pub trait Integrand {
    fn value(&self, x: f64) -> f64;
}

impl <F> Integrand for F where
    F: Fn(f64) -> f64 {
    fn value(&self, x: f64) -> f64 {
        self(x)
    }
}

pub fn gaussian(x: f64) -> f64 {
    (-x * x).exp()
}

/// f(x) = exp(-x²)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Gaussian;

impl Gaussian {
    pub fn description(&self) -> &'static str {
        "f(x) = exp(-x^2)"
    }
}

impl Integrand for Gaussian {
    fn value(&self, x: f64) -> f64 {
        gaussian(x)
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;

    #[test]
    fn gaussian_peaks_at_origin() {
        assert_eq!(Gaussian.value(0.0), 1.0);
        assert_relative_eq!(Gaussian.value(1.0), (-1.0_f64).exp());
        assert_eq!(Gaussian.value(2.0), Gaussian.value(-2.0));
    }

    #[test]
    fn closures_are_integrands() {
        let linear = |x: f64| 3.0 * x + 1.0;
        assert_eq!(linear.value(2.0), 7.0);
    }
}
