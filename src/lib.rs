pub mod cli;

pub mod comparison {
    pub mod comparisonrow;
    pub mod comparisondriver;
}

pub mod configuration;

pub mod console {
    pub mod input;
    pub mod report;
}

pub mod math {
    pub mod integrand;
    pub mod interval;
}

pub mod quadrature {
    pub mod trapezoidal;
    pub mod romberg;
    pub mod relativeerror;
}

pub mod quadratureerror;
