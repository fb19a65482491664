/// Univariate polynomial over `f64`, coefficients in ascending degree order.
#[derive(Debug, PartialEq, Clone)]
pub struct UnivariatePoly {
    coef: Vec<f64>
}

impl UnivariatePoly {
    pub fn new(coef: Vec<f64>) -> Self {
        UnivariatePoly {
            coef
        }
    }

    /// Build from a solution vector ordered highest degree first.
    pub fn from_descending(mut coef: Vec<f64>) -> Self {
        coef.reverse();
        UnivariatePoly::new(coef)
    }

    pub fn coefficients(&self) -> &[f64] {
        &self.coef
    }

    pub fn degree(&self) -> usize {
        self.coef.len().saturating_sub(1)
    }

    pub fn constant_term(&self) -> f64 {
        self.coef.first().copied().unwrap_or(0.0)
    }

    pub fn evaluate(&self, x: f64) -> f64 {
        // horner, starting from the leading coefficient
        self.coef.iter().rev().fold(0.0, |acc, curr| acc * x + curr)
    }
}
