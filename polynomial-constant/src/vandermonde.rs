use linear_system::{solve_linear_system_with, SolverConfig};

use crate::error::{PolynomialError, Result};
use crate::sample::SamplePoint;
use crate::univar_poly::UnivariatePoly;

/// Constant term of the degree-(k-1) polynomial through the first `k` points.
pub fn solve_polynomial_constant(points: &[SamplePoint], k: usize) -> Result<f64> {
    solve_polynomial_constant_with(points, k, &SolverConfig::default())
}

pub fn solve_polynomial_constant_with(
    points: &[SamplePoint],
    k: usize,
    config: &SolverConfig,
) -> Result<f64> {
    let poly = fit_polynomial(points, k, config)?;
    log::debug!("constant term for k = {k}: {}", poly.constant_term());
    Ok(poly.constant_term())
}

/// Fit the degree-(k-1) polynomial through the first `k` points.
///
/// The x values are expected to be distinct; a repeated x makes the system
/// singular and surfaces as [`PolynomialError::Solve`].
pub fn fit_polynomial(
    points: &[SamplePoint],
    k: usize,
    config: &SolverConfig,
) -> Result<UnivariatePoly> {
    let points = take_points(points, k)?;
    let (a, b) = vandermonde_system(points);
    let coeffs = solve_linear_system_with(&a, &b, config)?;
    Ok(UnivariatePoly::from_descending(coeffs))
}

/// Row i is `[x_i^(k-1), ..., x_i, 1]`, right-hand side entry i is `y_i`.
pub fn vandermonde_system(points: &[SamplePoint]) -> (Vec<Vec<f64>>, Vec<f64>) {
    let k = points.len();
    let a = points
        .iter()
        .map(|point| {
            let mut row = vec![0.0; k];
            let mut power = 1.0;
            for entry in row.iter_mut().rev() {
                *entry = power;
                power *= point.x as f64;
            }
            row
        })
        .collect();
    let b = points.iter().map(|point| point.y as f64).collect();
    (a, b)
}

// the first k points; extra points are ignored
pub(crate) fn take_points(points: &[SamplePoint], k: usize) -> Result<&[SamplePoint]> {
    if k == 0 {
        return Err(PolynomialError::ZeroPoints);
    }
    points.get(..k).ok_or(PolynomialError::NotEnoughPoints {
        required: k,
        supplied: points.len(),
    })
}
