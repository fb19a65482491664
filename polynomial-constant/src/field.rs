//! Exact constant-term recovery over a prime field.
//!
//! Lagrange interpolation evaluated at zero:
//! `c = sum_i y_i * prod_{j != i} x_j / (x_j - x_i)`.
//! Over a large enough field this reproduces the exact integer answer,
//! which the floating-point solve can be checked against.

use ark_ff::PrimeField;

use crate::error::{PolynomialError, Result};
use crate::sample::SamplePoint;
use crate::vandermonde::take_points;

/// Map a signed integer into the field, negatives to their additive inverse.
pub fn field_from_i64<F: PrimeField>(value: i64) -> F {
    let magnitude = F::from(value.unsigned_abs());
    if value < 0 {
        -magnitude
    } else {
        magnitude
    }
}

pub fn constant_term_in_field<F: PrimeField>(points: &[SamplePoint], k: usize) -> Result<F> {
    let points = take_points(points, k)?;
    let xs: Vec<F> = points.iter().map(|point| field_from_i64(point.x)).collect();

    let mut constant = F::zero();
    for (i, point) in points.iter().enumerate() {
        // basis polynomial i at zero
        let mut numerator = F::one();
        let mut denominator = F::one();
        for (_, x_j) in xs.iter().enumerate().filter(|(j, _)| *j != i) {
            numerator *= x_j;
            denominator *= *x_j - xs[i];
        }
        // zero only when another point shares this x
        let inverse = denominator
            .inverse()
            .ok_or(PolynomialError::DuplicateAbscissa { x: point.x })?;
        constant += field_from_i64::<F>(point.y) * numerator * inverse;
    }
    Ok(constant)
}
