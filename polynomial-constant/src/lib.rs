//! Recover the constant term of a polynomial from sample points whose y
//! values arrive as digit strings in mixed bases.
//!
//! Shares are decoded with [`base_decoder`], the coefficients are fitted by
//! solving a Vandermonde system with [`linear_system`], and the last
//! coefficient (degree zero) is returned. [`field`] offers an exact
//! cross-check over a prime field.

mod error;
pub mod field;
mod sample;
pub mod univar_poly;
mod vandermonde;

pub use error::{PolynomialError, Result};
pub use linear_system::SolverConfig;
pub use sample::{decode_shares, EncodedShare, SamplePoint};
pub use univar_poly::UnivariatePoly;
pub use vandermonde::{
    fit_polynomial, solve_polynomial_constant, solve_polynomial_constant_with, vandermonde_system,
};
