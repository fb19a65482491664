//! Dense linear solves by Gaussian elimination with partial pivoting.

pub mod config;
mod error;
mod gaussian;

pub use config::SolverConfig;
pub use error::{Result, SolveError};
pub use gaussian::{residual_norm, solve_linear_system, solve_linear_system_with};
