use crate::config::SolverConfig;
use crate::error::{Result, SolveError};

/// Solve `A x = b` with the default [`SolverConfig`].
///
/// `a` is row-major, one `Vec` per row. Neither input is modified; the
/// elimination runs on private copies.
pub fn solve_linear_system(a: &[Vec<f64>], b: &[f64]) -> Result<Vec<f64>> {
    solve_linear_system_with(a, b, &SolverConfig::default())
}

/// Solve `A x = b` by Gaussian elimination with partial pivoting followed by
/// back-substitution.
///
/// Fails with [`SolveError::SingularMatrix`] as soon as the best available
/// pivot in a column is zero, non-finite, or no larger than the pivot
/// tolerance times the largest term that was cancelled into it.
pub fn solve_linear_system_with(
    a: &[Vec<f64>],
    b: &[f64],
    config: &SolverConfig,
) -> Result<Vec<f64>> {
    let n = a.len();
    check_shape(a, b)?;
    let tolerance = config.effective_tolerance();
    log::debug!("solving {n}x{n} system (pivot tolerance {tolerance})");

    let mut a = a.to_vec();
    let mut b = b.to_vec();
    // largest magnitude that flowed into each entry during elimination
    let mut magnitude: Vec<Vec<f64>> = a
        .iter()
        .map(|row| row.iter().map(|v| v.abs()).collect())
        .collect();

    for i in 0..n {
        let mut pivot = i;
        for j in (i + 1)..n {
            if a[j][i].abs() > a[pivot][i].abs() {
                pivot = j;
            }
        }
        if pivot != i {
            log::trace!("column {i}: swapping rows {i} and {pivot}");
            a.swap(i, pivot);
            b.swap(i, pivot);
            magnitude.swap(i, pivot);
        }

        let pivot_value = a[i][i];
        let threshold = tolerance * magnitude[i][i];
        if !pivot_value.is_finite() || pivot_value == 0.0 || pivot_value.abs() <= threshold {
            log::debug!("column {i}: pivot {pivot_value} is below threshold {threshold}, matrix is singular");
            return Err(SolveError::SingularMatrix {
                column: i,
                pivot: pivot_value,
            });
        }

        // eliminate below the pivot
        let (upper, lower) = a.split_at_mut(i + 1);
        let pivot_row = &upper[i];
        let b_pivot = b[i];
        for (offset, row) in lower.iter_mut().enumerate() {
            let factor = row[i] / pivot_value;
            let row_magnitude = &mut magnitude[i + 1 + offset];
            for k in i..n {
                let term = factor * pivot_row[k];
                row[k] -= term;
                row_magnitude[k] = row_magnitude[k].max(term.abs());
            }
            b[i + 1 + offset] -= factor * b_pivot;
        }
    }

    let mut x = vec![0.0; n];
    for i in (0..n).rev() {
        let tail: f64 = ((i + 1)..n).map(|j| a[i][j] * x[j]).sum();
        x[i] = (b[i] - tail) / a[i][i];
    }
    Ok(x)
}

/// Max-norm of `A x - b`.
pub fn residual_norm(a: &[Vec<f64>], b: &[f64], x: &[f64]) -> f64 {
    a.iter()
        .zip(b)
        .map(|(row, rhs)| {
            let lhs: f64 = row.iter().zip(x).map(|(aij, xj)| aij * xj).sum();
            (lhs - rhs).abs()
        })
        .fold(0.0, f64::max)
}

fn check_shape(a: &[Vec<f64>], b: &[f64]) -> Result<()> {
    let rows = a.len();
    if let Some((row, entries)) = a.iter().enumerate().find(|(_, r)| r.len() != rows) {
        return Err(SolveError::DimensionMismatch {
            rows,
            row,
            len: entries.len(),
        });
    }
    if b.len() != rows {
        return Err(SolveError::RhsLength {
            expected: rows,
            actual: b.len(),
        });
    }
    Ok(())
}
