//! Gaussian elimination solver
//!
//! Solves a square system given as an augmented matrix `[A | b]` using
//! forward elimination with partial pivoting followed by back-substitution.

use crate::elimination::{Elimination, EliminationConfig, Pivoting, forward_eliminate};
use crate::error::{DenseError, Result};
use crate::matrix::AugmentedMatrix;
use crate::traits::Scalar;
use ndarray::{Array1, Array2};

/// Solve `A x = b` for the augmented matrix `[A | b]`
///
/// Uses the default pivot tolerance ([`PIVOT_EPSILON`](crate::PIVOT_EPSILON)).
///
/// ```
/// use math_audio_dense::{AugmentedMatrix, solve};
///
/// let system = AugmentedMatrix::from_rows(&[
///     [2.0_f64, -1.0, 1.0, 6.0],
///     [1.0, 3.0, 1.0, 0.0],
///     [-1.0, 5.0, 4.0, -3.0],
/// ])
/// .unwrap();
///
/// let x = solve(&system).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-10);
/// assert!((x[1] + 1.0).abs() < 1e-10);
/// assert!((x[2] - 1.0).abs() < 1e-10);
/// ```
pub fn solve<T: Scalar>(system: &AugmentedMatrix<T>) -> Result<Array1<T>> {
    solve_with_config(system, &EliminationConfig::default())
}

/// Solve `A x = b` with an explicit pivot tolerance
///
/// Fails with [`DenseError::SingularMatrix`] when, after row exchange, the
/// best available pivot is below `config.pivot_tolerance` or has overflowed.
pub fn solve_with_config<T: Scalar>(
    system: &AugmentedMatrix<T>,
    config: &EliminationConfig<T>,
) -> Result<Array1<T>> {
    let mut work = system.as_array().to_owned();

    if let Elimination::Breakdown { column, pivot } =
        forward_eliminate(&mut work, Pivoting::Partial, config.pivot_tolerance)
    {
        log::debug!(
            "Gaussian elimination broke down in column {}: pivot = {}",
            column,
            pivot
        );
        return Err(DenseError::SingularMatrix {
            column,
            pivot: pivot.to_f64().unwrap_or(f64::NAN),
        });
    }

    Ok(back_substitute(&work))
}

/// Back-substitution on an upper-triangular augmented matrix
fn back_substitute<T: Scalar>(upper: &Array2<T>) -> Array1<T> {
    let n = upper.nrows();
    let mut x = Array1::zeros(n);

    for i in (0..n).rev() {
        let mut sum = T::zero();
        for j in (i + 1)..n {
            sum += upper[[i, j]] * x[j];
        }
        x[i] = (upper[[i, n]] - sum) / upper[[i, i]];
    }

    x
}
