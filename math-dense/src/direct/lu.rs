//! LU factorization without pivoting
//!
//! Doolittle's method: `L` has a unit diagonal, `U` is upper triangular and
//! `A = L U` with no row permutation. Matrices that need row exchanges to
//! stay stable are not handled specially; a near-zero pivot zero-fills the
//! corresponding column of `L` and is recorded in
//! [`LuFactors::degenerate_columns`].

use crate::elimination::EliminationConfig;
use crate::matrix::SquareMatrix;
use crate::traits::Scalar;
use ndarray::Array2;

/// LU factorization result
///
/// Stores L and U separately along with the determinant of the input
#[derive(Debug, Clone, PartialEq)]
pub struct LuFactors<T: Scalar> {
    /// Unit lower-triangular factor
    pub l: Array2<T>,
    /// Upper-triangular factor
    pub u: Array2<T>,
    /// Product of the diagonal of `U`
    pub determinant: T,
    /// Columns whose pivot `U[i][i]` fell below tolerance, in ascending order
    pub degenerate_columns: Vec<usize>,
}

impl<T: Scalar> LuFactors<T> {
    /// Matrix dimension
    #[inline]
    pub fn dim(&self) -> usize {
        self.u.nrows()
    }

    /// Whether any pivot fell below tolerance.
    ///
    /// When this is `true`, `L U` generally does not reproduce the input and
    /// the determinant is only meaningful as "zero or close to it".
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        !self.degenerate_columns.is_empty()
    }

    /// Multiply the factors back together
    pub fn reconstruct(&self) -> Array2<T> {
        self.l.dot(&self.u)
    }
}

/// Factor `A = L U` using the default pivot tolerance
///
/// ```
/// use math_audio_dense::{SquareMatrix, lu_factorize};
///
/// let a = SquareMatrix::from_rows(&[[4.0_f64, 3.0], [6.0, 3.0]]).unwrap();
/// let lu = lu_factorize(&a);
/// assert!((lu.determinant + 6.0).abs() < 1e-12);
/// assert_eq!(lu.l[[0, 0]], 1.0);
/// ```
pub fn lu_factorize<T: Scalar>(a: &SquareMatrix<T>) -> LuFactors<T> {
    lu_factorize_with_config(a, &EliminationConfig::default())
}

/// Factor `A = L U` with an explicit pivot tolerance
///
/// Never fails. Rows below a pivot with `|U[i][i]| < config.pivot_tolerance`
/// get `L[j][i] = 0` instead of a division by the tiny pivot.
pub fn lu_factorize_with_config<T: Scalar>(
    a: &SquareMatrix<T>,
    config: &EliminationConfig<T>,
) -> LuFactors<T> {
    let n = a.dim();
    let tol = config.pivot_tolerance;

    let mut l: Array2<T> = Array2::eye(n);
    let mut u: Array2<T> = Array2::zeros((n, n));
    let mut degenerate_columns = Vec::new();

    for i in 0..n {
        // Row i of U
        for j in i..n {
            let s = (0..i).fold(T::zero(), |acc, k| acc + l[[i, k]] * u[[k, j]]);
            u[[i, j]] = a[[i, j]] - s;
        }

        let pivot = u[[i, i]];
        let degenerate = pivot.is_negligible(tol);
        if degenerate {
            log::warn!(
                "LU pivot in column {} is {} (below tolerance {}); zero-filling L below it",
                i,
                pivot,
                tol
            );
            degenerate_columns.push(i);
        }

        // Column i of L
        for j in (i + 1)..n {
            if degenerate {
                l[[j, i]] = T::zero();
            } else {
                let s = (0..i).fold(T::zero(), |acc, k| acc + l[[j, k]] * u[[k, i]]);
                l[[j, i]] = (a[[j, i]] - s) / pivot;
            }
        }
    }

    let determinant = u.diag().iter().fold(T::one(), |acc, &d| acc * d);

    LuFactors {
        l,
        u,
        determinant,
        degenerate_columns,
    }
}
