//! Strict diagonal dominance test

use crate::matrix::SquareMatrix;
use crate::traits::Scalar;

/// Check whether every row satisfies `|A[i][i]| > sum_{j != i} |A[i][j]|`
///
/// Equality fails the test. Stops at the first row that is not dominant.
pub fn is_diagonally_dominant<T: Scalar>(a: &SquareMatrix<T>) -> bool {
    a.as_array().outer_iter().enumerate().all(|(i, row)| {
        let diag = row[i].abs();
        let off_diag = row
            .iter()
            .enumerate()
            .filter(|&(j, _)| j != i)
            .fold(T::zero(), |acc, (_, &v)| acc + v.abs());
        diag > off_diag
    })
}
