//! Positive-definiteness test via leading principal minors
//!
//! Each minor is the determinant of a top-left `k x k` block, computed by
//! unpivoted elimination. A block whose elimination hits a near-zero pivot
//! reports a zero minor, which fails the test.

use crate::elimination::{EliminationConfig, determinant};
use crate::matrix::SquareMatrix;
use crate::traits::Scalar;

/// Check positive-definiteness using the default pivot tolerance
///
/// ```
/// use math_audio_dense::{SquareMatrix, is_positive_definite};
///
/// let a = SquareMatrix::from_rows(&[
///     [2.0_f64, 2.0, 1.0],
///     [2.0, 3.0, 0.0],
///     [1.0, 0.0, 2.0],
/// ])
/// .unwrap();
/// assert!(is_positive_definite(&a));
/// ```
pub fn is_positive_definite<T: Scalar>(a: &SquareMatrix<T>) -> bool {
    is_positive_definite_with_config(a, &EliminationConfig::default())
}

/// Check positive-definiteness with an explicit pivot tolerance
///
/// Returns `false` at the first leading principal minor that is not strictly
/// positive (NaN included); larger minors are not evaluated.
pub fn is_positive_definite_with_config<T: Scalar>(
    a: &SquareMatrix<T>,
    config: &EliminationConfig<T>,
) -> bool {
    (1..=a.dim()).all(|k| {
        let minor = determinant(a.leading_block(k), config.pivot_tolerance);
        log::trace!("leading principal minor {}: {}", k, minor);
        if minor > T::zero() {
            return true;
        }
        log::debug!("leading principal minor {} is not positive ({})", k, minor);
        false
    })
}

/// All `n` leading principal minors, smallest block first
///
/// Unlike [`is_positive_definite`] this never stops early, which makes it
/// useful for reporting where a matrix stops being definite.
pub fn leading_principal_minors<T: Scalar>(
    a: &SquareMatrix<T>,
    config: &EliminationConfig<T>,
) -> Vec<T> {
    (1..=a.dim())
        .map(|k| determinant(a.leading_block(k), config.pivot_tolerance))
        .collect()
}
