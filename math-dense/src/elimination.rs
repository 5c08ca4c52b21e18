//! Forward Gaussian elimination shared by the solver and the determinant helper
//!
//! A single routine reduces a (possibly augmented) matrix to upper-triangular
//! form. The caller picks the row-selection policy:
//! - [`Pivoting::Partial`]: largest remaining magnitude in the pivot column
//! - [`Pivoting::None`]: diagonal entries taken in order
//!
//! What happens on a near-zero pivot is left to the caller, which receives an
//! [`Elimination::Breakdown`] and decides whether that is an error or a zero.

use crate::traits::{PIVOT_EPSILON, Scalar};
use ndarray::{Array2, ArrayView2};

/// Tolerance settings for elimination-based routines
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EliminationConfig<R> {
    /// Pivots with magnitude strictly below this value count as zero
    pub pivot_tolerance: R,
}

impl<R: Scalar> Default for EliminationConfig<R> {
    fn default() -> Self {
        Self {
            pivot_tolerance: R::from_tolerance(PIVOT_EPSILON),
        }
    }
}

impl<R: Scalar> EliminationConfig<R> {
    /// Create config with a specific pivot tolerance
    pub fn with_pivot_tolerance(pivot_tolerance: R) -> Self {
        Self { pivot_tolerance }
    }
}

/// Row-selection policy for [`forward_eliminate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Pivoting {
    /// Take the diagonal entry as pivot, never reorder rows
    None,
    /// Swap in the row with the largest magnitude in the pivot column
    Partial,
}

/// Outcome of a forward elimination pass
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Elimination<T> {
    /// Every pivot cleared the tolerance; the matrix is now upper triangular
    Complete {
        /// Product of the pivots in elimination order
        pivot_product: T,
    },
    /// The pivot of `column` fell below tolerance or overflowed; the matrix is
    /// partially reduced
    Breakdown { column: usize, pivot: T },
}

/// Reduce `work` in place to upper-triangular form.
///
/// `work` has `n` rows and at least `n` columns; any extra columns (the
/// right-hand side of an augmented system) are carried through every row
/// operation. Under partial pivoting, exact ties keep the lowest row index.
/// A pivot that is negligible or not finite (overflow during elimination)
/// stops the pass with [`Elimination::Breakdown`].
pub(crate) fn forward_eliminate<T: Scalar>(
    work: &mut Array2<T>,
    pivoting: Pivoting,
    tolerance: T,
) -> Elimination<T> {
    let n = work.nrows();
    let ncols = work.ncols();
    debug_assert!(ncols >= n, "elimination needs at least as many columns as rows");

    let mut pivot_product = T::one();

    for i in 0..n {
        if pivoting == Pivoting::Partial {
            let mut max_val = work[[i, i]].abs();
            let mut max_row = i;

            for r in (i + 1)..n {
                let val = work[[r, i]].abs();
                if val > max_val {
                    max_val = val;
                    max_row = r;
                }
            }

            if max_row != i {
                log::debug!("partial pivoting: swapping rows {} and {}", i, max_row);
                for c in 0..ncols {
                    work.swap([i, c], [max_row, c]);
                }
            }
        }

        let pivot = work[[i, i]];
        if !pivot.is_finite() || pivot.is_negligible(tolerance) {
            return Elimination::Breakdown { column: i, pivot };
        }
        pivot_product *= pivot;

        for r in (i + 1)..n {
            let factor = work[[r, i]] / pivot;
            for c in i..ncols {
                let update = factor * work[[i, c]];
                work[[r, c]] -= update;
            }
        }
    }

    Elimination::Complete { pivot_product }
}

/// Determinant by unpivoted elimination on a private copy.
///
/// Returns exactly zero as soon as a pivot falls below `tolerance` or
/// overflows, so a matrix that merely needs a row exchange also reports zero.
pub(crate) fn determinant<T: Scalar>(a: ArrayView2<'_, T>, tolerance: T) -> T {
    let mut work = a.to_owned();
    match forward_eliminate(&mut work, Pivoting::None, tolerance) {
        Elimination::Complete { pivot_product } => pivot_product,
        Elimination::Breakdown { .. } => T::zero(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use ndarray::array;

    fn tol() -> f64 {
        EliminationConfig::<f64>::default().pivot_tolerance
    }

    #[test]
    fn test_default_tolerance() {
        assert_eq!(EliminationConfig::<f64>::default().pivot_tolerance, 1e-14);
        assert_eq!(
            EliminationConfig::with_pivot_tolerance(1e-8_f64).pivot_tolerance,
            1e-8
        );
    }

    #[test]
    fn test_determinant_small() {
        assert_relative_eq!(determinant(array![[3.0_f64]].view(), tol()), 3.0);
        assert_relative_eq!(
            determinant(array![[4.0_f64, 1.0], [1.0, 3.0]].view(), tol()),
            11.0,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            determinant(
                array![[2.0_f64, 2.0, 1.0], [2.0, 3.0, 0.0], [1.0, 0.0, 2.0]].view(),
                tol()
            ),
            1.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_determinant_negative() {
        assert_relative_eq!(
            determinant(array![[1.0_f64, 2.0], [2.0, 1.0]].view(), tol()),
            -3.0,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_determinant_zero_pivot_without_exchange() {
        // Nonsingular, but the leading entry is zero and rows are never swapped
        let det = determinant(array![[0.0_f64, 1.0], [1.0, 0.0]].view(), tol());
        assert_eq!(det, 0.0);
    }

    #[test]
    fn test_determinant_leaves_input_alone() {
        let a = array![[2.0_f64, 1.0], [4.0, 5.0]];
        let before = a.clone();
        let _ = determinant(a.view(), tol());
        assert_eq!(a, before);
    }

    #[test]
    fn test_partial_pivot_picks_largest() {
        let mut work = array![[1.0_f64, 2.0, 3.0], [4.0, 1.0, 6.0]];
        let outcome = forward_eliminate(&mut work, Pivoting::Partial, tol());

        assert!(matches!(outcome, Elimination::Complete { .. }));
        // Row 1 moved to the top
        assert_eq!(work[[0, 0]], 4.0);
        assert_eq!(work[[0, 2]], 6.0);
        assert_relative_eq!(work[[1, 0]], 0.0);
        assert_relative_eq!(work[[1, 1]], 1.75, epsilon = 1e-12);
        assert_relative_eq!(work[[1, 2]], 1.5, epsilon = 1e-12);
    }

    #[test]
    fn test_partial_pivot_tie_keeps_first_row() {
        let mut work = array![[-2.0_f64, 1.0, 0.0], [2.0, 3.0, 1.0]];
        let _ = forward_eliminate(&mut work, Pivoting::Partial, tol());

        assert_eq!(work[[0, 0]], -2.0);
        assert_eq!(work[[0, 1]], 1.0);
        assert_relative_eq!(work[[1, 1]], 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_breakdown_reports_column() {
        let mut work = array![[1.0_f64, 2.0, 1.0], [2.0, 4.0, 2.0]];
        let outcome = forward_eliminate(&mut work, Pivoting::Partial, tol());

        match outcome {
            Elimination::Breakdown { column, pivot } => {
                assert_eq!(column, 1);
                assert!(pivot.abs() < 1e-14);
            }
            Elimination::Complete { .. } => panic!("rank-deficient matrix should break down"),
        }
    }

    #[test]
    fn test_overflowing_pivot_breaks_down() {
        // 1e308 - (-1e308) overflows to inf in the second pivot
        let mut work = array![[1.0_f64, -1e308, 0.0], [1.0, 1e308, 0.0], [1.0, 1e308, 0.0]];
        let outcome = forward_eliminate(&mut work, Pivoting::None, tol());

        match outcome {
            Elimination::Breakdown { column, pivot } => {
                assert_eq!(column, 1);
                assert!(pivot.is_infinite());
            }
            Elimination::Complete { .. } => panic!("overflowed pivot should break down"),
        }
    }

    #[test]
    fn test_determinant_never_nan() {
        let a = array![[1.0_f64, -1e308, 0.0], [1.0, 1e308, 0.0], [1.0, 1e308, 0.0]];
        assert_eq!(determinant(a.view(), tol()), 0.0);
    }
}
