//! Shape-checked dense matrices
//!
//! Both wrappers own an `ndarray::Array2` and are only constructible through
//! validating constructors, so every routine in the crate can rely on:
//! - at least one row
//! - the expected column count (`n` for [`SquareMatrix`], `n + 1` for
//!   [`AugmentedMatrix`])
//! - finite entries only

use crate::error::{DenseError, Result};
use crate::traits::Scalar;
use ndarray::{Array1, Array2, ArrayView1, ArrayView2, s};
use std::ops::Index;

/// Square `n x n` matrix
#[derive(Debug, Clone, PartialEq)]
pub struct SquareMatrix<T: Scalar> {
    data: Array2<T>,
}

impl<T: Scalar> SquareMatrix<T> {
    /// Wrap an existing array, checking that it is square, non-empty and finite.
    ///
    /// ```
    /// use math_audio_dense::SquareMatrix;
    /// use ndarray::array;
    ///
    /// let a = SquareMatrix::new(array![[4.0_f64, 1.0], [1.0, 3.0]]).unwrap();
    /// assert_eq!(a.dim(), 2);
    /// assert!(SquareMatrix::new(array![[1.0_f64, 2.0, 3.0]]).is_err());
    /// ```
    pub fn new(data: Array2<T>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 {
            return Err(DenseError::InvalidShape {
                rows,
                cols,
                reason: "matrix must have at least one row",
            });
        }
        if rows != cols {
            return Err(DenseError::InvalidShape {
                rows,
                cols,
                reason: "expected a square matrix",
            });
        }
        check_finite(&data)?;
        Ok(Self { data })
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        Self::new(rows_to_array(rows)?)
    }

    /// Matrix dimension `n`
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// Borrow the underlying storage
    #[inline]
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// Read-only view of the whole matrix
    #[inline]
    pub fn view(&self) -> ArrayView2<'_, T> {
        self.data.view()
    }

    /// Top-left `k x k` block.
    ///
    /// # Panics
    ///
    /// Panics if `k > self.dim()`.
    pub fn leading_block(&self, k: usize) -> ArrayView2<'_, T> {
        self.data.slice(s![..k, ..k])
    }

    /// Consume the wrapper and return the storage
    pub fn into_inner(self) -> Array2<T> {
        self.data
    }
}

impl<T: Scalar> TryFrom<Array2<T>> for SquareMatrix<T> {
    type Error = DenseError;

    fn try_from(data: Array2<T>) -> Result<Self> {
        Self::new(data)
    }
}

impl<T: Scalar> Index<[usize; 2]> for SquareMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; 2]) -> &T {
        &self.data[index]
    }
}

/// Augmented `n x (n + 1)` matrix `[A | b]` describing the system `A x = b`
#[derive(Debug, Clone, PartialEq)]
pub struct AugmentedMatrix<T: Scalar> {
    data: Array2<T>,
}

impl<T: Scalar> AugmentedMatrix<T> {
    /// Wrap an existing array, checking for `n` rows and `n + 1` columns.
    pub fn new(data: Array2<T>) -> Result<Self> {
        let (rows, cols) = data.dim();
        if rows == 0 {
            return Err(DenseError::InvalidShape {
                rows,
                cols,
                reason: "matrix must have at least one row",
            });
        }
        if cols != rows + 1 {
            return Err(DenseError::InvalidShape {
                rows,
                cols,
                reason: "augmented matrix needs exactly one more column than rows",
            });
        }
        check_finite(&data)?;
        Ok(Self { data })
    }

    /// Build from nested rows, rejecting ragged input.
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        Self::new(rows_to_array(rows)?)
    }

    /// Join a coefficient matrix and a right-hand side into `[A | b]`.
    pub fn from_parts(a: &SquareMatrix<T>, b: &Array1<T>) -> Result<Self> {
        let n = a.dim();
        if b.len() != n {
            return Err(DenseError::DimensionMismatch {
                expected: n,
                got: b.len(),
            });
        }
        let data = Array2::from_shape_fn((n, n + 1), |(i, j)| if j < n { a[[i, j]] } else { b[i] });
        Self::new(data)
    }

    /// Number of unknowns `n`
    #[inline]
    pub fn dim(&self) -> usize {
        self.data.nrows()
    }

    /// Borrow the underlying `n x (n + 1)` storage
    #[inline]
    pub fn as_array(&self) -> &Array2<T> {
        &self.data
    }

    /// Coefficient block `A`
    pub fn coefficients(&self) -> ArrayView2<'_, T> {
        self.data.slice(s![.., ..self.dim()])
    }

    /// Right-hand side column `b`
    pub fn rhs(&self) -> ArrayView1<'_, T> {
        self.data.column(self.dim())
    }

    /// Consume the wrapper and return the storage
    pub fn into_inner(self) -> Array2<T> {
        self.data
    }
}

impl<T: Scalar> TryFrom<Array2<T>> for AugmentedMatrix<T> {
    type Error = DenseError;

    fn try_from(data: Array2<T>) -> Result<Self> {
        Self::new(data)
    }
}

impl<T: Scalar> Index<[usize; 2]> for AugmentedMatrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: [usize; 2]) -> &T {
        &self.data[index]
    }
}

fn check_finite<T: Scalar>(data: &Array2<T>) -> Result<()> {
    match data.indexed_iter().find(|(_, v)| !v.is_finite()) {
        Some(((row, col), _)) => Err(DenseError::NonFiniteEntry { row, col }),
        None => Ok(()),
    }
}

fn rows_to_array<T: Scalar, R: AsRef<[T]>>(rows: &[R]) -> Result<Array2<T>> {
    let nrows = rows.len();
    let ncols = rows.first().map_or(0, |r| r.as_ref().len());

    let mut data = Vec::with_capacity(nrows * ncols);
    for (row, r) in rows.iter().enumerate() {
        let r = r.as_ref();
        if r.len() != ncols {
            return Err(DenseError::RaggedRows {
                row,
                expected: ncols,
                got: r.len(),
            });
        }
        data.extend_from_slice(r);
    }

    Array2::from_shape_vec((nrows, ncols), data).map_err(|_| DenseError::InvalidShape {
        rows: nrows,
        cols: ncols,
        reason: "row data does not fill the matrix",
    })
}
