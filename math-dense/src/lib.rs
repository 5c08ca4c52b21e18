//! Dense real-matrix toolkit
//!
//! This crate provides a handful of classic direct methods for small dense
//! matrices of `f64` or `f32`, built on `ndarray`.
//!
//! # Features
//!
//! - **Linear systems**: Gaussian elimination with partial pivoting on an
//!   augmented matrix `[A | b]`
//! - **LU factorization**: Doolittle method (no pivoting) with determinant and
//!   a degeneracy report
//! - **Predicates**: strict diagonal dominance, positive-definiteness through
//!   leading principal minors
//! - **Shape-checked inputs**: [`SquareMatrix`] and [`AugmentedMatrix`] reject
//!   ragged, empty, mis-shaped or non-finite data at construction
//!
//! All routines borrow their input and work on private copies, so the same
//! matrix can be shared across threads.
//!
//! # Example
//!
//! ```
//! use math_audio_dense::{
//!     AugmentedMatrix, SquareMatrix, is_diagonally_dominant, is_positive_definite, lu_factorize,
//!     solve,
//! };
//!
//! let system = AugmentedMatrix::from_rows(&[
//!     [2.0_f64, -1.0, 1.0, 6.0],
//!     [1.0, 3.0, 1.0, 0.0],
//!     [-1.0, 5.0, 4.0, -3.0],
//! ])?;
//! let x = solve(&system)?;
//! assert!((x[0] - 2.0).abs() < 1e-10);
//!
//! let a = SquareMatrix::from_rows(&[[2.0_f64, 2.0, 1.0], [2.0, 3.0, 0.0], [1.0, 0.0, 2.0]])?;
//! assert!(is_positive_definite(&a));
//! assert!(!is_diagonally_dominant(&a));
//!
//! let lu = lu_factorize(&a);
//! assert!((lu.determinant - 1.0).abs() < 1e-12);
//! # Ok::<(), math_audio_dense::DenseError>(())
//! ```

pub mod direct;
mod elimination;
pub mod error;
pub mod matrix;
pub mod properties;
pub mod traits;

// Re-export main types
pub use elimination::EliminationConfig;
pub use error::{DenseError, Result};
pub use matrix::{AugmentedMatrix, SquareMatrix};
pub use traits::{PIVOT_EPSILON, Scalar};

// Re-export direct methods
pub use direct::{LuFactors, lu_factorize, lu_factorize_with_config, solve, solve_with_config};

// Re-export predicates
pub use properties::{
    is_diagonally_dominant, is_positive_definite, is_positive_definite_with_config,
    leading_principal_minors,
};
