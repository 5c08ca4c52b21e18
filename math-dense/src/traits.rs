//! Core traits for dense real linear algebra
//!
//! This module defines the scalar abstraction used throughout the crate:
//! - [`Scalar`]: Trait for the real floating-point types a matrix may hold

use ndarray::{LinalgScalar, ScalarOperand};
use num_traits::{Float, FromPrimitive, NumAssign};
use std::fmt::{Debug, Display};

/// Tolerance below which a pivot or diagonal entry is treated as zero.
pub const PIVOT_EPSILON: f64 = 1e-14;

/// Trait for scalar types that can be stored in a dense matrix.
///
/// Abstracts over `f64` and `f32` so every routine is written once.
///
/// # Implementations
///
/// Provided for:
/// - `f64` (default, all documented tolerances are tuned for it)
/// - `f32` (for memory-constrained callers)
pub trait Scalar:
    Float
    + NumAssign
    + FromPrimitive
    + LinalgScalar
    + ScalarOperand
    + Debug
    + Display
    + Default
    + Send
    + Sync
    + 'static
{
    /// Convert an `f64` tolerance into this type
    fn from_tolerance(tol: f64) -> Self;

    /// Check whether `|self|` falls strictly below `tol`
    ///
    /// NaN counts as negligible: it carries no usable magnitude.
    #[inline]
    fn is_negligible(self, tol: Self) -> bool {
        self.is_nan() || self.abs() < tol
    }
}

impl Scalar for f64 {
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        tol
    }
}

impl Scalar for f32 {
    #[inline]
    fn from_tolerance(tol: f64) -> Self {
        tol as f32
    }
}
