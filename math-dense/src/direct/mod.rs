//! Direct solvers and factorizations
//!
//! This module provides direct (non-iterative) methods:
//! - [`solve`]: Gaussian elimination with partial pivoting on `[A | b]`
//! - [`lu_factorize`]: Doolittle LU factorization without pivoting

mod gauss;
mod lu;

pub use gauss::{solve, solve_with_config};
pub use lu::{LuFactors, lu_factorize, lu_factorize_with_config};
