//! Structural matrix predicates
//!
//! - [`is_diagonally_dominant`]: strict row diagonal dominance
//! - [`is_positive_definite`]: all leading principal minors positive

mod definiteness;
mod dominance;

pub use definiteness::{
    is_positive_definite, is_positive_definite_with_config, leading_principal_minors,
};
pub use dominance::is_diagonally_dominant;
