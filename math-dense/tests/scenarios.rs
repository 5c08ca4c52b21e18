//! Reference scenarios for the four dense routines
//!
//! Each test runs one routine on the fixed example matrix shipped with the
//! demo binary and checks the published result.

use approx::assert_relative_eq;
use math_audio_dense::{
    AugmentedMatrix, DenseError, SquareMatrix, is_diagonally_dominant, is_positive_definite,
    lu_factorize, solve,
};

#[test]
fn test_gaussian_elimination() {
    let aug_matrix = AugmentedMatrix::from_rows(&[
        [2.0_f64, -1.0, 1.0, 6.0],
        [1.0, 3.0, 1.0, 0.0],
        [-1.0, 5.0, 4.0, -3.0],
    ])
    .expect("valid augmented matrix");

    let sol = solve(&aug_matrix).expect("system is nonsingular");

    assert_relative_eq!(sol[0], 2.0, epsilon = 1e-7);
    assert_relative_eq!(sol[1], -1.0, epsilon = 1e-7);
    assert_relative_eq!(sol[2], 1.0, epsilon = 1e-7);
}

#[test]
fn test_lu_factorization() {
    let a = SquareMatrix::from_rows(&[
        [1.0_f64, 1.0, 0.0, 3.0],
        [2.0, 1.0, -1.0, 1.0],
        [3.0, -1.0, -1.0, 2.0],
        [-1.0, 2.0, 3.0, -1.0],
    ])
    .expect("square input");

    let lu = lu_factorize(&a);

    assert_relative_eq!(lu.determinant, 39.0, epsilon = 1e-7);
    assert_eq!(lu.l.dim(), (4, 4));
    assert_eq!(lu.u.dim(), (4, 4));
}

#[test]
fn test_diagonally_dominant() {
    let a_dd = SquareMatrix::from_rows(&[
        [9.0_f64, 0.0, 5.0, 2.0, 1.0],
        [3.0, 9.0, 1.0, 2.0, 1.0],
        [0.0, 1.0, 7.0, 2.0, 3.0],
        [4.0, 2.0, 3.0, 12.0, 2.0],
        [3.0, 2.0, 4.0, 0.0, 8.0],
    ])
    .expect("square input");

    assert!(!is_diagonally_dominant(&a_dd));
}

#[test]
fn test_positive_definite() {
    let a_pd = SquareMatrix::from_rows(&[[2.0_f64, 2.0, 1.0], [2.0, 3.0, 0.0], [1.0, 0.0, 2.0]])
        .expect("square input");

    assert!(is_positive_definite(&a_pd));
}

#[test]
fn test_malformed_input_is_rejected() {
    let not_augmented = AugmentedMatrix::<f64>::from_rows(&[[1.0, 2.0], [3.0, 4.0]]);
    assert!(matches!(
        not_augmented,
        Err(DenseError::InvalidShape { rows: 2, cols: 2, .. })
    ));

    let not_square = SquareMatrix::<f64>::from_rows(&[[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
    assert!(not_square.unwrap_err().is_shape_error());
}
