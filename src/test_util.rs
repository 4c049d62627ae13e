//! Helpers shared by the unit tests.

use crate::matrix::matrix::Matrix;
use rand::Rng;

/// Installs `env_logger` in test mode so `RUST_LOG=debug` shows the library logs.
pub(crate) fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

pub(crate) fn assert_close(actual: f32, expected: f32, tol: f32) {
    assert!(
        (actual - expected).abs() <= tol,
        "{} is not within {} of {}",
        actual,
        tol,
        expected
    );
}

pub(crate) fn assert_slice_close(actual: &[f32], expected: &[f32], tol: f32) {
    assert_eq!(actual.len(), expected.len(), "length differs");
    for (a, e) in actual.iter().zip(expected.iter()) {
        assert_close(*a, *e, tol);
    }
}

pub(crate) fn assert_matrix_close(actual: &Matrix, expected: &Matrix, tol: f32) {
    assert_eq!(actual.size(), expected.size(), "shape differs");
    for (a, e) in actual.cells.iter().zip(expected.cells.iter()) {
        assert_slice_close(a, e, tol);
    }
}

/// Matrix with small integer entries, so sums and products stay exact in `f32`.
pub(crate) fn random_matrix(rng: &mut impl Rng, rows: usize, cols: usize) -> Matrix {
    Matrix::from_list(
        (0..rows)
            .map(|_| (0..cols).map(|_| rng.gen_range(-5i32..=5) as f32).collect())
            .collect(),
    )
    .unwrap()
}
