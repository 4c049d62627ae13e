//! Named matrices.
//!
//! Entries are described with 0-indexed `(i, j)` below.

use crate::error::LinalgError;
use crate::matrix::matrix::Matrix;
use crate::utils::binomial;
use num_integer::Integer;

fn tabulate(rows: usize, cols: usize, f: impl Fn(usize, usize) -> f32) -> Result<Matrix, LinalgError> {
    let mut m = Matrix::new(rows, cols)?;
    for (i, row) in m.cells.iter_mut().enumerate() {
        for (j, x) in row.iter_mut().enumerate() {
            *x = f(i, j);
        }
    }
    Ok(m)
}

fn indicator(condition: bool) -> f32 {
    if condition {
        1.0
    } else {
        0.0
    }
}

pub fn identity(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| indicator(i == j))
}

pub fn zero(n: usize) -> Result<Matrix, LinalgError> {
    Matrix::new(n, n)
}

pub fn ones(rows: usize, cols: usize) -> Result<Matrix, LinalgError> {
    tabulate(rows, cols, |_, _| 1.0)
}

/// `1 / (i + j + 1)`
pub fn hilbert(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| 1.0 / (i + j + 1) as f32)
}

/// Ones on the anti-diagonal.
pub fn exchange(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| indicator(i + j == n - 1))
}

/// `min(i, j) / max(i, j)`, 1-indexed.
pub fn lehmer(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| {
        (i.min(j) + 1) as f32 / (i.max(j) + 1) as f32
    })
}

/// Binomial coefficients `C(i, j)` on and below the diagonal.
pub fn lower_pascal(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| binomial(i as u32, j as u32))
}

/// Transpose of [`lower_pascal`].
pub fn upper_pascal(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| binomial(j as u32, i as u32))
}

/// `C(i + j, i)`
pub fn symmetric_pascal(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| binomial((i + j) as u32, i as u32))
}

/// One in the first column and wherever the (1-indexed) row divides the column.
pub fn redheffer(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| {
        indicator(j == 0 || Integer::is_multiple_of(&(j + 1), &(i + 1)))
    })
}

/// Ones on the superdiagonal.
pub fn upper_shift(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| indicator(j == i + 1))
}

/// Ones on the subdiagonal.
pub fn lower_shift(n: usize) -> Result<Matrix, LinalgError> {
    tabulate(n, n, |i, j| indicator(i == j + 1))
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_util::assert_matrix_close;

    fn m(lines: Vec<Vec<f32>>) -> Matrix {
        Matrix::from_list(lines).unwrap()
    }

    #[test]
    fn test_identity_and_zero() {
        assert_eq!(
            identity(2).unwrap(),
            m(vec![vec![1.0, 0.0], vec![0.0, 1.0]])
        );
        assert_eq!(
            identity(3).unwrap(),
            m(vec![
                vec![1.0, 0.0, 0.0],
                vec![0.0, 1.0, 0.0],
                vec![0.0, 0.0, 1.0],
            ])
        );
        assert_eq!(zero(100).unwrap(), Matrix::new(100, 100).unwrap());
        assert!(identity(0).is_err());
        assert!(zero(0).is_err());
    }

    #[test]
    fn test_ones() {
        assert_eq!(ones(2, 2).unwrap(), m(vec![vec![1.0; 2]; 2]));
        assert_eq!(ones(2, 5).unwrap(), m(vec![vec![1.0; 5]; 2]));
        assert!(ones(0, 5).is_err());
    }

    #[test]
    fn test_hilbert() {
        let expected = m(vec![
            vec![1.0, 1.0 / 2.0, 1.0 / 3.0, 1.0 / 4.0, 1.0 / 5.0],
            vec![1.0 / 2.0, 1.0 / 3.0, 1.0 / 4.0, 1.0 / 5.0, 1.0 / 6.0],
            vec![1.0 / 3.0, 1.0 / 4.0, 1.0 / 5.0, 1.0 / 6.0, 1.0 / 7.0],
            vec![1.0 / 4.0, 1.0 / 5.0, 1.0 / 6.0, 1.0 / 7.0, 1.0 / 8.0],
            vec![1.0 / 5.0, 1.0 / 6.0, 1.0 / 7.0, 1.0 / 8.0, 1.0 / 9.0],
        ]);
        assert_eq!(hilbert(5).unwrap(), expected);
    }

    #[test]
    fn test_exchange() {
        assert_eq!(
            exchange(2).unwrap(),
            m(vec![vec![0.0, 1.0], vec![1.0, 0.0]])
        );
        assert_eq!(
            exchange(3).unwrap(),
            m(vec![
                vec![0.0, 0.0, 1.0],
                vec![0.0, 1.0, 0.0],
                vec![1.0, 0.0, 0.0],
            ])
        );
    }

    #[test]
    fn test_lehmer() {
        assert_eq!(
            lehmer(2).unwrap(),
            m(vec![vec![1.0, 1.0 / 2.0], vec![1.0 / 2.0, 1.0]])
        );
        assert_eq!(
            lehmer(3).unwrap(),
            m(vec![
                vec![1.0, 1.0 / 2.0, 1.0 / 3.0],
                vec![1.0 / 2.0, 1.0, 2.0 / 3.0],
                vec![1.0 / 3.0, 2.0 / 3.0, 1.0],
            ])
        );
        assert_matrix_close(
            &lehmer(3).unwrap(),
            &m(vec![
                vec![1.0, 0.5, 0.333],
                vec![0.5, 1.0, 0.667],
                vec![0.333, 0.667, 1.0],
            ]),
            1e-3,
        );
        assert_eq!(
            lehmer(4).unwrap(),
            m(vec![
                vec![1.0, 1.0 / 2.0, 1.0 / 3.0, 1.0 / 4.0],
                vec![1.0 / 2.0, 1.0, 2.0 / 3.0, 1.0 / 2.0],
                vec![1.0 / 3.0, 2.0 / 3.0, 1.0, 3.0 / 4.0],
                vec![1.0 / 4.0, 1.0 / 2.0, 3.0 / 4.0, 1.0],
            ])
        );
    }

    #[test]
    fn test_pascal() {
        let lower = m(vec![
            vec![1.0, 0.0, 0.0, 0.0, 0.0],
            vec![1.0, 1.0, 0.0, 0.0, 0.0],
            vec![1.0, 2.0, 1.0, 0.0, 0.0],
            vec![1.0, 3.0, 3.0, 1.0, 0.0],
            vec![1.0, 4.0, 6.0, 4.0, 1.0],
        ]);
        assert_eq!(lower_pascal(5).unwrap(), lower);
        assert_eq!(upper_pascal(5).unwrap(), lower.transpose());
        assert_eq!(
            symmetric_pascal(5).unwrap(),
            m(vec![
                vec![1.0, 1.0, 1.0, 1.0, 1.0],
                vec![1.0, 2.0, 3.0, 4.0, 5.0],
                vec![1.0, 3.0, 6.0, 10.0, 15.0],
                vec![1.0, 4.0, 10.0, 20.0, 35.0],
                vec![1.0, 5.0, 15.0, 35.0, 70.0],
            ])
        );
        // L * U = S
        assert_eq!(
            (&lower_pascal(5).unwrap() * &upper_pascal(5).unwrap()).unwrap(),
            symmetric_pascal(5).unwrap()
        );
    }

    #[test]
    fn test_redheffer() {
        let expected: Vec<Vec<f32>> = vec![
            vec![1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            vec![1, 1, 0, 1, 0, 1, 0, 1, 0, 1, 0, 1],
            vec![1, 0, 1, 0, 0, 1, 0, 0, 1, 0, 0, 1],
            vec![1, 0, 0, 1, 0, 0, 0, 1, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0],
            vec![1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
            vec![1, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1, 0],
            vec![1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
        ]
        .into_iter()
        .map(|row: Vec<u8>| row.into_iter().map(f32::from).collect())
        .collect();
        assert_eq!(redheffer(12).unwrap(), m(expected));
    }

    #[test]
    fn test_shifts() {
        let upper = m(vec![
            vec![0.0, 1.0, 0.0, 0.0, 0.0],
            vec![0.0, 0.0, 1.0, 0.0, 0.0],
            vec![0.0, 0.0, 0.0, 1.0, 0.0],
            vec![0.0, 0.0, 0.0, 0.0, 1.0],
            vec![0.0, 0.0, 0.0, 0.0, 0.0],
        ]);
        assert_eq!(upper_shift(5).unwrap(), upper);
        assert_eq!(lower_shift(5).unwrap(), upper.transpose());
        assert_eq!(upper_shift(1).unwrap(), zero(1).unwrap());
    }
}
