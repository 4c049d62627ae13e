use crate::matrix::matrix::Matrix;
use crate::vector::vector::Vector;
use log::warn;

/// `A = Q R` as produced by [`Matrix::gram_schmidt`].
#[derive(Debug, Clone, PartialEq)]
pub struct QrDecomposition {
    /// `m x n`, orthonormal columns except the degenerate ones.
    pub q: Matrix,
    /// `n x n`, upper triangular.
    pub r: Matrix,
    /// 1-indexed columns of `A` that depend linearly on the previous ones.
    /// The matching column of `q` is the zero vector and was not normalized.
    pub degenerate_columns: Vec<usize>,
}

impl Matrix {
    /// Classical Gram-Schmidt orthogonalization of the columns.
    pub fn gram_schmidt(&self) -> QrDecomposition {
        let n = self.cols;
        let mut basis: Vec<Vector> = Vec::with_capacity(n);
        let mut r = vec![vec![0.0; n]; n];
        let mut degenerate_columns = vec![];

        for j in 0..n {
            let a_j = self.column0(j);
            let mut q_j = a_j.clone();

            for (i, q_i) in basis.iter().enumerate() {
                r[i][j] = q_i.dot_unchecked(&a_j);
                q_j = q_j.zip_with(&(q_i * r[i][j]), |x, y| x - y);
            }

            r[j][j] = q_j.norm();
            if q_j.is_zero() {
                warn!("Column {} is linearly dependent, left unnormalized", j + 1);
                degenerate_columns.push(j + 1);
            } else {
                q_j = &q_j * (1.0 / r[j][j]);
            }
            basis.push(q_j);
        }

        QrDecomposition {
            q: Matrix {
                rows: self.rows,
                cols: n,
                cells: (0..self.rows)
                    .map(|i| basis.iter().map(|q| q.cells[i]).collect())
                    .collect(),
            },
            r: Matrix {
                rows: n,
                cols: n,
                cells: r,
            },
            degenerate_columns,
        }
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
