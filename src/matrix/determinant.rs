use crate::error::LinalgError;
use crate::matrix::matrix::Matrix;
use log::{debug, warn};

// Above this size cofactor expansion takes noticeably long.
const LARGE_EXPANSION: usize = 9;

impl Matrix {
    /// The `(m-1) x (n-1)` matrix obtained by deleting row `i` and column `j`
    /// (1-indexed).
    pub fn submatrix(&self, i: usize, j: usize) -> Result<Matrix, LinalgError> {
        self.check_row(i)?;
        self.check_col(j)?;
        if self.rows == 1 || self.cols == 1 {
            return Err(LinalgError::InvalidArgument(format!(
                "a {}x{} matrix has no submatrix",
                self.rows, self.cols
            )));
        }
        Ok(self.minor0(i - 1, j - 1))
    }

    pub(crate) fn minor0(&self, row: usize, col: usize) -> Matrix {
        Matrix {
            rows: self.rows - 1,
            cols: self.cols - 1,
            cells: self
                .cells
                .iter()
                .enumerate()
                .filter(|(r, _)| *r != row)
                .map(|(_, line)| {
                    line.iter()
                        .enumerate()
                        .filter(|(c, _)| *c != col)
                        .map(|(_, x)| *x)
                        .collect()
                })
                .collect(),
        }
    }

    /// `(-1)^(i+j) * det(submatrix(i, j))`, 1-indexed.
    pub fn cofactor(&self, i: usize, j: usize) -> Result<f32, LinalgError> {
        self.check_square()?;
        if self.rows == 1 {
            self.check_row(i)?;
            self.check_col(j)?;
            return Ok(1.0);
        }
        let minor = self.submatrix(i, j)?;
        Ok(sign(i + j) * minor.expand())
    }

    /// Determinant by cofactor expansion along the first row.
    ///
    /// The expansion is literal and costs `O(n!)`: it is meant for the small
    /// matrices this crate targets.
    pub fn determinant(&self) -> Result<f32, LinalgError> {
        self.check_square()?;
        if self.rows > LARGE_EXPANSION {
            warn!(
                "Cofactor expansion of a {}x{} matrix, this may take a while",
                self.rows, self.cols
            );
        }
        let det = self.expand();
        debug!("det of {}x{} = {}", self.rows, self.cols, det);
        Ok(det)
    }

    fn check_square(&self) -> Result<(), LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquareMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(())
    }

    fn expand(&self) -> f32 {
        if self.rows == 1 {
            return self.at(0, 0);
        }

        (0..self.cols)
            .map(|j| self.at(0, j) * sign(j) * self.minor0(0, j).expand())
            .sum()
    }
}

fn sign(k: usize) -> f32 {
    if k % 2 == 0 {
        1.0
    } else {
        -1.0
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matrix::matrix_factory;
    use crate::test_util::assert_close;

    fn m(lines: Vec<Vec<f32>>) -> Matrix {
        Matrix::from_list(lines).unwrap()
    }

    #[test]
    fn test_submatrix() {
        let a = m(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 9.0],
        ]);
        assert_eq!(
            a.submatrix(1, 1).unwrap(),
            m(vec![vec![5.0, 6.0], vec![8.0, 9.0]])
        );
        assert_eq!(
            a.submatrix(2, 3).unwrap(),
            m(vec![vec![1.0, 2.0], vec![7.0, 8.0]])
        );
        assert_eq!(
            a.submatrix(3, 2).unwrap(),
            m(vec![vec![1.0, 3.0], vec![4.0, 6.0]])
        );
        assert!(a.submatrix(0, 1).is_err());
        assert!(a.submatrix(1, 4).is_err());
        assert!(m(vec![vec![1.0]]).submatrix(1, 1).is_err());

        let wide = m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]);
        assert_eq!(wide.submatrix(2, 2).unwrap(), m(vec![vec![1.0, 3.0]]));
    }

    #[test]
    fn test_determinant() {
        assert_eq!(m(vec![vec![-7.5]]).determinant().unwrap(), -7.5);
        assert_eq!(
            m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).determinant().unwrap(),
            -2.0
        );
        assert_eq!(
            m(vec![
                vec![2.0, 4.0, 2.0],
                vec![-3.0, -5.0, 5.0],
                vec![4.0, 7.0, 2.0],
            ])
            .determinant()
            .unwrap(),
            12.0
        );
        assert_eq!(
            m(vec![
                vec![1.0, 2.0, 3.0],
                vec![4.0, 5.0, 6.0],
                vec![7.0, 8.0, 9.0],
            ])
            .determinant()
            .unwrap(),
            0.0
        );
        assert_eq!(
            m(vec![
                vec![1.0, 0.0, 2.0, -1.0],
                vec![3.0, 0.0, 0.0, 5.0],
                vec![2.0, 1.0, 4.0, -3.0],
                vec![1.0, 0.0, 5.0, 0.0],
            ])
            .determinant()
            .unwrap(),
            30.0
        );
    }

    #[test]
    fn test_determinant_of_identity() {
        for n in 1..7 {
            assert_eq!(matrix_factory::identity(n).unwrap().determinant().unwrap(), 1.0);
        }
    }

    #[test]
    fn test_determinant_not_square() {
        assert_eq!(
            m(vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]]).determinant(),
            Err(LinalgError::NotSquareMatrix { rows: 2, cols: 3 })
        );
    }

    #[test]
    fn test_cofactor() {
        let a = m(vec![
            vec![2.0, 4.0, 2.0],
            vec![-3.0, -5.0, 5.0],
            vec![4.0, 7.0, 2.0],
        ]);
        assert_eq!(a.cofactor(1, 1).unwrap(), -45.0);
        assert_eq!(a.cofactor(1, 2).unwrap(), 26.0);
        assert_eq!(a.cofactor(2, 1).unwrap(), 6.0);

        // Laplace expansion along any row gives the determinant
        for i in 1..=3 {
            let det: f32 = (1..=3)
                .map(|j| a.item(i, j).unwrap() * a.cofactor(i, j).unwrap())
                .sum();
            assert_close(det, 12.0, 1e-4);
        }
    }
}
