use crate::error::LinalgError;
use crate::vector::vector::Vector;
use itertools::Itertools;
use std::fmt;
use std::ops;

/// Dense `m x n` matrix of `f32`, stored as `m` independently owned rows.
///
/// Two indexing conventions share the same storage: [`item`](Matrix::item)
/// and friends are 1-indexed like textbook notation, [`item0`](Matrix::item0)
/// and friends are 0-indexed. Dimensions never change after construction.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "python", pyo3::pyclass)]
pub struct Matrix {
    pub(crate) rows: usize,
    pub(crate) cols: usize,
    pub(crate) cells: Vec<Vec<f32>>,
}

impl Matrix {
    /// Zero-filled matrix with `rows` rows and `cols` columns.
    pub fn new(rows: usize, cols: usize) -> Result<Matrix, LinalgError> {
        if rows == 0 || cols == 0 {
            return Err(LinalgError::InvalidArgument(format!(
                "cannot build a {}x{} matrix",
                rows, cols
            )));
        }

        Ok(Matrix {
            rows,
            cols,
            cells: vec![vec![0.0; cols]; rows],
        })
    }

    /// Builds a matrix from a list of rows. Every row must have the same
    /// non-zero length.
    pub fn from_list(lines: Vec<Vec<f32>>) -> Result<Matrix, LinalgError> {
        let rows = lines.len();
        let cols = lines.first().map(|l| l.len()).unwrap_or(0);
        if rows == 0 || cols == 0 {
            return Err(LinalgError::InvalidArgument(
                "a matrix needs at least one row and one column".into(),
            ));
        }
        if let Some(line) = lines.iter().find(|l| l.len() != cols) {
            return Err(LinalgError::len_mismatch(cols, line.len()));
        }

        Ok(Matrix {
            rows,
            cols,
            cells: lines,
        })
    }

    pub fn to_list(&self) -> Vec<Vec<f32>> {
        self.cells.clone()
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn size(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// 1-indexed read.
    pub fn item(&self, i: usize, j: usize) -> Result<f32, LinalgError> {
        let (i, j) = self.to_zero_based(i, j)?;
        Ok(self.at(i, j))
    }

    /// 1-indexed write.
    pub fn set_item(&mut self, i: usize, j: usize, value: f32) -> Result<(), LinalgError> {
        let (i, j) = self.to_zero_based(i, j)?;
        self.cells[i][j] = value;
        Ok(())
    }

    pub fn item0(&self, i: usize, j: usize) -> Result<f32, LinalgError> {
        self.check_bounds0(i, j)?;
        Ok(self.at(i, j))
    }

    pub fn set_item0(&mut self, i: usize, j: usize, value: f32) -> Result<(), LinalgError> {
        self.check_bounds0(i, j)?;
        self.cells[i][j] = value;
        Ok(())
    }

    #[inline(always)]
    pub(crate) fn at(&self, i: usize, j: usize) -> f32 {
        self.cells[i][j]
    }

    // The only place where 1-indexed coordinates become 0-indexed ones.
    #[inline(always)]
    fn to_zero_based(&self, i: usize, j: usize) -> Result<(usize, usize), LinalgError> {
        self.check_row(i)?;
        self.check_col(j)?;
        Ok((i - 1, j - 1))
    }

    pub(crate) fn check_row(&self, i: usize) -> Result<(), LinalgError> {
        if i == 0 || i > self.rows {
            return Err(LinalgError::IndexOutOfRange {
                index: i,
                bound: self.rows,
            });
        }
        Ok(())
    }

    pub(crate) fn check_col(&self, j: usize) -> Result<(), LinalgError> {
        if j == 0 || j > self.cols {
            return Err(LinalgError::IndexOutOfRange {
                index: j,
                bound: self.cols,
            });
        }
        Ok(())
    }

    fn check_bounds0(&self, i: usize, j: usize) -> Result<(), LinalgError> {
        if i >= self.rows {
            return Err(LinalgError::IndexOutOfRange {
                index: i,
                bound: self.rows,
            });
        }
        if j >= self.cols {
            return Err(LinalgError::IndexOutOfRange {
                index: j,
                bound: self.cols,
            });
        }
        Ok(())
    }

    /// Snapshot of the `i`-th row (1-indexed).
    pub fn row(&self, i: usize) -> Result<Vector, LinalgError> {
        self.check_row(i)?;
        Ok(Vector::from(self.cells[i - 1].clone()))
    }

    pub fn column(&self, j: usize) -> Result<Vector, LinalgError> {
        self.check_col(j)?;
        Ok(self.column0(j - 1))
    }

    pub(crate) fn column0(&self, j: usize) -> Vector {
        Vector::from(self.cells.iter().map(|row| row[j]).collect::<Vec<_>>())
    }

    /// Replaces the whole `i`-th row (1-indexed) with the content of `row`.
    pub fn set_row(&mut self, i: usize, row: &Vector) -> Result<(), LinalgError> {
        self.check_row(i)?;
        if row.size() != self.cols {
            return Err(LinalgError::len_mismatch(self.cols, row.size()));
        }
        self.cells[i - 1] = row.to_vec();
        Ok(())
    }

    pub fn transpose(&self) -> Matrix {
        Matrix {
            rows: self.cols,
            cols: self.rows,
            cells: (0..self.cols)
                .map(|c| (0..self.rows).map(|r| self.at(r, c)).collect())
                .collect(),
        }
    }

    /// `[A | v]`: a copy with `v` appended as an extra right-most column.
    pub fn augment_right(&self, v: &Vector) -> Result<Matrix, LinalgError> {
        if v.size() != self.rows {
            return Err(LinalgError::len_mismatch(self.rows, v.size()));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols + 1,
            cells: self
                .cells
                .iter()
                .zip(v.iter())
                .map(|(row, x)| row.iter().copied().chain(std::iter::once(*x)).collect())
                .collect(),
        })
    }

    /// `[A | B]`: a copy with the columns of `rhs` appended on the right.
    pub fn augment_right_matrix(&self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if rhs.rows != self.rows {
            return Err(LinalgError::len_mismatch(self.rows, rhs.rows));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols + rhs.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(l, r)| l.iter().chain(r.iter()).copied().collect())
                .collect(),
        })
    }

    /// Splits off the columns from `at` (0-indexed) onward.
    pub(crate) fn split_cols(&self, at: usize) -> (Matrix, Matrix) {
        let (left, right) = self
            .cells
            .iter()
            .map(|row| (row[..at].to_vec(), row[at..].to_vec()))
            .unzip();

        (
            Matrix {
                rows: self.rows,
                cols: at,
                cells: left,
            },
            Matrix {
                rows: self.rows,
                cols: self.cols - at,
                cells: right,
            },
        )
    }

    fn zip_with(
        &self,
        rhs: &Matrix,
        f: impl Fn(f32, f32) -> f32,
    ) -> Result<Matrix, LinalgError> {
        if self.size() != rhs.size() {
            return Err(LinalgError::shape_mismatch(self.size(), rhs.size()));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(l, r)| l.iter().zip(r.iter()).map(|(a, b)| f(*a, *b)).collect())
                .collect(),
        })
    }
}

/// Exact comparison: same shape, then `==` on every entry.
impl PartialEq for Matrix {
    fn eq(&self, rhs: &Matrix) -> bool {
        self.size() == rhs.size() && self.cells == rhs.cells
    }
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = self
            .cells
            .iter()
            .map(|row| format!("[{}]", row.iter().join(", ")))
            .join("\n");
        write!(f, "{}", text)
    }
}

impl ops::Add<&Matrix> for &Matrix {
    type Output = Result<Matrix, LinalgError>;

    fn add(self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(rhs, |a, b| a + b)
    }
}

impl ops::Sub<&Matrix> for &Matrix {
    type Output = Result<Matrix, LinalgError>;

    fn sub(self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        self.zip_with(rhs, |a, b| a - b)
    }
}

impl ops::Mul<&Matrix> for &Matrix {
    type Output = Result<Matrix, LinalgError>;

    fn mul(self, rhs: &Matrix) -> Result<Matrix, LinalgError> {
        if self.cols != rhs.rows {
            return Err(LinalgError::shape_mismatch(
                (self.cols, rhs.cols),
                rhs.size(),
            ));
        }

        Ok(Matrix {
            rows: self.rows,
            cols: rhs.cols,
            cells: (0..self.rows)
                .map(|i| {
                    (0..rhs.cols)
                        .map(|j| (0..self.cols).map(|k| self.at(i, k) * rhs.at(k, j)).sum())
                        .collect()
                })
                .collect(),
        })
    }
}

impl ops::Mul<&Vector> for &Matrix {
    type Output = Result<Vector, LinalgError>;

    fn mul(self, rhs: &Vector) -> Result<Vector, LinalgError> {
        if self.cols != rhs.size() {
            return Err(LinalgError::len_mismatch(self.cols, rhs.size()));
        }

        Ok(Vector::from(
            self.cells
                .iter()
                .map(|row| row.iter().zip(rhs.iter()).map(|(a, b)| a * b).sum())
                .collect::<Vec<f32>>(),
        ))
    }
}

impl ops::Mul<f32> for &Matrix {
    type Output = Matrix;

    fn mul(self, rhs: f32) -> Matrix {
        Matrix {
            rows: self.rows,
            cols: self.cols,
            cells: self
                .cells
                .iter()
                .map(|row| row.iter().map(|x| x * rhs).collect())
                .collect(),
        }
    }
}

impl ops::Mul<&Matrix> for f32 {
    type Output = Matrix;

    fn mul(self, rhs: &Matrix) -> Matrix {
        rhs * self
    }
}

impl ops::Neg for &Matrix {
    type Output = Matrix;

    fn neg(self) -> Matrix {
        self * -1.0f32
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
