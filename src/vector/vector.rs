use crate::error::LinalgError;
use crate::matrix::matrix::Matrix;
use itertools::Itertools;
use std::fmt;
use std::ops;

/// Fixed-length sequence of `f32`.
///
/// Rows and columns of a [`Matrix`](crate::matrix::matrix::Matrix) are handed
/// out as freshly allocated `Vector`s: mutating one never writes back into
/// the matrix.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "python", pyo3::pyclass)]
pub struct Vector {
    pub(crate) cells: Vec<f32>,
}

impl Vector {
    /// Zero-filled vector of length `n`.
    pub fn new(n: usize) -> Vector {
        Vector {
            cells: vec![0.0; n],
        }
    }

    pub fn size(&self) -> usize {
        self.cells.len()
    }

    /// 1-indexed read.
    pub fn item(&self, i: usize) -> Result<f32, LinalgError> {
        self.item0(self.to_zero_based(i)?)
    }

    /// 1-indexed write.
    pub fn set_item(&mut self, i: usize, value: f32) -> Result<(), LinalgError> {
        let i = self.to_zero_based(i)?;
        self.set_item0(i, value)
    }

    pub fn item0(&self, i: usize) -> Result<f32, LinalgError> {
        self.cells
            .get(i)
            .copied()
            .ok_or(LinalgError::IndexOutOfRange {
                index: i,
                bound: self.size(),
            })
    }

    pub fn set_item0(&mut self, i: usize, value: f32) -> Result<(), LinalgError> {
        let bound = self.size();
        let cell = self
            .cells
            .get_mut(i)
            .ok_or(LinalgError::IndexOutOfRange { index: i, bound })?;
        *cell = value;
        Ok(())
    }

    #[inline(always)]
    fn to_zero_based(&self, i: usize) -> Result<usize, LinalgError> {
        if i == 0 || i > self.size() {
            return Err(LinalgError::IndexOutOfRange {
                index: i,
                bound: self.size(),
            });
        }
        Ok(i - 1)
    }

    pub fn to_vec(&self) -> Vec<f32> {
        self.cells.clone()
    }

    pub fn as_slice(&self) -> &[f32] {
        &self.cells
    }

    pub fn iter(&self) -> impl Iterator<Item = &f32> {
        self.cells.iter()
    }

    pub fn norm(&self) -> f32 {
        self.cells.iter().map(|x| x * x).sum::<f32>().sqrt()
    }

    pub fn dot(&self, rhs: &Vector) -> Result<f32, LinalgError> {
        self.check_same_size(rhs)?;
        Ok(self.dot_unchecked(rhs))
    }

    // Callers guarantee equal sizes.
    pub(crate) fn dot_unchecked(&self, rhs: &Vector) -> f32 {
        self.cells.iter().zip(rhs.cells.iter()).map(|(a, b)| a * b).sum()
    }

    pub(crate) fn zip_with(&self, rhs: &Vector, f: impl Fn(f32, f32) -> f32) -> Vector {
        Vector {
            cells: self
                .cells
                .iter()
                .zip(rhs.cells.iter())
                .map(|(a, b)| f(*a, *b))
                .collect(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.cells.iter().all(|x| *x == 0.0)
    }

    fn check_same_size(&self, rhs: &Vector) -> Result<(), LinalgError> {
        if self.size() != rhs.size() {
            return Err(LinalgError::len_mismatch(self.size(), rhs.size()));
        }
        Ok(())
    }
}

impl From<Vec<f32>> for Vector {
    fn from(cells: Vec<f32>) -> Vector {
        Vector { cells }
    }
}

impl From<&[f32]> for Vector {
    fn from(cells: &[f32]) -> Vector {
        Vector {
            cells: cells.to_vec(),
        }
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.cells.iter().join(", "))
    }
}

impl ops::Add<&Vector> for &Vector {
    type Output = Result<Vector, LinalgError>;

    fn add(self, rhs: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_size(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a + b))
    }
}

impl ops::Sub<&Vector> for &Vector {
    type Output = Result<Vector, LinalgError>;

    fn sub(self, rhs: &Vector) -> Result<Vector, LinalgError> {
        self.check_same_size(rhs)?;
        Ok(self.zip_with(rhs, |a, b| a - b))
    }
}

// Dot product
impl ops::Mul<&Vector> for &Vector {
    type Output = Result<f32, LinalgError>;

    fn mul(self, rhs: &Vector) -> Result<f32, LinalgError> {
        self.dot(rhs)
    }
}

// Row vector times matrix: `v^T M`
impl ops::Mul<&Matrix> for &Vector {
    type Output = Result<Vector, LinalgError>;

    fn mul(self, rhs: &Matrix) -> Result<Vector, LinalgError> {
        if self.size() != rhs.rows() {
            return Err(LinalgError::len_mismatch(rhs.rows(), self.size()));
        }
        Ok(Vector::from(
            (0..rhs.cols())
                .map(|j| self.dot_unchecked(&rhs.column0(j)))
                .collect::<Vec<f32>>(),
        ))
    }
}

impl ops::Mul<f32> for &Vector {
    type Output = Vector;

    fn mul(self, rhs: f32) -> Vector {
        Vector {
            cells: self.cells.iter().map(|x| x * rhs).collect(),
        }
    }
}

impl ops::Mul<&Vector> for f32 {
    type Output = Vector;

    fn mul(self, rhs: &Vector) -> Vector {
        rhs * self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
