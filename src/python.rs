//! Python bindings (`import rust_linalg`).
//!
//! Indices stay 1-indexed on the Python side as well. Every [`LinalgError`]
//! surfaces as a `ValueError`.

use crate::error::LinalgError;
use crate::matrix::elimination_config::{
    EliminationConfig, DEFAULT_CLEANUP_TOLERANCE, DEFAULT_PIVOT_TOLERANCE,
};
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_factory;
use crate::vector::vector::Vector;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyType;

impl From<LinalgError> for PyErr {
    fn from(error: LinalgError) -> PyErr {
        PyValueError::new_err(error.to_string())
    }
}

#[pymethods]
impl Matrix {
    #[new]
    fn py_new(rows: usize, cols: usize) -> PyResult<Matrix> {
        Ok(Matrix::new(rows, cols)?)
    }

    #[classmethod]
    #[pyo3(name = "from_list")]
    fn py_from_list(_cls: &Bound<PyType>, lines: Vec<Vec<f32>>) -> PyResult<Matrix> {
        Ok(Matrix::from_list(lines)?)
    }

    #[pyo3(name = "to_list")]
    fn py_to_list(&self) -> Vec<Vec<f32>> {
        self.to_list()
    }

    #[getter(rows)]
    fn py_rows(&self) -> usize {
        self.rows
    }

    #[getter(cols)]
    fn py_cols(&self) -> usize {
        self.cols
    }

    #[getter]
    #[allow(non_snake_case)]
    fn T(&self) -> Matrix {
        self.transpose()
    }

    #[pyo3(name = "item")]
    fn py_item(&self, i: usize, j: usize) -> PyResult<f32> {
        Ok(self.item(i, j)?)
    }

    #[pyo3(name = "set_item")]
    fn py_set_item(&mut self, i: usize, j: usize, value: f32) -> PyResult<()> {
        Ok(self.set_item(i, j, value)?)
    }

    #[pyo3(name = "row")]
    fn py_row(&self, i: usize) -> PyResult<Vector> {
        Ok(self.row(i)?)
    }

    #[pyo3(name = "column")]
    fn py_column(&self, j: usize) -> PyResult<Vector> {
        Ok(self.column(j)?)
    }

    #[pyo3(name = "set_row")]
    fn py_set_row(&mut self, i: usize, row: Vec<f32>) -> PyResult<()> {
        Ok(self.set_row(i, &Vector::from(row))?)
    }

    #[pyo3(name = "elementary_row_scaling")]
    fn py_elementary_row_scaling(&mut self, row: usize, multiplier: f32) -> PyResult<()> {
        Ok(self.elementary_row_scaling(row, multiplier)?)
    }

    #[pyo3(name = "elementary_row_replacement")]
    fn py_elementary_row_replacement(
        &mut self,
        row: usize,
        source: usize,
        multiplier: f32,
    ) -> PyResult<()> {
        Ok(self.elementary_row_replacement(row, source, multiplier)?)
    }

    #[pyo3(name = "elementary_row_interchange")]
    fn py_elementary_row_interchange(&mut self, row1: usize, row2: usize) -> PyResult<()> {
        Ok(self.elementary_row_interchange(row1, row2)?)
    }

    #[pyo3(name = "gauss_elimination", signature = (b, pivot_tolerance = DEFAULT_PIVOT_TOLERANCE, cleanup_tolerance = DEFAULT_CLEANUP_TOLERANCE))]
    fn py_gauss_elimination(
        &self,
        b: Vec<f32>,
        pivot_tolerance: f32,
        cleanup_tolerance: f32,
    ) -> PyResult<Vec<f32>> {
        let config = EliminationConfig::new(pivot_tolerance, cleanup_tolerance)?;
        Ok(self.gauss_elimination(&Vector::from(b), &config)?.to_vec())
    }

    #[pyo3(name = "inverse", signature = (pivot_tolerance = DEFAULT_PIVOT_TOLERANCE, cleanup_tolerance = DEFAULT_CLEANUP_TOLERANCE))]
    fn py_inverse(&self, pivot_tolerance: f32, cleanup_tolerance: f32) -> PyResult<Matrix> {
        let config = EliminationConfig::new(pivot_tolerance, cleanup_tolerance)?;
        Ok(self.inverse(&config)?)
    }

    #[pyo3(name = "rank", signature = (pivot_tolerance = DEFAULT_PIVOT_TOLERANCE))]
    fn py_rank(&self, pivot_tolerance: f32) -> PyResult<usize> {
        let config = EliminationConfig::default().with_pivot_tolerance(pivot_tolerance)?;
        Ok(self.rank(&config)?)
    }

    #[pyo3(name = "determinant")]
    fn py_determinant(&self) -> PyResult<f32> {
        Ok(self.determinant()?)
    }

    /// Returns `(Q, R, degenerate_columns)`.
    #[pyo3(name = "gram_schmidt")]
    fn py_gram_schmidt(&self) -> (Matrix, Matrix, Vec<usize>) {
        let qr = self.gram_schmidt();
        (qr.q, qr.r, qr.degenerate_columns)
    }

    #[pyo3(name = "is_symmetric")]
    fn py_is_symmetric(&self) -> bool {
        self.is_symmetric()
    }

    #[pyo3(name = "is_skew_symmetric")]
    fn py_is_skew_symmetric(&self) -> bool {
        self.is_skew_symmetric()
    }

    fn __add__(&self, rhs: &Matrix) -> PyResult<Matrix> {
        Ok((self + rhs)?)
    }

    fn __sub__(&self, rhs: &Matrix) -> PyResult<Matrix> {
        Ok((self - rhs)?)
    }

    fn __mul__(&self, rhs: &Matrix) -> PyResult<Matrix> {
        Ok((self * rhs)?)
    }

    fn __eq__(&self, rhs: &Matrix) -> bool {
        self == rhs
    }

    fn __repr__(&self) -> String {
        self.to_string()
    }
}

#[pymethods]
impl Vector {
    #[new]
    fn py_new(cells: Vec<f32>) -> Vector {
        Vector::from(cells)
    }

    #[pyo3(name = "to_list")]
    fn py_to_list(&self) -> Vec<f32> {
        self.to_vec()
    }

    fn __len__(&self) -> usize {
        self.size()
    }

    #[pyo3(name = "item")]
    fn py_item(&self, i: usize) -> PyResult<f32> {
        Ok(self.item(i)?)
    }

    #[pyo3(name = "norm")]
    fn py_norm(&self) -> f32 {
        self.norm()
    }

    #[pyo3(name = "dot")]
    fn py_dot(&self, rhs: &Vector) -> PyResult<f32> {
        Ok(self.dot(rhs)?)
    }

    fn __add__(&self, rhs: &Vector) -> PyResult<Vector> {
        Ok((self + rhs)?)
    }

    fn __sub__(&self, rhs: &Vector) -> PyResult<Vector> {
        Ok((self - rhs)?)
    }

    fn __eq__(&self, rhs: &Vector) -> bool {
        self == rhs
    }

    fn __repr__(&self) -> String {
        self.to_string()
    }
}

macro_rules! square_factory_pyfunctions {
    ($($name:ident),* $(,)?) => {
        $(
            #[pyfunction]
            fn $name(n: usize) -> PyResult<Matrix> {
                Ok(matrix_factory::$name(n)?)
            }
        )*

        fn add_factory_functions(m: &Bound<'_, PyModule>) -> PyResult<()> {
            $(m.add_function(wrap_pyfunction!($name, m)?)?;)*
            Ok(())
        }
    };
}

square_factory_pyfunctions!(
    identity,
    zero,
    hilbert,
    exchange,
    lehmer,
    lower_pascal,
    upper_pascal,
    symmetric_pascal,
    redheffer,
    upper_shift,
    lower_shift,
);

#[pyfunction]
fn ones(rows: usize, cols: usize) -> PyResult<Matrix> {
    Ok(matrix_factory::ones(rows, cols)?)
}

/// A Python module implemented in Rust.
#[pymodule]
fn rust_linalg(_py: Python, m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<Matrix>()?;
    m.add_class::<Vector>()?;
    add_factory_functions(m)?;
    m.add_function(wrap_pyfunction!(ones, m)?)?;
    Ok(())
}
