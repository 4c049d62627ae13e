//! Dense matrix and vector algebra over `f32`.
//!
//! Construction and indexed access, elementary row operations, Gaussian
//! elimination, determinants by cofactor expansion, symmetry tests and
//! Gram-Schmidt orthogonalization. With the `python` feature the crate also
//! builds as the `rust_linalg` Python extension module.

pub mod error;

pub mod matrix {
    pub mod determinant;
    pub mod elimination;
    pub mod elimination_config;
    pub mod gram_schmidt;
    pub mod matrix;
    pub mod matrix_factory;
    pub mod row_ops;
    pub mod symmetry;
}
pub mod vector {
    pub mod vector;
}

pub mod utils;

#[cfg(feature = "python")]
pub mod python;

#[cfg(test)]
pub(crate) mod test_util;

pub use error::LinalgError;
pub use matrix::elimination::Echelon;
pub use matrix::elimination_config::EliminationConfig;
pub use matrix::gram_schmidt::QrDecomposition;
pub use matrix::matrix::Matrix;
pub use vector::vector::Vector;
