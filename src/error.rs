use thiserror::Error;

/// Errors raised by matrix and vector operations.
///
/// Every check happens before the operand is touched, so a call that fails
/// leaves its receiver exactly as it was. The one exception is
/// [`NumericalOverflow`](LinalgError::NumericalOverflow) from the in-place
/// reductions, which can only be detected midway.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LinalgError {
    #[error("Index {index} out of range for dimension {bound}")]
    IndexOutOfRange { index: usize, bound: usize },

    #[error("Dimensions not compatible: expected {expected}, found {found}")]
    DimensionMismatch { expected: String, found: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Matrix is not square ({rows}x{cols})")]
    NotSquareMatrix { rows: usize, cols: usize },

    /// Some coefficient columns have no pivot (1-indexed).
    #[error("Singular matrix: no pivot in column(s) {free_columns:?}")]
    SingularMatrix { free_columns: Vec<usize> },

    /// A reduced row reads `0 = c` with `c != 0` (1-indexed row).
    #[error("Impossible system: row {row} reduces to 0 = c with c != 0")]
    InconsistentSystem { row: usize },

    /// A row operation would leave an infinite or NaN entry (1-indexed
    /// row being updated, column being cleared).
    #[error("Numerical overflow updating row {row} while clearing column {col}")]
    NumericalOverflow { row: usize, col: usize },
}

impl LinalgError {
    pub(crate) fn shape_mismatch(expected: (usize, usize), found: (usize, usize)) -> Self {
        LinalgError::DimensionMismatch {
            expected: format!("{}x{}", expected.0, expected.1),
            found: format!("{}x{}", found.0, found.1),
        }
    }

    pub(crate) fn len_mismatch(expected: usize, found: usize) -> Self {
        LinalgError::DimensionMismatch {
            expected: expected.to_string(),
            found: found.to_string(),
        }
    }
}
