use crate::matrix::matrix::Matrix;

impl Matrix {
    /// `A == transpose(A)`, compared exactly: rounding noise makes this
    /// false.
    pub fn is_symmetric(&self) -> bool {
        self.transpose() == *self
    }

    pub fn is_skew_symmetric(&self) -> bool {
        self.transpose() == -self
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
