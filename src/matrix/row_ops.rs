//! Elementary row operations.
//!
//! Every algorithm of the crate that transforms a matrix (elimination,
//! reduction, inversion) does so only through the three primitives below,
//! plus [`Matrix::clean`] to snap floating point noise to zero.
//!
//! The public methods are 1-indexed and validate their arguments before
//! touching the storage. The `*0` variants are 0-indexed and unchecked.

use crate::error::LinalgError;
use crate::matrix::matrix::Matrix;
use log::trace;

impl Matrix {
    /// `row <- multiplier * row`
    pub fn elementary_row_scaling(&mut self, row: usize, multiplier: f32) -> Result<(), LinalgError> {
        self.check_row(row)?;
        check_multiplier(multiplier)?;
        self.scale_row0(row - 1, multiplier);
        Ok(())
    }

    /// `row <- row + multiplier * source`
    pub fn elementary_row_replacement(
        &mut self,
        row: usize,
        source: usize,
        multiplier: f32,
    ) -> Result<(), LinalgError> {
        self.check_row(row)?;
        self.check_row(source)?;
        if row == source {
            return Err(LinalgError::InvalidArgument(format!(
                "cannot replace row {} with a multiple of itself",
                row
            )));
        }
        check_multiplier(multiplier)?;
        self.replace_row0(row - 1, source - 1, multiplier);
        Ok(())
    }

    pub fn elementary_row_interchange(&mut self, row1: usize, row2: usize) -> Result<(), LinalgError> {
        self.check_row(row1)?;
        self.check_row(row2)?;
        if row1 == row2 {
            return Err(LinalgError::InvalidArgument(format!(
                "cannot interchange row {} with itself",
                row1
            )));
        }
        self.swap_rows0(row1 - 1, row2 - 1);
        Ok(())
    }

    /// Sets every entry with `|x| < tolerance` to exactly `0.0`.
    pub fn clean(&mut self, tolerance: f32) {
        for row in self.cells.iter_mut() {
            for x in row.iter_mut() {
                if x.abs() < tolerance {
                    *x = 0.0;
                }
            }
        }
    }

    pub(crate) fn scale_row0(&mut self, row: usize, multiplier: f32) {
        trace!("R{} <- {} * R{}", row + 1, multiplier, row + 1);
        self.cells[row] = self.cells[row].iter().map(|x| x * multiplier).collect();
    }

    pub(crate) fn replace_row0(&mut self, row: usize, source: usize, multiplier: f32) {
        trace!("R{} <- R{} + {} * R{}", row + 1, row + 1, multiplier, source + 1);
        self.cells[row] = self.cells[row]
            .iter()
            .zip(self.cells[source].iter())
            .map(|(x, s)| x + multiplier * s)
            .collect();
    }

    // Row buffers are moved, not copied.
    pub(crate) fn swap_rows0(&mut self, row1: usize, row2: usize) {
        trace!("R{} <-> R{}", row1 + 1, row2 + 1);
        self.cells.swap(row1, row2);
    }
}

fn check_multiplier(multiplier: f32) -> Result<(), LinalgError> {
    if multiplier == 0.0 || !multiplier.is_finite() {
        return Err(LinalgError::InvalidArgument(format!(
            "row multiplier must be finite and non-zero, got {}",
            multiplier
        )));
    }
    Ok(())
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
