//! Gaussian elimination.
//!
//! Reduction runs in two phases over the same storage: forward reduction
//! brings the matrix to row echelon form, backward reduction then scales
//! every pivot to one and clears the entries above it (reduced row echelon
//! form). Both phases only use the elementary row operations of
//! [`row_ops`](crate::matrix::row_ops).

use crate::error::LinalgError;
use crate::matrix::elimination_config::EliminationConfig;
use crate::matrix::matrix::Matrix;
use crate::matrix::matrix_factory;
use crate::vector::vector::Vector;
use log::{debug, warn};

/// Result of [`Matrix::row_reduce`].
#[derive(Debug, Clone, PartialEq)]
pub struct Echelon {
    /// The reduced row echelon form.
    pub matrix: Matrix,
    /// For each row, the 0-indexed column of its pivot (`None` for zero rows).
    pub pivots: Vec<Option<usize>>,
    pub rank: usize,
}

impl Echelon {
    /// 0-indexed columns without a pivot.
    pub fn free_columns(&self) -> Vec<usize> {
        (0..self.matrix.cols)
            .filter(|c| !self.pivots.contains(&Some(*c)))
            .collect()
    }
}

/// Multiplier `k` such that `target + k * pivot == 0`.
///
/// Entries with the same sign need a negative multiplier, entries with
/// opposite signs a positive one.
fn elimination_multiplier(target: f32, pivot: f32) -> f32 {
    let magnitude = target.abs() / pivot.abs();
    if target.is_sign_negative() == pivot.is_sign_negative() {
        -magnitude
    } else {
        magnitude
    }
}

impl Matrix {
    /// Brings the matrix to row echelon form in place and returns the
    /// 0-indexed `(row, column)` position of every pivot.
    ///
    /// A column with no entry above the pivot tolerance at or below the
    /// current pivot row is skipped without consuming a row, and those
    /// entries are set to zero. On error the matrix is left partially reduced.
    pub fn forward_reduction(
        &mut self,
        config: &EliminationConfig,
    ) -> Result<Vec<(usize, usize)>, LinalgError> {
        let mut pivots = vec![];
        let (mut row, mut col) = (0, 0);

        while row < self.rows && col < self.cols {
            let candidate = (row..self.rows).find(|&r| self.at(r, col).abs() > config.pivot_tolerance);

            let pivot_row = match candidate {
                Some(r) => r,
                None => {
                    debug!("Column {} has no pivot", col + 1);
                    // below tolerance counts as zero
                    for r in row..self.rows {
                        self.cells[r][col] = 0.0;
                    }
                    col += 1;
                    continue;
                }
            };

            if pivot_row != row {
                self.swap_rows0(row, pivot_row);
            }

            for r in row + 1..self.rows {
                if self.at(r, col) == 0.0 {
                    continue;
                }
                self.eliminate0(r, row, col)?;
                self.clean_row0(r, config.cleanup_tolerance, None);
            }

            debug!("Pivot {} at ({}, {})", self.at(row, col), row + 1, col + 1);
            pivots.push((row, col));
            row += 1;
            col += 1;
        }

        Ok(pivots)
    }

    /// Turns the output of [`forward_reduction`](Matrix::forward_reduction)
    /// into reduced row echelon form in place: every pivot it reported
    /// becomes exactly one and the entries above it zero.
    ///
    /// Pivots are visited bottom to top, so each one only clears a column
    /// left of the columns already cleared.
    pub fn backward_reduction(
        &mut self,
        pivots: &[(usize, usize)],
        config: &EliminationConfig,
    ) -> Result<(), LinalgError> {
        let mut lead_of_row = vec![None; self.rows];
        for &(row, col) in pivots {
            lead_of_row[row] = Some(col);
        }

        for &(row, col) in pivots.iter().rev() {
            let pivot = self.at(row, col);
            if pivot != 1.0 {
                let multiplier = 1.0 / pivot;
                if self.cells[row].iter().any(|x| !(x * multiplier).is_finite()) {
                    return Err(LinalgError::NumericalOverflow {
                        row: row + 1,
                        col: col + 1,
                    });
                }
                self.scale_row0(row, multiplier);
                // rounding
                self.cells[row][col] = 1.0;
                self.clean_row0(row, config.cleanup_tolerance, Some(col));
            }

            for above in 0..row {
                if self.at(above, col) == 0.0 {
                    continue;
                }
                self.eliminate0(above, row, col)?;
                self.clean_row0(above, config.cleanup_tolerance, lead_of_row[above]);
            }
        }

        Ok(())
    }

    /// Clears `self[target][col]` with a multiple of row `source`. The entry
    /// becomes exactly zero, whatever the rounding left behind.
    fn eliminate0(&mut self, target: usize, source: usize, col: usize) -> Result<(), LinalgError> {
        let multiplier = elimination_multiplier(self.at(target, col), self.at(source, col));
        let overflows = !multiplier.is_finite()
            || self.cells[target]
                .iter()
                .zip(self.cells[source].iter())
                .any(|(x, s)| !(x + multiplier * s).is_finite());
        if overflows {
            warn!(
                "Clearing column {} of row {} with multiplier {} overflows",
                col + 1,
                target + 1,
                multiplier
            );
            return Err(LinalgError::NumericalOverflow {
                row: target + 1,
                col: col + 1,
            });
        }

        self.replace_row0(target, source, multiplier);
        self.cells[target][col] = 0.0;
        Ok(())
    }

    // Cancellation noise only appears in the row just updated. A confirmed
    // pivot is never snapped.
    fn clean_row0(&mut self, row: usize, tolerance: f32, keep: Option<usize>) {
        for (col, x) in self.cells[row].iter_mut().enumerate() {
            if Some(col) != keep && x.abs() < tolerance {
                *x = 0.0;
            }
        }
    }

    /// Reduced row echelon form of a copy of the matrix.
    ///
    /// Rank deficiency is not an error: it shows up as `None` entries in
    /// [`Echelon::pivots`] and as a rank smaller than the row count.
    pub fn row_reduce(&self, config: &EliminationConfig) -> Result<Echelon, LinalgError> {
        let mut matrix = self.clone();
        let found = matrix.forward_reduction(config)?;
        matrix.backward_reduction(&found, config)?;

        let mut pivots = vec![None; matrix.rows];
        for (row, col) in found.iter() {
            pivots[*row] = Some(*col);
        }

        debug!("Reduced a {}x{} matrix, rank {}", matrix.rows, matrix.cols, found.len());
        Ok(Echelon {
            matrix,
            pivots,
            rank: found.len(),
        })
    }

    pub fn rank(&self, config: &EliminationConfig) -> Result<usize, LinalgError> {
        Ok(self.clone().forward_reduction(config)?.len())
    }

    /// Solves `A x = b` by reducing `[A | b]`.
    ///
    /// Fails with [`LinalgError::InconsistentSystem`] when a row reduces to
    /// `0 = c` with `c != 0`, and with [`LinalgError::SingularMatrix`] when
    /// some unknown is free (infinitely many solutions).
    pub fn gauss_elimination(&self, b: &Vector, config: &EliminationConfig) -> Result<Vector, LinalgError> {
        let augmented = self.augment_right(b)?;
        let echelon = augmented.row_reduce(config)?;
        let n = self.cols;

        if let Some(row) = echelon.pivots.iter().position(|p| *p == Some(n)) {
            debug!("Row {} of the augmented matrix reads 0 = c", row + 1);
            return Err(LinalgError::InconsistentSystem { row: row + 1 });
        }

        let mut pivot_row_of_col = vec![None; n];
        for (row, pivot) in echelon.pivots.iter().enumerate() {
            if let Some(col) = pivot {
                pivot_row_of_col[*col] = Some(row);
            }
        }

        let mut solution = Vec::with_capacity(n);
        let mut free_columns = vec![];
        for (col, row) in pivot_row_of_col.iter().enumerate() {
            match row {
                Some(r) => solution.push(echelon.matrix.at(*r, n)),
                None => free_columns.push(col + 1),
            }
        }

        if !free_columns.is_empty() {
            return Err(LinalgError::SingularMatrix { free_columns });
        }

        Ok(Vector::from(solution))
    }

    /// Tests whether the matrix is in reduced row echelon form (exact zeros
    /// and ones).
    pub fn is_rref(&self) -> bool {
        let mut last_pivot_col = None;

        for (i, row) in self.cells.iter().enumerate() {
            match row.iter().position(|x| *x != 0.0) {
                None => {
                    // only zero rows may follow
                    return self.cells[i + 1..]
                        .iter()
                        .all(|r| r.iter().all(|x| *x == 0.0));
                }
                Some(pivot_col) => {
                    if let Some(last) = last_pivot_col {
                        if pivot_col <= last {
                            return false;
                        }
                    }
                    last_pivot_col = Some(pivot_col);

                    if row[pivot_col] != 1.0 {
                        return false;
                    }
                    if (0..self.rows).any(|r| r != i && self.at(r, pivot_col) != 0.0) {
                        return false;
                    }
                }
            }
        }

        true
    }

    /// Inverse by Gauss-Jordan elimination of `[A | I]`.
    pub fn inverse(&self, config: &EliminationConfig) -> Result<Matrix, LinalgError> {
        if !self.is_square() {
            return Err(LinalgError::NotSquareMatrix {
                rows: self.rows,
                cols: self.cols,
            });
        }

        let n = self.rows;
        let augmented = self.augment_right_matrix(&matrix_factory::identity(n)?)?;
        let echelon = augmented.row_reduce(config)?;

        let free_columns: Vec<usize> = (0..n)
            .filter(|c| echelon.pivots.get(*c) != Some(&Some(*c)))
            .map(|c| c + 1)
            .collect();
        if !free_columns.is_empty() {
            return Err(LinalgError::SingularMatrix { free_columns });
        }

        Ok(echelon.matrix.split_cols(n).1)
    }
}

// --------------------------------------------------
//                      TESTS
// --------------------------------------------------
