use std::fmt;

use tracing::trace;

use crate::{
    error::MathResult,
    interpreter::value::{matrix::Matrix, scalar::Scalar},
};

/// How far elimination goes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Echelon form: zeros below each pivot, pivots keep their values.
    Echelon,
    /// Reduced echelon form: every pivot is 1 and the only nonzero entry in
    /// its column.
    Reduced,
}

/// One elementary row operation, with rows counted from zero.
///
/// Replaying the operations an [`Elimination`] recorded, in order, turns the
/// input matrix into the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RowOperation {
    /// Exchange two rows.
    Swap { first: usize, second: usize },
    /// Multiply a row by a nonzero factor.
    Scale { row: usize, factor: Scalar },
    /// Add `factor` times `source` to `target`.
    Replace {
        target: usize,
        source: usize,
        factor: Scalar,
    },
}

impl RowOperation {
    /// Applies the operation to a copy of `matrix`.
    ///
    /// # Panics
    /// Panics if a row index is outside the matrix.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::{
    ///     elimination::core::RowOperation,
    ///     value::{matrix::Matrix, scalar::Scalar},
    /// };
    ///
    /// let m = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
    /// let op = RowOperation::Replace { target: 1,
    ///                                  source: 0,
    ///                                  factor: Scalar::from(-3) };
    /// assert_eq!(op.apply(&m), Matrix::from_integers(&[[1, 2], [0, -2]]).unwrap());
    /// ```
    #[must_use]
    pub fn apply(&self, matrix: &Matrix) -> Matrix {
        let mut buffer = WorkBuffer::from_matrix(matrix);
        buffer.perform(self);
        buffer.into_matrix(matrix)
    }
}

/// Rows print counted from one: `R1 <-> R2`, `R1 -> 1/2 R1`,
/// `R2 -> R2 + -3 R1`.
impl fmt::Display for RowOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Swap { first, second } => write!(f, "R{} <-> R{}", first + 1, second + 1),
            Self::Scale { row, factor } => write!(f, "R{0} -> {factor} R{0}", row + 1),
            Self::Replace { target,
                            source,
                            factor, } => {
                write!(f, "R{0} -> R{0} + {factor} R{1}", target + 1, source + 1)
            },
        }
    }
}

/// The outcome of running elimination on a matrix.
///
/// Besides the reduced matrix, it records what the algorithm saw on the way,
/// which is what determinant, rank and basis computations need.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Elimination {
    matrix:        Matrix,
    pivot_columns: Vec<usize>,
    pivot_product: Scalar,
    row_swaps:     usize,
    operations:    Vec<RowOperation>,
}

impl Elimination {
    /// The reduced matrix.
    #[must_use]
    pub const fn matrix(&self) -> &Matrix {
        &self.matrix
    }

    #[must_use]
    pub fn into_matrix(self) -> Matrix {
        self.matrix
    }

    /// Pivot column of each pivot row, top to bottom; strictly increasing.
    #[must_use]
    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivot_columns
    }

    /// Number of pivots found.
    #[must_use]
    pub fn rank(&self) -> usize {
        self.pivot_columns.len()
    }

    /// Product of the pivot values as they were found, before any
    /// normalization.
    #[must_use]
    pub const fn pivot_product(&self) -> &Scalar {
        &self.pivot_product
    }

    #[must_use]
    pub const fn row_swaps(&self) -> usize {
        self.row_swaps
    }

    /// The row operations performed, in order.
    #[must_use]
    pub fn operations(&self) -> &[RowOperation] {
        &self.operations
    }
}

/// Exclusively owned row-major scratch copy of the input.
struct WorkBuffer {
    rows:       usize,
    cols:       usize,
    cells:      Vec<Scalar>,
    operations: Vec<RowOperation>,
}

impl WorkBuffer {
    fn from_matrix(matrix: &Matrix) -> Self {
        Self { rows:       matrix.rows(),
               cols:       matrix.cols(),
               cells:      matrix.values().to_vec(),
               operations: Vec::new(), }
    }

    fn at(&self, row: usize, col: usize) -> &Scalar {
        &self.cells[row * self.cols + col]
    }

    fn perform(&mut self, op: &RowOperation) {
        let cols = self.cols;
        match op {
            RowOperation::Swap { first, second } => {
                for col in 0..cols {
                    self.cells.swap(first * cols + col, second * cols + col);
                }
            },
            RowOperation::Scale { row, factor } => {
                for cell in &mut self.cells[row * cols..(row + 1) * cols] {
                    *cell = cell.mul(factor);
                }
            },
            RowOperation::Replace { target,
                                    source,
                                    factor, } => {
                for col in 0..cols {
                    let delta = factor.mul(self.at(*source, col));
                    let index = target * cols + col;
                    self.cells[index] = self.cells[index].add(&delta);
                }
            },
        }
    }

    /// Performs `op` and appends it to the log.
    fn record(&mut self, op: RowOperation) {
        trace!(%op, "row operation");
        self.perform(&op);
        self.operations.push(op);
    }

    /// Clears column `col` in `targets` using the pivot at (`pivot_row`,
    /// `col`).
    fn clear_column(&mut self,
                    pivot_row: usize,
                    col: usize,
                    targets: impl Iterator<Item = usize>)
                    -> MathResult<()> {
        let pivot = self.at(pivot_row, col).clone();
        for target in targets {
            let entry = self.at(target, col);
            if entry.is_zero() {
                continue;
            }
            let factor = entry.div(&pivot)?.neg();
            self.record(RowOperation::Replace { target,
                                                source: pivot_row,
                                                factor });
        }
        Ok(())
    }

    fn into_matrix(self, shape: &Matrix) -> Matrix {
        shape.with_values(self.cells)
    }
}

/// Runs pivoted elimination on a copy of `matrix`.
///
/// Columns are scanned left to right. In each column the first nonzero entry
/// at or below the first unpivoted row becomes the pivot and is swapped into
/// place; a column without one is free. Scanning stops once every row holds
/// a pivot. Entries below each pivot are always cleared. In
/// [`Mode::Reduced`] each pivot row is also divided by its pivot, and a
/// final pass from the last pivot to the first clears the entries above.
///
/// # Errors
/// Only `MathError::DivisionByZero`, which nonzero pivots rule out.
///
/// # Example
/// ```
/// use ratmat::interpreter::{
///     elimination::core::{Mode, eliminate},
///     value::matrix::Matrix,
/// };
///
/// let m = Matrix::from_integers(&[[0, 2, 4], [1, 1, 1]]).unwrap();
/// let result = eliminate(&m, Mode::Reduced).unwrap();
///
/// assert_eq!(result.pivot_columns(), &[0, 1]);
/// assert_eq!(result.row_swaps(), 1);
/// assert_eq!(result.matrix(),
///            &Matrix::from_integers(&[[1, 0, -1], [0, 1, 2]]).unwrap());
/// ```
pub fn eliminate(matrix: &Matrix, mode: Mode) -> MathResult<Elimination> {
    let mut buffer = WorkBuffer::from_matrix(matrix);
    let mut pivot_columns = Vec::with_capacity(buffer.rows.min(buffer.cols));
    let mut pivot_product = Scalar::one();
    let mut row_swaps = 0;

    for col in 0..buffer.cols {
        let next_row = pivot_columns.len();
        if next_row == buffer.rows {
            break;
        }

        let Some(found) = (next_row..buffer.rows).find(|&row| !buffer.at(row, col).is_zero())
        else {
            trace!(col, "free column");
            continue;
        };

        if found != next_row {
            buffer.record(RowOperation::Swap { first:  found,
                                               second: next_row, });
            row_swaps += 1;
        }

        let pivot = buffer.at(next_row, col).clone();
        trace!(row = next_row, col, %pivot, "pivot");
        pivot_product = pivot_product.mul(&pivot);

        if mode == Mode::Reduced && !pivot.is_one() {
            buffer.record(RowOperation::Scale { row:    next_row,
                                                factor: pivot.recip()?, });
        }
        buffer.clear_column(next_row, col, next_row + 1..buffer.rows)?;
        pivot_columns.push(col);
    }

    if mode == Mode::Reduced {
        for (row, &col) in pivot_columns.iter().enumerate().rev() {
            buffer.clear_column(row, col, 0..row)?;
        }
    }

    let operations = std::mem::take(&mut buffer.operations);
    Ok(Elimination { matrix: buffer.into_matrix(matrix),
                     pivot_columns,
                     pivot_product,
                     row_swaps,
                     operations })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m<R: AsRef<[i64]>>(rows: &[R]) -> Matrix {
        Matrix::from_integers(rows).unwrap()
    }

    #[test]
    fn echelon_keeps_pivot_values() {
        let result = eliminate(&m(&[[2, 4], [1, 3]]), Mode::Echelon).unwrap();
        assert_eq!(result.matrix(), &m(&[[2, 4], [0, 1]]));
        assert_eq!(result.pivot_product(), &Scalar::from(2));
        assert_eq!(result.row_swaps(), 0);
    }

    #[test]
    fn zero_matrix_has_no_pivots() {
        let result = eliminate(&m(&[[0, 0], [0, 0]]), Mode::Reduced).unwrap();
        assert_eq!(result.rank(), 0);
        assert_eq!(result.matrix(), &m(&[[0, 0], [0, 0]]));
    }

    #[test]
    fn free_columns_are_skipped() {
        let result = eliminate(&m(&[[0, 1, 2], [0, 2, 5]]), Mode::Reduced).unwrap();
        assert_eq!(result.pivot_columns(), &[1, 2]);
        assert_eq!(result.matrix(), &m(&[[0, 1, 0], [0, 0, 1]]));
    }

    #[test]
    fn zero_rows_sink_to_the_bottom() {
        let result = eliminate(&m(&[[0, 0], [0, 3], [1, 1]]), Mode::Reduced).unwrap();
        assert_eq!(result.pivot_columns(), &[0, 1]);
        assert_eq!(result.matrix(), &m(&[[1, 0], [0, 1], [0, 0]]));
    }

    #[test]
    fn scanning_stops_once_every_row_is_pivoted() {
        let result = eliminate(&m(&[[1, 2, 3, 4]]), Mode::Echelon).unwrap();
        assert_eq!(result.pivot_columns(), &[0]);
        assert_eq!(result.matrix(), &m(&[[1, 2, 3, 4]]));
    }

    #[test]
    fn input_is_not_modified() {
        let input = m(&[[0, 1], [1, 0]]);
        let _ = eliminate(&input, Mode::Reduced).unwrap();
        assert_eq!(input, m(&[[0, 1], [1, 0]]));
    }

    #[test]
    fn replaying_operations_reproduces_the_result() {
        for input in [m(&[[0, 2, 4], [1, 1, 1]]),
                      m(&[[2, -1, 0], [-1, 2, -1], [0, -1, 2]]),
                      m(&[[0, 0, 3], [0, 5, 1], [7, 2, 2]]),
                      m(&[[1, 2, 3], [2, 4, 6], [1, 0, 1]])]
        {
            for mode in [Mode::Echelon, Mode::Reduced] {
                let result = eliminate(&input, mode).unwrap();
                let replayed = result.operations()
                                     .iter()
                                     .fold(input.clone(), |acc, op| op.apply(&acc));
                assert_eq!(&replayed, result.matrix(), "{mode:?} of\n{input}");
            }
        }
    }

    #[test]
    fn operations_are_recorded_in_order() {
        let result = eliminate(&m(&[[0, 2], [1, 1]]), Mode::Reduced).unwrap();
        let steps = result.operations()
                          .iter()
                          .map(ToString::to_string)
                          .collect::<Vec<_>>();
        assert_eq!(steps, ["R2 <-> R1", "R2 -> 1/2 R2", "R1 -> R1 + -1 R2"]);
    }

    #[test]
    fn echelon_form_never_scales() {
        let result = eliminate(&m(&[[2, 4], [1, 3]]), Mode::Echelon).unwrap();
        assert!(result.operations()
                      .iter()
                      .all(|op| !matches!(op, RowOperation::Scale { .. })));
    }
}
