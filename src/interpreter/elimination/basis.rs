use crate::{
    error::{MathError, MathResult},
    interpreter::{
        elimination::core::{Mode, eliminate},
        value::matrix::Matrix,
    },
};

/// Number of pivots found by elimination.
///
/// # Errors
/// Those of [`eliminate`].
pub fn rank(matrix: &Matrix) -> MathResult<usize> {
    Ok(eliminate(matrix, Mode::Echelon)?.rank())
}

/// Number of free columns: `cols - rank`.
///
/// # Errors
/// Those of [`eliminate`].
pub fn nullity(matrix: &Matrix) -> MathResult<usize> {
    Ok(matrix.cols() - rank(matrix)?)
}

/// Basis of the column space: the original columns at pivot positions.
///
/// Non-pivot columns are combinations of earlier ones and are dropped. A
/// zero matrix spans only the zero vector, which is returned as a single
/// zero column.
///
/// # Errors
/// Those of [`eliminate`].
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::column_space, value::matrix::Matrix};
///
/// let m = Matrix::from_integers(&[[1, 2, 0], [2, 4, 1]]).unwrap();
/// assert_eq!(column_space(&m).unwrap(),
///            Matrix::from_integers(&[[1, 0], [2, 1]]).unwrap());
/// ```
pub fn column_space(matrix: &Matrix) -> MathResult<Matrix> {
    let result = eliminate(matrix, Mode::Reduced)?;
    if result.rank() == 0 {
        return Matrix::zeros(matrix.rows(), 1);
    }
    Ok(matrix.select_columns(result.pivot_columns()))
}

/// Basis of the row space: the nonzero rows of the reduced echelon form.
///
/// A zero matrix yields a single zero row.
///
/// # Errors
/// Those of [`eliminate`].
pub fn row_space(matrix: &Matrix) -> MathResult<Matrix> {
    let result = eliminate(matrix, Mode::Reduced)?;
    if result.rank() == 0 {
        return Matrix::zeros(1, matrix.cols());
    }
    let pivot_rows = (0..result.rank()).collect::<Vec<_>>();
    Ok(result.matrix().select_rows(&pivot_rows))
}

/// Basis for the span of the given vectors.
///
/// Accepts either one matrix whose columns are the vectors, or several
/// column vectors (or matrices), which are placed side by side in order.
/// The basis consists of the original columns at pivot positions, so the
/// first of any dependent group is the one kept.
///
/// # Errors
/// `MathError::DimensionMismatch` if no vectors are given or their row
/// counts differ.
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::span, value::matrix::Matrix};
///
/// let u = Matrix::from_integers(&[[1], [2]]).unwrap();
/// let v = Matrix::from_integers(&[[2], [4]]).unwrap();
///
/// assert_eq!(span(&[u.clone(), v]).unwrap(), u);
/// ```
pub fn span(vectors: &[Matrix]) -> MathResult<Matrix> {
    column_space(&side_by_side("span", vectors)?)
}

/// Places `vectors` next to each other, left to right.
pub(crate) fn side_by_side(operation: &str, vectors: &[Matrix]) -> MathResult<Matrix> {
    let Some((first, rest)) = vectors.split_first() else {
        return Err(MathError::dimensions(format!("{operation} needs at least one vector")));
    };
    rest.iter()
        .try_fold(first.clone(), |acc, next| acc.augment(next))
}
