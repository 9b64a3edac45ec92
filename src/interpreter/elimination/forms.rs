use crate::{
    error::{MathError, MathResult},
    interpreter::{
        elimination::core::{Mode, eliminate},
        value::{matrix::Matrix, scalar::Scalar},
    },
};

/// Echelon form. Pivots are left at their original values.
///
/// # Errors
/// Those of [`eliminate`].
pub fn ef(matrix: &Matrix) -> MathResult<Matrix> {
    Ok(eliminate(matrix, Mode::Echelon)?.into_matrix())
}

/// Reduced row echelon form.
///
/// # Errors
/// Those of [`eliminate`].
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::rref, value::matrix::Matrix};
///
/// let m = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(rref(&m).unwrap(), Matrix::identity(2).unwrap());
/// ```
pub fn rref(matrix: &Matrix) -> MathResult<Matrix> {
    Ok(eliminate(matrix, Mode::Reduced)?.into_matrix())
}

/// Determinant of a square matrix.
///
/// Computed as `(-1)^swaps` times the product of the pivots met during
/// forward elimination; exactly zero when a column has no pivot.
///
/// # Errors
/// `MathError::DimensionMismatch` if the matrix is not square.
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::determinant, value::{matrix::Matrix, scalar::Scalar}};
///
/// let m = Matrix::from_integers(&[[1, 2], [3, 4]]).unwrap();
/// assert_eq!(determinant(&m).unwrap(), Scalar::from(-2));
/// ```
pub fn determinant(matrix: &Matrix) -> MathResult<Scalar> {
    require_square(matrix, "determinant")?;

    let result = eliminate(matrix, Mode::Echelon)?;
    if result.rank() < matrix.rows() {
        return Ok(Scalar::zero());
    }
    if result.row_swaps() % 2 == 1 {
        Ok(result.pivot_product().neg())
    } else {
        Ok(result.pivot_product().clone())
    }
}

/// Inverse of a square matrix, by reducing `[A | I]` to `[I | A⁻¹]`.
///
/// # Errors
/// - `MathError::DimensionMismatch` if the matrix is not square.
/// - `MathError::SingularMatrix` if the left block does not reduce to the
///   identity.
pub fn inverse(matrix: &Matrix) -> MathResult<Matrix> {
    require_square(matrix, "inverse")?;

    let n = matrix.rows();
    let augmented = matrix.augment(&Matrix::identity(n)?)?;
    let result = eliminate(&augmented, Mode::Reduced)?;

    // Left block is the identity exactly when the pivots sit in columns 0..n.
    if !result.pivot_columns().iter().copied().eq(0..n) {
        return Err(MathError::SingularMatrix);
    }
    Ok(result.matrix().columns(n..2 * n))
}

fn require_square(matrix: &Matrix, operation: &str) -> MathResult<()> {
    if matrix.is_square() {
        Ok(())
    } else {
        Err(MathError::dimensions(format!("{operation} needs a square matrix, found {}",
                                          matrix.shape())))
    }
}
