use tracing::debug;

use crate::{
    error::{MathError, MathResult},
    interpreter::{
        elimination::{
            basis::{rank, side_by_side},
            core::{Mode, eliminate},
        },
        value::matrix::Matrix,
    },
};

/// Whether the augmented matrix `[A | b]` describes a solvable system.
///
/// The system has no solution exactly when the last column holds a pivot,
/// i.e. some row reduces to `0 = c` with `c` nonzero.
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::is_consistent, value::matrix::Matrix};
///
/// let solvable = Matrix::from_integers(&[[1, 1, 2], [1, -1, 0]]).unwrap();
/// let contradictory = Matrix::from_integers(&[[1, 1, 2], [2, 2, 5]]).unwrap();
///
/// assert!(is_consistent(&solvable).unwrap());
/// assert!(!is_consistent(&contradictory).unwrap());
/// ```
pub fn is_consistent(augmented: &Matrix) -> MathResult<bool> {
    let result = eliminate(augmented, Mode::Echelon)?;
    let last = augmented.cols() - 1;
    Ok(result.pivot_columns().last() != Some(&last))
}

/// Whether the given vectors are linearly independent: every one of them
/// is a pivot column.
///
/// # Errors
/// `MathError::DimensionMismatch` if no vectors are given or their row
/// counts differ.
pub fn is_independent(vectors: &[Matrix]) -> MathResult<bool> {
    let combined = side_by_side("is_independent", vectors)?;
    Ok(rank(&combined)? == combined.cols())
}

/// Whether the given vectors form a basis of the space they live in: they
/// are independent and there are exactly as many as each has entries.
///
/// # Errors
/// `MathError::DimensionMismatch` if no vectors are given or their row
/// counts differ.
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::is_basis, value::matrix::Matrix};
///
/// let e1 = Matrix::from_integers(&[[1], [0]]).unwrap();
/// let e2 = Matrix::from_integers(&[[1], [1]]).unwrap();
///
/// assert!(is_basis(&[e1.clone(), e2]).unwrap());
/// assert!(!is_basis(&[e1]).unwrap());
/// ```
pub fn is_basis(vectors: &[Matrix]) -> MathResult<bool> {
    let combined = side_by_side("is_basis", vectors)?;
    Ok(combined.is_square() && rank(&combined)? == combined.cols())
}

/// Whether every column of `target` is a combination of the columns of
/// `vectors`.
///
/// Appending the target columns must not raise the rank.
///
/// # Errors
/// `MathError::DimensionMismatch` if the two matrices differ in row count.
///
/// # Example
/// ```
/// use ratmat::interpreter::{elimination::spans, value::matrix::Matrix};
///
/// let plane = Matrix::from_integers(&[[1, 0], [0, 1], [0, 0]]).unwrap();
/// let inside = Matrix::from_integers(&[[2], [3], [0]]).unwrap();
/// let outside = Matrix::from_integers(&[[0], [0], [1]]).unwrap();
///
/// assert!(spans(&plane, &inside).unwrap());
/// assert!(!spans(&plane, &outside).unwrap());
/// ```
pub fn spans(vectors: &Matrix, target: &Matrix) -> MathResult<bool> {
    if vectors.rows() != target.rows() {
        return Err(MathError::dimensions(format!("spans needs vectors of equal length, found {} and {}",
                                                 vectors.shape(),
                                                 target.shape())));
    }
    let own = rank(vectors)?;
    let joint = rank(&vectors.augment(target)?)?;
    debug!(own, joint, "span ranks");
    Ok(own == joint)
}

/// Dimension of the span of the given vectors.
///
/// # Errors
/// `MathError::DimensionMismatch` if no vectors are given or their row
/// counts differ.
pub fn dimension(vectors: &[Matrix]) -> MathResult<usize> {
    rank(&side_by_side("dim", vectors)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn m<R: AsRef<[i64]>>(rows: &[R]) -> Matrix {
        Matrix::from_integers(rows).unwrap()
    }

    #[test]
    fn consistency_looks_at_the_last_column() {
        assert!(is_consistent(&m(&[[1, 2, 3], [2, 4, 6]])).unwrap());
        assert!(!is_consistent(&m(&[[1, 2, 3], [2, 4, 7]])).unwrap());
        assert!(!is_consistent(&m(&[[0, 0, 1]])).unwrap());
        assert!(is_consistent(&m(&[[0, 0, 0]])).unwrap());
    }

    #[test]
    fn a_single_column_system_is_consistent_only_when_zero() {
        assert!(is_consistent(&m(&[[0], [0]])).unwrap());
        assert!(!is_consistent(&m(&[[0], [4]])).unwrap());
    }

    #[test]
    fn independence_of_separate_and_joined_vectors() {
        let u = m(&[[1], [2], [3]]);
        let v = m(&[[2], [4], [6]]);
        let w = m(&[[0], [1], [0]]);
        assert!(is_independent(&[u.clone(), w.clone()]).unwrap());
        assert!(!is_independent(&[u.clone(), v, w]).unwrap());
        assert!(is_independent(&[m(&[[1, 0], [0, 1], [1, 1]])]).unwrap());
        assert!(!is_independent(&[m(&[[0], [0], [0]])]).unwrap());
        assert!(is_independent(&[]).is_err());
    }

    #[test]
    fn a_basis_needs_as_many_vectors_as_entries() {
        assert!(is_basis(&[m(&[[2, 1], [0, 3]])]).unwrap());
        assert!(!is_basis(&[m(&[[1, 2], [2, 4]])]).unwrap());
        assert!(!is_basis(&[m(&[[1, 0, 0], [0, 1, 0]])]).unwrap());
        assert!(!is_basis(&[m(&[[1], [0], [0]]), m(&[[0], [1], [0]])]).unwrap());
    }

    #[test]
    fn spans_compares_ranks_not_counts() {
        let line = m(&[[1], [1]]);
        assert!(spans(&line, &m(&[[3], [3]])).unwrap());
        assert!(!spans(&line, &m(&[[1], [0]])).unwrap());
        assert!(spans(&m(&[[1, 0], [0, 1]]), &m(&[[5, -1, 7], [2, 0, 1]])).unwrap());
        assert!(spans(&m(&[[0], [0]]), &m(&[[0], [0]])).unwrap());
    }

    #[test]
    fn spans_rejects_mismatched_lengths() {
        assert!(matches!(spans(&m(&[[1], [0]]), &m(&[[1], [0], [0]])),
                         Err(MathError::DimensionMismatch { .. })));
    }

    #[test]
    fn dimension_is_the_rank_of_the_joined_vectors() {
        let vectors = [m(&[[1], [0], [1]]), m(&[[2], [0], [2]]), m(&[[0], [1], [0]])];
        assert_eq!(dimension(&vectors).unwrap(), 2);
        assert_eq!(dimension(&[m(&[[0, 0]])]).unwrap(), 0);
    }
}
