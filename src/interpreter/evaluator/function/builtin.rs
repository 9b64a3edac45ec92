use crate::{
    error::RuntimeError,
    interpreter::{
        elimination,
        evaluator::core::EvalResult,
        value::{core::Value, matrix::Matrix},
    },
    util::num::{count_to_scalar, scalar_to_count},
};

/// Applies an elimination routine to a single matrix argument.
///
/// The generated functions reject a scalar argument with a `TypeMismatch`
/// and attach the call's line to any engine error.
///
/// # Example
/// ```
/// use ratmat::interpreter::{
///     evaluator::function::builtin::rref,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let m = Matrix::from_integers(&[[2, 4], [1, 3]]).unwrap();
/// let r = rref(&[Value::from(m)], 1).unwrap();
///
/// assert_eq!(r, Value::from(Matrix::identity(2).unwrap()));
/// ```
macro_rules! matrix_builtin {
    ($fname:ident, $label:literal, $engine:path) => {
        pub fn $fname(args: &[Value], line: usize) -> EvalResult<Value> {
            let matrix = args[0].as_matrix($label, line)?;
            $engine(matrix).map(Value::from).map_err(|e| e.at(line))
        }
    };
}

matrix_builtin!(inverse, "inverse", elimination::inverse);
matrix_builtin!(rref, "rref", elimination::rref);
matrix_builtin!(ef, "ef", elimination::ef);
matrix_builtin!(determinant, "det", elimination::determinant);
matrix_builtin!(col, "col", elimination::column_space);
matrix_builtin!(row, "row", elimination::row_space);

/// Largest size `identity(n)` will build.
pub const MAX_IDENTITY_SIZE: usize = 1000;

/// Number of pivots of a matrix, as an integer scalar.
pub fn rank(args: &[Value], line: usize) -> EvalResult<Value> {
    let matrix = args[0].as_matrix("rank", line)?;
    elimination::rank(matrix).map(|r| Value::from(count_to_scalar(r)))
                             .map_err(|e| e.at(line))
}

/// Number of free columns of a matrix, as an integer scalar.
pub fn nullity(args: &[Value], line: usize) -> EvalResult<Value> {
    let matrix = args[0].as_matrix("nullity", line)?;
    elimination::nullity(matrix).map(|n| Value::from(count_to_scalar(n)))
                                .map_err(|e| e.at(line))
}

/// Whether an augmented matrix `[A | b]` has a solution.
pub fn is_consistent(args: &[Value], line: usize) -> EvalResult<Value> {
    let matrix = args[0].as_matrix("is_consistent", line)?;
    elimination::is_consistent(matrix).map(Value::from)
                                      .map_err(|e| e.at(line))
}

/// Whether the columns of all arguments, taken together, are independent.
pub fn is_independent(args: &[Value], line: usize) -> EvalResult<Value> {
    let vectors = matrices("is_independent", args, line)?;
    elimination::is_independent(&vectors).map(Value::from)
                                         .map_err(|e| e.at(line))
}

/// Whether the columns of all arguments, taken together, form a basis.
///
/// # Example
/// ```
/// use ratmat::interpreter::{
///     evaluator::function::builtin::is_basis,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let m = Matrix::from_integers(&[[1, 1], [0, 1]]).unwrap();
/// assert_eq!(is_basis(&[Value::from(m)], 1).unwrap().to_string(), "YES");
/// ```
pub fn is_basis(args: &[Value], line: usize) -> EvalResult<Value> {
    let vectors = matrices("is_basis", args, line)?;
    elimination::is_basis(&vectors).map(Value::from)
                                   .map_err(|e| e.at(line))
}

/// Whether the columns of the first argument span those of the second.
pub fn spans(args: &[Value], line: usize) -> EvalResult<Value> {
    let vectors = args[0].as_matrix("spans", line)?;
    let target = args[1].as_matrix("spans", line)?;
    elimination::spans(vectors, target).map(Value::from)
                                       .map_err(|e| e.at(line))
}

/// Dimension of the span of all argument columns, as an integer scalar.
pub fn dim(args: &[Value], line: usize) -> EvalResult<Value> {
    let vectors = matrices("dim", args, line)?;
    elimination::dimension(&vectors).map(|d| Value::from(count_to_scalar(d)))
                                     .map_err(|e| e.at(line))
}

/// Basis for the span of one matrix's columns, or of several vectors.
///
/// Every argument must be a matrix; several arguments are placed side by
/// side before reducing.
///
/// # Example
/// ```
/// use ratmat::interpreter::{
///     evaluator::function::builtin::span,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let m = Matrix::from_integers(&[[1, 2], [2, 4]]).unwrap();
/// let basis = span(&[Value::from(m)], 1).unwrap();
///
/// assert_eq!(basis, Value::from(Matrix::from_integers(&[[1], [2]]).unwrap()));
/// ```
pub fn span(args: &[Value], line: usize) -> EvalResult<Value> {
    let vectors = matrices("span", args, line)?;
    elimination::span(&vectors).map(Value::from)
                               .map_err(|e| e.at(line))
}

/// Rows become columns.
pub fn transpose(args: &[Value], line: usize) -> EvalResult<Value> {
    let matrix = args[0].as_matrix("transpose", line)?;
    Ok(Value::from(matrix.transpose()))
}

/// Places two or more matrices side by side.
pub fn augment(args: &[Value], line: usize) -> EvalResult<Value> {
    let parts = matrices("augment", args, line)?;
    let (first, rest) = parts.split_first()
                             .ok_or_else(|| RuntimeError::DimensionMismatch {
                                 details: "augment needs at least one matrix".to_string(),
                                 line,
                             })?;
    rest.iter()
        .try_fold(first.clone(), |acc, next| acc.augment(next))
        .map(Value::from)
        .map_err(|e| e.at(line))
}

/// The `n × n` identity matrix.
///
/// `n` must be an integer scalar (`TypeMismatch` otherwise) between 1 and
/// [`MAX_IDENTITY_SIZE`] (`DimensionMismatch` otherwise).
///
/// # Example
/// ```
/// use ratmat::interpreter::{
///     evaluator::function::builtin::identity,
///     value::{core::Value, matrix::Matrix},
/// };
///
/// let i = identity(&[Value::from(2)], 1).unwrap();
/// assert_eq!(i, Value::from(Matrix::identity(2).unwrap()));
/// ```
pub fn identity(args: &[Value], line: usize) -> EvalResult<Value> {
    let n = args[0].as_scalar("identity", line)?;
    if !n.is_integer() {
        return Err(RuntimeError::TypeMismatch { details: format!("identity expects an integer size, found {n}"),
                                                line });
    }
    let size = scalar_to_count(n).filter(|size| (1..=MAX_IDENTITY_SIZE).contains(size))
                                 .ok_or_else(|| RuntimeError::DimensionMismatch {
                                     details: format!("identity needs a size from 1 to {MAX_IDENTITY_SIZE}, found {n}"),
                                     line,
                                 })?;
    Matrix::identity(size).map(Value::from)
                          .map_err(|e| e.at(line))
}

/// Collects every argument as a matrix, failing on the first scalar.
fn matrices(context: &str, args: &[Value], line: usize) -> EvalResult<Vec<Matrix>> {
    args.iter()
        .map(|arg| arg.as_matrix(context, line).cloned())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::value::scalar::Scalar;

    fn m<R: AsRef<[i64]>>(rows: &[R]) -> Value {
        Value::from(Matrix::from_integers(rows).unwrap())
    }

    #[test]
    fn scalar_arguments_are_type_mismatches() {
        for builtin in [inverse,
                        rref,
                        ef,
                        determinant,
                        col,
                        row,
                        rank,
                        nullity,
                        transpose,
                        span,
                        is_consistent,
                        is_independent,
                        is_basis,
                        dim]
        {
            assert!(matches!(builtin(&[Value::from(3)], 5),
                             Err(RuntimeError::TypeMismatch { line: 5, .. })));
        }
    }

    #[test]
    fn singular_inverse_carries_the_line() {
        assert_eq!(inverse(&[m(&[[1, 2], [2, 4]])], 9),
                   Err(RuntimeError::SingularMatrix { line: 9 }));
    }

    #[test]
    fn rank_and_nullity_are_scalars() {
        let a = m(&[[1, 2, 3], [2, 4, 6]]);
        assert_eq!(rank(&[a.clone()], 1), Ok(Value::from(1)));
        assert_eq!(nullity(&[a], 1), Ok(Value::from(2)));
    }

    #[test]
    fn span_of_several_vectors() {
        let args = [m(&[[1], [1]]), m(&[[2], [2]]), m(&[[0], [1]])];
        assert_eq!(span(&args, 1), Ok(m(&[[1, 0], [1, 1]])));

        let mixed = [m(&[[1], [1]]), Value::from(2)];
        assert!(matches!(span(&mixed, 1), Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn augment_folds_left_to_right() {
        let args = [m(&[[1], [2]]), m(&[[3], [4]]), m(&[[5, 6], [7, 8]])];
        assert_eq!(augment(&args, 1), Ok(m(&[[1, 3, 5, 6], [2, 4, 7, 8]])));

        let mismatched = [m(&[[1], [2]]), m(&[[3]])];
        assert!(matches!(augment(&mismatched, 1), Err(RuntimeError::DimensionMismatch { .. })));
    }

    #[test]
    fn identity_checks_its_size() {
        assert_eq!(identity(&[Value::from(1)], 1), Ok(m(&[[1]])));
        assert!(matches!(identity(&[Value::from(Scalar::new(3, 2).unwrap())], 1),
                         Err(RuntimeError::TypeMismatch { .. })));
        assert!(matches!(identity(&[Value::from(0)], 1),
                         Err(RuntimeError::DimensionMismatch { .. })));
        assert!(matches!(identity(&[Value::from(-2)], 1),
                         Err(RuntimeError::DimensionMismatch { .. })));
        assert!(matches!(identity(&[m(&[[1]])], 1), Err(RuntimeError::TypeMismatch { .. })));
    }

    #[test]
    fn identity_refuses_sizes_too_large_to_build() {
        let cap = i64::try_from(MAX_IDENTITY_SIZE).unwrap();
        assert!(identity(&[Value::from(cap)], 1).is_ok());
        for size in [cap + 1, 100_000, 1 << 32, i64::MAX] {
            assert!(matches!(identity(&[Value::from(size)], 3),
                             Err(RuntimeError::DimensionMismatch { line: 3, .. })),
                    "identity({size})");
        }
    }

    #[test]
    fn questions_answer_with_booleans() {
        let square = m(&[[1, 2], [3, 4]]);
        assert_eq!(is_basis(&[square.clone()], 1), Ok(Value::from(true)));
        assert_eq!(is_independent(&[m(&[[1], [2]]), m(&[[2], [4]])], 1),
                   Ok(Value::from(false)));
        assert_eq!(is_consistent(&[m(&[[1, 1, 1], [1, 1, 2]])], 1), Ok(Value::from(false)));
        assert_eq!(spans(&[square, m(&[[7], [9]])], 1), Ok(Value::from(true)));
        assert_eq!(dim(&[m(&[[1], [1]]), m(&[[2], [2]])], 1), Ok(Value::from(1)));
    }

    #[test]
    fn spans_checks_both_arguments() {
        assert!(matches!(spans(&[m(&[[1]]), Value::from(1)], 2),
                         Err(RuntimeError::TypeMismatch { line: 2, .. })));
        assert!(matches!(spans(&[m(&[[1], [0]]), m(&[[1]])], 2),
                         Err(RuntimeError::DimensionMismatch { line: 2, .. })));
    }

    #[test]
    fn transpose_swaps_shape() {
        assert_eq!(transpose(&[m(&[[1, 2, 3]])], 1), Ok(m(&[[1], [2], [3]])));
    }
}
