use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::{matrix::Matrix, scalar::Scalar},
    },
};

/// Represents a runtime value in the interpreter.
///
/// Operators and functions match on the kind to decide what they are allowed
/// to do. Booleans only come out of the yes/no questions (`is_basis`,
/// `spans`, ...) and cannot be combined with anything.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    /// An exact rational number.
    Scalar(Scalar),
    /// A dense matrix of exact rationals.
    Matrix(Matrix),
    /// The answer to a yes/no question about matrices.
    Boolean(bool),
}

/// The kind of a [`Value`], used in type-mismatch diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    Scalar,
    Matrix,
    Boolean,
}

impl From<Scalar> for Value {
    fn from(s: Scalar) -> Self {
        Self::Scalar(s)
    }
}

impl From<Matrix> for Value {
    fn from(m: Matrix) -> Self {
        Self::Matrix(m)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Boolean(b)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Scalar(Scalar::from(v))
    }
}

impl Value {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            Self::Scalar(_) => ValueKind::Scalar,
            Self::Matrix(_) => ValueKind::Matrix,
            Self::Boolean(_) => ValueKind::Boolean,
        }
    }

    /// Returns the matrix, or a `TypeMismatch` naming what expected it.
    ///
    /// # Parameters
    /// - `context`: What needed a matrix, e.g. `"rref"`.
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Example
    /// ```
    /// use ratmat::interpreter::value::core::Value;
    ///
    /// let v = Value::from(3);
    /// assert!(v.as_matrix("rref", 1).is_err());
    /// ```
    pub fn as_matrix(&self, context: &str, line: usize) -> EvalResult<&Matrix> {
        match self {
            Self::Matrix(m) => Ok(m),
            other => {
                Err(RuntimeError::TypeMismatch { details: format!("{context} expects a matrix, found a {}",
                                                                  other.kind()),
                                                 line })
            },
        }
    }

    /// Returns the scalar, or a `TypeMismatch` naming what expected it.
    pub fn as_scalar(&self, context: &str, line: usize) -> EvalResult<&Scalar> {
        let found = match self {
            Self::Scalar(s) => return Ok(s),
            Self::Matrix(m) => format!("a {} matrix", m.shape()),
            Self::Boolean(_) => "a boolean".to_string(),
        };
        Err(RuntimeError::TypeMismatch { details: format!("{context} expects a scalar, found {found}"),
                                         line })
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar => write!(f, "scalar"),
            Self::Matrix => write!(f, "matrix"),
            Self::Boolean => write!(f, "boolean"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Scalar(s) => write!(f, "{s}"),
            Self::Matrix(m) => write!(f, "{m}"),
            Self::Boolean(true) => write!(f, "YES"),
            Self::Boolean(false) => write!(f, "NO"),
        }
    }
}
