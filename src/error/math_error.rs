use crate::error::RuntimeError;

/// Result type of the value layer and the elimination engine.
pub type MathResult<T> = Result<T, MathError>;

/// Represents a failure of exact scalar or matrix arithmetic.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MathError {
    /// Division by the zero scalar, or a rational with a zero denominator.
    #[error("Division by zero.")]
    DivisionByZero,
    /// Operand shapes are incompatible with the operation.
    #[error("Dimension mismatch: {details}.")]
    DimensionMismatch {
        /// Which shapes were involved and why they do not fit.
        details: String,
    },
    /// An inverse was requested for a rank-deficient matrix.
    #[error("Matrix is singular and has no inverse.")]
    SingularMatrix,
}

impl MathError {
    /// Attaches a source line, turning the error into a [`RuntimeError`].
    ///
    /// # Example
    /// ```
    /// use ratmat::error::{MathError, RuntimeError};
    ///
    /// let err = MathError::DivisionByZero.at(3);
    /// assert!(matches!(err, RuntimeError::DivisionByZero { line: 3 }));
    /// ```
    #[must_use]
    pub fn at(self, line: usize) -> RuntimeError {
        match self {
            Self::DivisionByZero => RuntimeError::DivisionByZero { line },
            Self::DimensionMismatch { details } => {
                RuntimeError::DimensionMismatch { details, line }
            },
            Self::SingularMatrix => RuntimeError::SingularMatrix { line },
        }
    }

    pub(crate) fn dimensions(details: impl Into<String>) -> Self {
        Self::DimensionMismatch { details: details.into() }
    }
}
