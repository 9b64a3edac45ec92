/// Represents all errors that can occur during evaluation.
///
/// Every variant carries the source line of the expression or statement that
/// failed. Hand-built ASTs choose their own line numbers.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// Tried to use a variable that has not been assigned.
    #[error("Error on line {line}: Undefined variable '{name}'.")]
    UndefinedVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An operator or function was applied to the wrong kind of value.
    #[error("Error on line {line}: Type mismatch: {details}.")]
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Matrix shapes are incompatible with the operation.
    #[error("Error on line {line}: Dimension mismatch: {details}.")]
    DimensionMismatch {
        /// Which shapes were involved.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A function was called with the wrong number of arguments.
    #[error("Error on line {line}: {function} expects {expected} argument(s), but found {found}.")]
    ArityMismatch {
        /// The function that was called.
        function: String,
        /// The accepted argument count, e.g. `1` or `at least 1`.
        expected: String,
        /// The number of arguments supplied.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted division by zero.
    #[error("Error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Requested the inverse of a matrix whose rank is below its size.
    #[error("Error on line {line}: Matrix is singular and has no inverse.")]
    SingularMatrix {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns the source line the error is attributed to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UndefinedVariable { line, .. }
            | Self::TypeMismatch { line, .. }
            | Self::DimensionMismatch { line, .. }
            | Self::ArityMismatch { line, .. }
            | Self::DivisionByZero { line }
            | Self::SingularMatrix { line } => *line,
        }
    }
}
