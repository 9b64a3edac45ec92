/// Arithmetic and elimination errors.
///
/// Raised by the value layer and the elimination engine, which know nothing
/// about source lines. The evaluator attaches a line with [`MathError::at`].
pub mod math_error;
/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code: unexpected tokens, unbalanced delimiters, unknown functions and
/// reserved names.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation: division
/// by zero, dimension and type mismatches, singular matrices, wrong argument
/// counts and undefined variables.
pub mod runtime_error;

pub use math_error::{MathError, MathResult};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while turning source text into a value.
///
/// Returned by [`crate::run_source`] and [`crate::get_result`], which both
/// parse and evaluate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The source text could not be parsed.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// The parsed program failed during evaluation.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
