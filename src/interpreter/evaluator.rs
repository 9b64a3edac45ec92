/// Core evaluation logic and the session environment.
///
/// Contains the `Environment`, expression evaluation, statement execution
/// and matrix literal construction.
pub mod core;

/// Binary operator evaluation.
///
/// Dispatches `+ - * /` on the kinds of both operands to scalar or matrix
/// arithmetic, rejecting the combinations that have no meaning.
pub mod binary;

/// Unary operator evaluation.
///
/// Implements negation of scalars and matrices.
pub mod unary;

/// Builtin function evaluation.
///
/// Holds the table of builtin functions, their names and arities, and the
/// wrappers that call into the elimination engine.
pub mod function;
