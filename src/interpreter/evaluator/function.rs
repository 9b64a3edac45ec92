/// The builtin table: names, arities and dispatch.
///
/// Resolves function names for the parser, checks argument counts before any
/// argument is evaluated, and calls the matching builtin.
pub mod core;

/// Builtin function implementations.
///
/// Thin wrappers that check argument kinds and call into the elimination
/// engine or the matrix constructors.
pub mod builtin;
