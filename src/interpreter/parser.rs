/// Core parsing logic for expressions.
///
/// Contains the expression entry point and the `ParseResult` alias shared by
/// every parsing routine.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, variables, function calls, grouping and
/// matrix literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements precedence climbing for `+ -` and `* /`.
pub mod binary;

/// Block parsing.
///
/// Parses sequences of statements grouped in braces.
pub mod block;

/// Utility functions for the parser.
///
/// Provides helpers for comma-separated lists, statement separators and
/// identifiers.
pub mod utils;

/// Statement parsing.
///
/// Implements logic for parsing assignments, evaluations, blocks and whole
/// programs.
pub mod statement;
