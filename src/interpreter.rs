/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST, evaluates expressions and executes
/// statements, dispatches operators to scalar and matrix arithmetic and
/// functions to the elimination engine, and manages the session's variables.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Binds variables in the session `Environment`.
/// - Reports runtime errors such as division by zero or singular matrices.
pub mod evaluator;
/// The elimination engine.
///
/// Echelon forms, determinants, inverses, rank and bases, all computed from a
/// single pivoted elimination routine working on exact rationals.
pub mod elimination;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces a stream of tokens such
/// as numbers, identifiers, operators and delimiters, each tagged with its
/// line. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Turns decimal literals into exact rationals.
/// - Reports lexical errors for invalid or oversized input.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// the statements and expressions of a program.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (expressions, statements).
/// - Resolves builtin function names and rejects unknown ones.
/// - Validates grammar, reporting errors with line info.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Exact rational scalars, dense matrices of them, and the `Value` union the
/// evaluator passes around.
pub mod value;
