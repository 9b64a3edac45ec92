//! # ratmat
//!
//! ratmat is an exact-arithmetic linear-algebra evaluator written in Rust.
//! It parses and evaluates matrix and scalar expressions over
//! arbitrary-precision rationals, so row reductions, determinants, inverses and span bases come
//! out exact: an RREF pivot is `1`, never `0.999999`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::should_implement_trait)]

use crate::{
    ast::Statement,
    error::{Error, ParseError},
    interpreter::{
        evaluator::core::Environment, lexer::tokenize, parser::statement::parse_program,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` and `Statement` enums that represent the
/// syntactic structure of a program as a tree. The AST is built by the parser
/// (or by hand) and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to AST nodes for error reporting.
/// - Names the builtin functions and operators.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// arithmetic or evaluation, with the line they occurred on.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parser, engine, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Converts engine errors into runtime errors at the evaluator boundary.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, the elimination
/// engine and the value types. It exposes the building blocks used by
/// [`run_source`] and the REPL.
pub mod interpreter;
/// The interactive read-eval-print loop.
pub mod repl;
/// General utilities for safe numeric conversion.
///
/// Conversions between decimal literals, machine integers and exact scalars
/// that are lossless or report failure.
pub mod util;

/// Parses source text into a program.
///
/// # Errors
/// Returns the first lexing or parsing error.
///
/// # Examples
/// ```
/// use ratmat::parse;
///
/// assert_eq!(parse("A = [[1, 0], [0, 1]]\nrref(A)").unwrap().len(), 2);
/// assert!(parse("A = [[1, 0]").is_err());
/// ```
pub fn parse(source: &str) -> Result<Vec<Statement>, ParseError> {
    let tokens = tokenize(source)?;
    parse_program(&tokens)
}

/// Parses and executes `source` against an existing environment.
///
/// Statements run in order. Execution stops at the first failure; the
/// assignments that completed before it stay bound in `env`. On success the
/// value of the last statement that produced one is returned.
///
/// # Errors
/// Returns a parse error before anything runs, or the first runtime error.
///
/// # Examples
/// ```
/// use ratmat::{interpreter::evaluator::core::Environment, run_source};
///
/// let mut env = Environment::new();
/// run_source("A = [[1, 2], [3, 4]]", &mut env).unwrap();
///
/// let det = run_source("det(A)", &mut env).unwrap().unwrap();
/// assert_eq!(det.to_string(), "-2");
/// ```
pub fn run_source(source: &str, env: &mut Environment) -> Result<Option<Value>, Error> {
    let program = parse(source)?;

    let mut result = None;
    for statement in &program {
        if let Some(value) = env.execute(statement)? {
            result = Some(value);
        }
    }
    Ok(result)
}

/// Returns the final evaluation result after execution.
///
/// This function parses and executes all statements in the provided source
/// string in a fresh environment and returns the last value produced, if
/// any. With `auto_print` set the value is also printed to standard output.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use ratmat::get_result;
///
/// // The inverse is exact.
/// let source = "A = [[1, 2], [3, 4]]\ninverse(A)";
/// let value = get_result(source, false).unwrap().unwrap();
/// assert_eq!(value.to_string(), "[  -2    1 ]\n[ 3/2 -1/2 ]");
///
/// // Example with an intentional error (singular matrix).
/// let source = "inverse([[1, 2], [2, 4]])";
/// assert!(get_result(source, false).is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<Option<Value>, Error> {
    let mut env = Environment::new();
    let result = run_source(source, &mut env)?;

    if auto_print && let Some(v) = &result {
        println!("{v}");
    }

    Ok(result)
}
