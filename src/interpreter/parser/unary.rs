use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::core::lookup_function,
        lexer::Token,
        parser::{
            core::{ParseResult, parse_expression},
            utils::{parse_comma_separated, skip_newlines},
        },
        value::core::Value,
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (negation). Negation is
/// right-associative, so `--x` is parsed as `-( -x )`.
///
/// Line breaks before the operand are skipped, which lets an expression
/// continue on the next line after a trailing operator or `=`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a primary expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    skip_newlines(tokens);
    if let Some((Token::Minus, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        let expr = parse_unary(tokens)?;
        Ok(Expr::UnaryOp { op: UnaryOperator::Negate,
                           expr: Box::new(expr),
                           line })
    } else {
        parse_primary(tokens)
    }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar and include:
/// - numeric literals
/// - identifiers
/// - function calls
/// - parenthesized expressions
/// - matrix literals (`[[...], [...]]`)
///
/// Grammar (simplified):
/// ```text
///     primary := NUMBER
///              | identifier_or_function
///              | "(" expression ")"
///              | "[" row ("," row)* "]"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let peeked = tokens.peek()
                       .ok_or(ParseError::UnexpectedEndOfInput { line: 0 })?;

    match peeked {
        (Token::Number(n), line) => {
            let expr = Expr::Literal { value: Value::from(n.clone()),
                                       line:  *line, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens),
        (Token::LBracket, _) => parse_matrix_literal(tokens),
        (Token::Identifier(_), _) => parse_identifier_or_function(tokens),
        (tok, line) => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                         line:  *line, }),
    }
}

/// Parses a parenthesized expression.
///
/// Expected form `( expression )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// expression, and then requires a closing `)`.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
///
/// # Errors
/// - `ExpectedClosingParen` if another token follows the expression.
/// - `UnexpectedEndOfInput` if the input ends first.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = open(tokens);
    let expr = parse_expression(tokens)?;
    skip_newlines(tokens);
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        Some(_) => Err(ParseError::ExpectedClosingParen { line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}

/// Parses a matrix literal of the form `[[a, b], [c, d]]`.
///
/// The outer brackets hold one or more rows; each row is a bracketed,
/// comma-separated list of expressions. Row lengths and entry kinds are
/// checked at evaluation time.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at `[`
///
/// # Returns
/// An [`Expr::MatrixLiteral`] node containing the parsed rows.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the literal or a row is empty,
/// - an element is not itself a bracketed row,
/// - a closing `]` is missing.
fn parse_matrix_literal<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = open(tokens);
    let rows = parse_comma_separated(tokens,
                                     parse_matrix_row,
                                     &Token::RBracket,
                                     &ParseError::ExpectedClosingBracket { line },
                                     line)?;
    if rows.is_empty() {
        return Err(ParseError::UnexpectedToken { token: "empty matrix literal '[]'".to_string(),
                                                 line });
    }
    Ok(Expr::MatrixLiteral { rows, line })
}

/// Parses one bracketed row of a matrix literal.
fn parse_matrix_row<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Vec<Expr>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let line = match tokens.peek() {
        Some((Token::LBracket, line)) => *line,
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("Expected '[' to start a matrix row, found {tok:?}"),
                                                     line:  *line, });
        },
        None => return Err(ParseError::UnexpectedEndOfInput { line: 0 }),
    };
    tokens.next();

    let entries = parse_comma_separated(tokens,
                                        parse_expression,
                                        &Token::RBracket,
                                        &ParseError::ExpectedClosingBracket { line },
                                        line)?;
    if entries.is_empty() {
        return Err(ParseError::UnexpectedToken { token: "empty matrix row '[]'".to_string(),
                                                 line });
    }
    Ok(entries)
}

/// Parses an identifier or function call.
///
/// Supported forms:
///
/// - identifier
/// - identifier(arg1, arg2, ...)
///
/// If the identifier is followed by `(`, it must name a builtin function;
/// the arguments are parsed and an [`Expr::FunctionCall`] is returned.
/// Otherwise the identifier is a variable reference.
///
/// # Errors
/// Returns a `ParseError` if:
/// - a call names something that is not a builtin,
/// - function-call arguments fail to parse,
/// - the closing `)` is missing.
fn parse_identifier_or_function<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (name, line) = match tokens.next() {
        Some((Token::Identifier(n), line)) => (n.clone(), *line),
        Some((tok, line)) => {
            return Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                     line:  *line, });
        },
        None => {
            return Err(ParseError::UnexpectedEndOfInput { line: 0 });
        },
    };

    let Some((Token::LParen, _)) = tokens.peek() else {
        return Ok(Expr::Variable { name, line });
    };
    tokens.next();

    let function = lookup_function(&name).ok_or_else(|| ParseError::UnknownFunction { name,
                                                                                      line })?;
    let arguments = parse_comma_separated(tokens,
                                          parse_expression,
                                          &Token::RParen,
                                          &ParseError::ExpectedClosingParen { line },
                                          line)?;
    Ok(Expr::FunctionCall { function,
                            arguments,
                            line })
}

/// Consumes an opening delimiter and returns its line.
fn open<'a, I>(tokens: &mut Peekable<I>) -> usize
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next().map_or(0, |(_, line)| *line)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{ast::Function, interpreter::lexer::tokenize};

    fn parse(source: &str) -> ParseResult<Expr> {
        let tokens = tokenize(source).unwrap();
        parse_unary(&mut tokens.iter().peekable())
    }

    #[test]
    fn function_call_with_alias() {
        let Ok(Expr::FunctionCall { function, arguments, .. }) = parse("inv(A)") else {
            panic!("expected a call");
        };
        assert_eq!(function, Function::Inverse);
        assert_eq!(arguments.len(), 1);
    }

    #[test]
    fn unknown_function_is_a_parse_error() {
        assert_eq!(parse("solve(A)"),
                   Err(ParseError::UnknownFunction { name: "solve".to_string(),
                                                     line: 1, }));
    }

    #[test]
    fn matrix_literal_rows() {
        let Ok(Expr::MatrixLiteral { rows, .. }) = parse("[[1, 2], [3, -4]]") else {
            panic!("expected a matrix literal");
        };
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 2));
    }

    #[test]
    fn matrix_literal_may_span_lines() {
        assert!(matches!(parse("[[1, 2],\n [3, 4]]"), Ok(Expr::MatrixLiteral { .. })));
    }

    #[test]
    fn malformed_matrix_literals() {
        assert!(matches!(parse("[1, 2]"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("[]"), Err(ParseError::UnexpectedToken { .. })));
        assert!(matches!(parse("[[1, 2) ]"), Err(ParseError::ExpectedClosingBracket { .. })));
        assert!(matches!(parse("[[1, 2]"), Err(ParseError::UnexpectedEndOfInput { .. })));
    }

    #[test]
    fn unclosed_parenthesis() {
        assert!(matches!(parse("(1 + 2"), Err(ParseError::UnexpectedEndOfInput { line: 1 })));
        assert!(matches!(parse("(1 + 2]"), Err(ParseError::ExpectedClosingParen { line: 1 })));
    }

    #[test]
    fn nested_negation() {
        let Ok(Expr::UnaryOp { expr, .. }) = parse("--x") else {
            panic!("expected negation");
        };
        assert!(matches!(*expr, Expr::UnaryOp { .. }));
    }
}
