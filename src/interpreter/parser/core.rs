use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::binary::parse_additive},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses one expression, starting from `+`/`-`, the loosest-binding
/// operators.
///
/// Precedence from loose to tight:
/// ```text
///     expression     := additive
///     additive       := multiplicative (("+" | "-") multiplicative)*
///     multiplicative := unary (("*" | "/") unary)*
///     unary          := "-" unary | primary
/// ```
///
/// # Example
/// ```
/// use ratmat::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_expression},
/// };
///
/// let tokens = tokenize("1 + 2 * 3").unwrap();
/// let expr = parse_expression(&mut tokens.iter().peekable()).unwrap();
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// ```
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}
