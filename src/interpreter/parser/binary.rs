use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, unary::parse_unary},
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with line information.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens,
                     &[BinaryOperator::Add, BinaryOperator::Sub],
                     parse_multiplicative)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators `*` and `/`. Whether `*` is a scalar
/// product, a scaling or a matrix product is decided at evaluation time.
///
/// The rule is: `multiplicative := unary (("*" | "/") unary)*`
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_left_assoc(tokens, &[BinaryOperator::Mul, BinaryOperator::Div], parse_unary)
}

/// Folds `operand (op operand)*` into a left-leaning `BinaryOp` tree for the
/// operators in `accepted`.
fn parse_left_assoc<'a, I>(tokens: &mut Peekable<I>,
                           accepted: &[BinaryOperator],
                           parse_operand: fn(&mut Peekable<I>) -> ParseResult<Expr>)
                           -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_operand(tokens)?;
    while let Some((token, line)) = tokens.peek()
          && let Some(op) = token_to_binary_operator(token)
          && accepted.contains(&op)
    {
        let line = *line;
        tokens.next();
        let right = parse_operand(tokens)?;
        left = Expr::BinaryOp { left: Box::new(left),
                                op,
                                right: Box::new(right),
                                line };
    }
    Ok(left)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` for `+`, `-`, `*` and `/`, and `None` for
/// all other tokens.
///
/// # Example
/// ```
/// use ratmat::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Star), Some(BinaryOperator::Mul));
/// assert_eq!(token_to_binary_operator(&Token::Comma), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn parse(source: &str) -> Expr {
        let tokens = tokenize(source).unwrap();
        parse_additive(&mut tokens.iter().peekable()).unwrap()
    }

    fn op_of(expr: &Expr) -> Option<BinaryOperator> {
        match expr {
            Expr::BinaryOp { op, .. } => Some(*op),
            _ => None,
        }
    }

    #[test]
    fn multiplication_binds_tighter() {
        let expr = parse("1 + 2 * 3");
        assert_eq!(op_of(&expr), Some(BinaryOperator::Add));
        let Expr::BinaryOp { right, .. } = expr else { unreachable!() };
        assert_eq!(op_of(&right), Some(BinaryOperator::Mul));
    }

    #[test]
    fn subtraction_is_left_associative() {
        let expr = parse("8 - 4 - 2");
        let Expr::BinaryOp { left, op, .. } = expr else { unreachable!() };
        assert_eq!(op, BinaryOperator::Sub);
        assert_eq!(op_of(&left), Some(BinaryOperator::Sub));
    }
}
