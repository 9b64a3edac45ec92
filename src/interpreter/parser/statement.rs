use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::function::core::is_reserved_identifier,
        lexer::Token,
        parser::{
            block::parse_block,
            core::{ParseResult, parse_expression},
            utils::{current_line, skip_separators},
        },
    },
};

/// Parses a single statement.
///
/// A statement may be one of:
/// - a block, `{ ... }`,
/// - an assignment, `<identifier> = <expression>`,
/// - an expression to evaluate.
///
/// Parsing is attempted in that order; the first matching construct is
/// returned. The statement's source line is taken from its first token.
///
/// # Parameters
/// - `tokens`: Token iterator containing `(Token, line)` pairs.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    if let Some((Token::LBrace, line)) = tokens.peek() {
        let line = *line;
        tokens.next();
        return parse_block(tokens, line);
    }
    if let Some(statement) = parse_assignment(tokens)? {
        return Ok(statement);
    }

    let line = current_line(tokens, 0);
    let expr = parse_expression(tokens)?;

    Ok(Statement::Evaluate { expr, line })
}

/// Parses an assignment statement of the form `<identifier> = <expression>`.
///
/// The function performs a limited lookahead: if the next token is an
/// identifier and the following token is `=`, an assignment is parsed.
/// Function names are reserved and cannot be assigned to.
///
/// If no assignment pattern matches, the function returns `Ok(None)` and does
/// not consume tokens.
///
/// # Errors
/// Returns a `ParseError` if:
/// - the identifier is reserved,
/// - the assigned expression fails to parse.
fn parse_assignment<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Option<Statement>>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut lookahead = tokens.clone();
    let (Some((Token::Identifier(name), line)), Some((Token::Equals, _))) =
        (lookahead.next(), lookahead.next())
    else {
        return Ok(None);
    };

    if is_reserved_identifier(name) {
        return Err(ParseError::IdentifierReserved { name: name.clone(),
                                                    line: *line, });
    }
    tokens.next();
    tokens.next();

    let value = parse_expression(tokens)?;
    Ok(Some(Statement::Assignment { name: name.clone(),
                                    value,
                                    line: *line }))
}

/// Requires that a statement is followed by a separator, the end of input,
/// or (inside a block) the closing brace.
///
/// Nothing is consumed; the caller skips the separators.
///
/// # Errors
/// - `UnexpectedTrailingTokens` if anything else follows.
/// - `UnexpectedEndOfInput` if a block's input ends before its `}`.
pub(in crate::interpreter::parser) fn expect_statement_end<'a, I>(tokens: &mut Peekable<I>,
                                                                  in_block: bool)
                                                                  -> ParseResult<()>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.peek() {
        None if in_block => Err(ParseError::UnexpectedEndOfInput { line: 0 }),
        None | Some((Token::NewLine | Token::Semicolon, _)) => Ok(()),
        Some((Token::RBrace, _)) if in_block => Ok(()),
        Some((tok, line)) => Err(ParseError::UnexpectedTrailingTokens { token: format!("{tok:?}"),
                                                                        line:  *line, }),
    }
}

/// Parses a whole program: statements separated by newlines or `;`.
///
/// Blank lines, comments and repeated separators are ignored. An error that
/// was raised at the very end of the input is attributed to the last line
/// that held a token.
///
/// # Errors
/// The first `ParseError` encountered; parsing does not recover.
///
/// # Example
/// ```
/// use ratmat::interpreter::{lexer::tokenize, parser::statement::parse_program};
///
/// let tokens = tokenize("A = [[1, 2], [3, 4]]; det(A)\n").unwrap();
/// let program = parse_program(&tokens).unwrap();
/// assert_eq!(program.len(), 2);
/// ```
pub fn parse_program(tokens: &[(Token, usize)]) -> ParseResult<Vec<Statement>> {
    let last_line = tokens.last().map_or(1, |(_, line)| *line);
    let mut iter = tokens.iter().peekable();
    let mut statements = Vec::new();

    loop {
        skip_separators(&mut iter);
        if iter.peek().is_none() {
            return Ok(statements);
        }
        let statement = parse_statement(&mut iter).map_err(|e| match e {
                                                      ParseError::UnexpectedEndOfInput { .. } => {
                                                          ParseError::UnexpectedEndOfInput { line: last_line }
                                                      },
                                                      e => e,
                                                  })?;
        statements.push(statement);
        expect_statement_end(&mut iter, false)?;
    }
}
