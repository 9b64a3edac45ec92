use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            statement::{expect_statement_end, parse_statement},
            utils::skip_separators,
        },
    },
};

/// Parses a block statement delimited by braces.
///
/// A block consists of zero or more statements separated by newlines or
/// `;`. Parsing continues until a closing `}` token is encountered. Leading
/// and trailing separators inside the block are ignored.
///
/// Grammar: `block := "{" statement* "}"`
///
/// # Parameters
/// - `tokens`: Token stream positioned after the opening brace.
/// - `line`: Line number of the opening brace.
///
/// # Returns
/// A `Statement::Block` containing all parsed statements.
///
/// # Errors
/// `UnexpectedEndOfInput` if the closing brace never comes; this is what lets
/// the REPL keep reading an unfinished block.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Statement>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut statements = Vec::new();

    loop {
        skip_separators(tokens);

        match tokens.peek() {
            Some((Token::RBrace, _)) => {
                tokens.next();
                break;
            },
            Some(_) => {},
            None => return Err(ParseError::UnexpectedEndOfInput { line }),
        }

        statements.push(parse_statement(tokens)?);
        expect_statement_end(tokens, true)?;
    }

    Ok(Statement::Block { statements, line })
}
