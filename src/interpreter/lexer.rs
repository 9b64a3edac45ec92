use logos::Logos;

use crate::{error::ParseError, interpreter::value::scalar::Scalar, util::num::parse_decimal};

/// Represents a lexical token in the source input.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
#[logos(extras = LexerExtras)]
pub enum Token {
    /// Numeric literal tokens, such as `42` or `1.25`. Decimals are exact.
    #[regex(r"[0-9]+(\.[0-9]+)?", parse_number)]
    Number(Scalar),
    /// Identifier tokens; variable or function names such as `A` or `rref`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `// Comments.`
    #[regex(r"//[^\n\r]*", logos::skip, allow_greedy = true)]
    Comment,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `;`
    #[token(";")]
    Semicolon,

    /// Line breaks separate statements.
    #[token("\n", |lex| {
        lex.extras.line += 1;
        Token::NewLine
    })]
    NewLine,
    /// Spaces, tabs, feeds and carriage returns.
    #[regex(r"[ \t\f\r]+", logos::skip)]
    Ignored,
}

/// Additional information carried by the lexer during tokenization.
///
/// Tracks the current line number for error reporting and diagnostics.
/// Automatically increments as newlines are processed.
#[derive(Default)]
pub struct LexerExtras {
    /// The current line number in the source being tokenized.
    pub line: usize,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(Scalar)`: The exact value of the literal.
/// - `None`: If the slice is not a decimal literal.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<Scalar> {
    parse_decimal(lex.slice())
}

/// Splits source text into tokens, each paired with its 1-based line.
///
/// # Errors
/// `ParseError::UnexpectedToken` for unrecognized input.
///
/// # Example
/// ```
/// use ratmat::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("A = 1\nA").unwrap();
/// assert_eq!(tokens.last(), Some(&(Token::Identifier("A".to_string()), 2)));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer_with_extras(source, LexerExtras { line: 1 });

    while let Some(token) = lexer.next() {
        let line = lexer.extras.line;
        match token {
            Ok(Token::NewLine) => tokens.push((Token::NewLine, line - 1)),
            Ok(tok) => tokens.push((tok, line)),
            Err(()) => {
                return Err(ParseError::UnexpectedToken { token: lexer.slice().to_string(),
                                                         line });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(tok, _)| tok).collect()
    }

    #[test]
    fn numbers_are_exact_rationals() {
        assert_eq!(kinds("1.5 3"),
                   vec![Token::Number(Scalar::new(3, 2).unwrap()), Token::Number(Scalar::from(3))]);
    }

    #[test]
    fn matrix_literal_tokens() {
        assert_eq!(kinds("[[1,2]]"),
                   vec![Token::LBracket,
                        Token::LBracket,
                        Token::Number(Scalar::from(1)),
                        Token::Comma,
                        Token::Number(Scalar::from(2)),
                        Token::RBracket,
                        Token::RBracket]);
    }

    #[test]
    fn comments_and_whitespace_are_skipped() {
        assert_eq!(kinds("x // the answer\r\n"),
                   vec![Token::Identifier("x".to_string()), Token::NewLine]);
    }

    #[test]
    fn lines_are_counted() {
        let tokens = tokenize("a\n\nb").unwrap();
        assert_eq!(tokens,
                   vec![(Token::Identifier("a".to_string()), 1),
                        (Token::NewLine, 1),
                        (Token::NewLine, 2),
                        (Token::Identifier("b".to_string()), 3)]);
    }

    #[test]
    fn long_literals_are_exact() {
        let big = "99999999999999999999".parse::<num_bigint::BigInt>().unwrap();
        assert_eq!(kinds("99999999999999999999"), vec![Token::Number(Scalar::from(big))]);
    }

    #[test]
    fn unknown_characters_are_rejected() {
        assert!(matches!(tokenize("2 ^ 3"), Err(ParseError::UnexpectedToken { .. })));
    }
}
