use logos::Logos;
use num_bigint::BigInt;

use crate::error::ParseError;

/// Represents a lexical token in an expression.
///
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// String literals and `.` are recognized only so that the evaluator can
/// reject the shapes they build.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `5.`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+\.[0-9]*([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_float)]
    #[regex(r"[0-9]+[eE][+-]?[0-9]+", parse_float)]
    Real(f64),
    /// Integer literal tokens, such as `42`. Arbitrarily large.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(BigInt),
    /// Identifier tokens; constant or function names such as `pi` or `sqrt`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// String literals in single or double quotes.
    #[regex(r#"'[^'\n]*'"#, unquote)]
    #[regex(r#""[^"\n]*""#, unquote)]
    Str(String),
    /// `**`
    #[token("**")]
    DoubleStar,
    /// `//`
    #[token("//")]
    DoubleSlash,
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
    /// `%`
    #[token("%")]
    Percent,
    /// `!`
    #[token("!")]
    Bang,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `,`
    #[token(",")]
    Comma,
    /// `=`
    #[token("=")]
    Equals,
    /// `.`
    #[token(".")]
    Dot,
    /// Whitespace.
    #[regex(r"[ \t\n\r\f]+", logos::skip)]
    Ignored,
}

/// Splits an expression into `(token, byte offset)` pairs.
///
/// # Errors
/// Returns [`ParseError::UnexpectedCharacter`] for any text the grammar does
/// not know.
///
/// # Example
/// ```
/// use sandcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2 ** x!").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(2.into()), 0),
///                 (Token::DoubleStar, 2),
///                 (Token::Identifier("x".into()), 5),
///                 (Token::Bang, 6)]);
///
/// assert!(tokenize("5 $ 3").is_err());
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { text: lexer.slice().to_string(),
                                                             position });
            },
        }
    }

    Ok(tokens)
}

/// Parses a floating-point literal from the current token slice.
fn parse_float(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Parses an integer literal from the current token slice.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<BigInt> {
    BigInt::parse_bytes(lex.slice().as_bytes(), 10)
}

/// Strips the surrounding quotes from a string literal.
fn unquote(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}
