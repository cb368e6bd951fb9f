use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::{Token, tokenize},
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum number of tokens in one expression.
///
/// Parsing and evaluation recurse over the tree, so the size of the input
/// bounds the stack they use.
pub const MAX_TOKENS: usize = 1_000;
/// Maximum parenthesis nesting depth.
pub const MAX_NESTING_DEPTH: usize = 200;

/// Parses expression text into an AST.
///
/// The text is tokenized, parsed from the lowest precedence level, and must be
/// consumed completely. Postfix factorials are folded into `fact(...)` calls
/// while parsing.
///
/// # Errors
/// Returns a [`ParseError`] for empty input, unknown characters, unbalanced
/// parentheses, misplaced operators and trailing tokens.
///
/// # Example
/// ```
/// use sandcalc::{
///     ast::{BinaryOperator, Expr},
///     interpreter::parser::parse,
/// };
///
/// let expr = parse("1 + 2 * 3").unwrap();
/// assert!(matches!(expr,
///                  Expr::BinaryOp { op: BinaryOperator::Add,
///                                   .. }));
///
/// assert!(parse("   ").is_err());
/// assert!(parse("(1 + 2").is_err());
/// assert!(parse("1 2").is_err());
/// ```
#[tracing::instrument(level = "trace", skip_all)]
pub fn parse(source: &str) -> ParseResult<Expr> {
    let tokens = tokenize(source)?;
    if tokens.is_empty() {
        return Err(ParseError::EmptyExpression);
    }
    check_limits(&tokens)?;

    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter)?;

    if let Some((tok, position)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token:    format!("{tok:?}"),
                                                          position: *position, });
    }

    Ok(expr)
}

/// Parses a full expression.
///
/// This is the entry point for recursive descent. It begins at the lowest
/// precedence level, addition, and descends through the hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    parse_additive(tokens)
}

/// Rejects token streams that are too long or nested too deeply.
fn check_limits(tokens: &[(Token, usize)]) -> ParseResult<()> {
    if tokens.len() > MAX_TOKENS {
        return Err(ParseError::TooManyTokens { count: tokens.len(),
                                               limit: MAX_TOKENS, });
    }

    let mut depth = 0usize;
    for (token, position) in tokens {
        match token {
            Token::LParen => {
                depth += 1;
                if depth > MAX_NESTING_DEPTH {
                    return Err(ParseError::NestingTooDeep { position: *position,
                                                            limit:    MAX_NESTING_DEPTH, });
                }
            },
            Token::RParen => depth = depth.saturating_sub(1),
            _ => {},
        }
    }

    Ok(())
}
