use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{
            core::ParseResult,
            unary::{parse_postfix_expression, parse_unary},
        },
    },
};

/// Parses addition and subtraction expressions.
///
/// Handles left-associative binary operators: `+` and `-`.
///
/// The rule is: `additive := multiplicative (("+" | "-") multiplicative)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
///
/// # Returns
/// An `Expr::BinaryOp` tree representing the parsed expression.
pub fn parse_additive<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_multiplicative(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            tokens.next();
            let right = parse_multiplicative(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication-level expressions.
///
/// Handles left-associative operators of equal precedence:
/// `*`, `/`, `//` and `%`.
///
/// The rule is: `multiplicative := unary (("*" | "/" | "//" | "%") unary)*`
///
/// # Parameters
/// - `tokens`: Token stream with offsets.
///
/// # Returns
/// A binary expression tree combining unary-level nodes.
pub fn parse_multiplicative<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut left = parse_unary(tokens)?;
    loop {
        if let Some((token, position)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op,
                       BinaryOperator::Mul
                       | BinaryOperator::Div
                       | BinaryOperator::FloorDiv
                       | BinaryOperator::Mod)
        {
            tokens.next();
            let right = parse_unary(tokens)?;
            left = Expr::BinaryOp { left: Box::new(left),
                                    op,
                                    right: Box::new(right),
                                    position: *position };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses exponentiation.
///
/// The base is a postfix expression; the exponent is a full unary expression,
/// which makes `**` right-associative (`a ** b ** c` is `a ** (b ** c)`) and
/// lets it accept a signed exponent (`2 ** -1`). Because the base does not
/// include a sign, `-2 ** 2` parses as `-(2 ** 2)`.
///
/// The rule is: `power := postfix ("**" unary)?`
///
/// # Parameters
/// - `tokens`: Token stream.
///
/// # Returns
/// An exponentiation expression tree.
pub fn parse_power<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let base = parse_postfix_expression(tokens)?;
    if let Some((Token::DoubleStar, position)) = tokens.peek() {
        tokens.next();
        let exponent = parse_unary(tokens)?;
        return Ok(Expr::BinaryOp { left:     Box::new(base),
                                   op:       BinaryOperator::Pow,
                                   right:    Box::new(exponent),
                                   position: *position, });
    }
    Ok(base)
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of
/// `+ - * / // % **`, and `None` for all other tokens.
///
/// # Example
/// ```
/// use sandcalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::binary::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::DoubleSlash),
///            Some(BinaryOperator::FloorDiv));
/// assert_eq!(token_to_binary_operator(&Token::Bang), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        Token::DoubleSlash => Some(BinaryOperator::FloorDiv),
        Token::Percent => Some(BinaryOperator::Mod),
        Token::DoubleStar => Some(BinaryOperator::Pow),
        _ => None,
    }
}
