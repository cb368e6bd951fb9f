use std::iter::Peekable;

use crate::{
    ast::{Expr, Literal, UnaryOperator},
    error::ParseError,
    interpreter::{
        evaluator::function::fact::FACTORIAL,
        lexer::Token,
        parser::{
            binary::parse_power,
            core::{ParseResult, parse_expression},
            utils::parse_arguments,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix sign operators `+` and `-`. They are
/// right-associative, so `-+-x` is parsed as `-(+(-x))`, and bind looser than
/// `**` but tighter than `*`.
///
/// Grammar:
/// ```text
///     unary := ("+" | "-") unary
///            | power
/// ```
/// # Parameters
/// - `tokens`: Token iterator with lookahead.
///
/// # Returns
/// An [`Expr::UnaryOp`] or a power-level expression.
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let op = match tokens.peek() {
        Some((Token::Minus, position)) => Some((UnaryOperator::Minus, *position)),
        Some((Token::Plus, position)) => Some((UnaryOperator::Plus, *position)),
        _ => None,
    };

    match op {
        Some((op, position)) => {
            tokens.next();
            let expr = parse_unary(tokens)?;
            Ok(Expr::UnaryOp { op,
                               expr: Box::new(expr),
                               position })
        },
        None => parse_power(tokens),
    }
}

/// Parses a primary expression followed by any number of postfix operators.
///
/// Three postfix forms are recognized and may be chained:
///
/// 1. **Calls** `expr(arg, ..., name=value, ...)`
/// 2. **Member access** `expr.name`, kept only so it can be rejected later
/// 3. **Factorials** `expr!`, folded into a `fact(expr)` call
///
/// Each `!` wraps everything parsed so far, so `3!!` becomes
/// `fact(fact(3))` and `(2+3)!` becomes `fact(2+3)`.
///
/// Grammar:
/// ```text
///     postfix := primary ( "(" arguments ")" | "." IDENT | "!" )*
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at a primary expression.
///
/// # Returns
/// The primary expression with all postfix operators folded in.
pub(crate) fn parse_postfix_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut node = parse_primary(tokens)?;

    loop {
        match tokens.peek() {
            Some((Token::LParen, position)) => {
                tokens.next();
                let (arguments, keywords) = parse_arguments(tokens)?;
                node = Expr::Call { callee: Box::new(node),
                                    arguments,
                                    keywords,
                                    position: *position };
            },
            Some((Token::Dot, position)) => {
                tokens.next();
                let name = match tokens.next() {
                    Some((Token::Identifier(name), _)) => name.clone(),
                    Some((tok, position)) => {
                        return Err(ParseError::UnexpectedToken { token:    format!("Expected attribute name, found {tok:?}"),
                                                                 position: *position, });
                    },
                    None => return Err(ParseError::UnexpectedEndOfInput),
                };
                node = Expr::Attribute { value: Box::new(node),
                                         name,
                                         position: *position };
            },
            Some((Token::Bang, position)) => {
                tokens.next();
                node = factorial_call(node, *position);
            },
            _ => break,
        }
    }

    Ok(node)
}

/// Builds the synthetic `fact(operand)` call a postfix `!` stands for.
fn factorial_call(operand: Expr, position: usize) -> Expr {
    Expr::Call { callee: Box::new(Expr::Identifier { name: FACTORIAL.to_string(),
                                                     position }),
                 arguments: vec![operand],
                 keywords: Vec::new(),
                 position }
}

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the expression grammar:
/// - numeric literals
/// - identifiers
/// - string literals
/// - parenthesized expressions
///
/// A `!` here has nothing to its left to apply to and is reported as an
/// invalid factorial position.
///
/// Grammar:
/// ```text
///     primary := NUMBER | IDENT | STRING | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let (token, position) = tokens.next().ok_or(ParseError::UnexpectedEndOfInput)?;
    let position = *position;

    match token {
        Token::Integer(n) => Ok(Expr::Number { value: Literal::Integer(n.clone()),
                                               position }),
        Token::Real(r) => Ok(Expr::Number { value: Literal::Real(*r),
                                            position }),
        Token::Identifier(name) => Ok(Expr::Identifier { name: name.clone(),
                                                         position }),
        Token::Str(value) => Ok(Expr::Str { value: value.clone(),
                                            position }),
        Token::LParen => parse_grouping(tokens, position),
        Token::Bang => Err(ParseError::InvalidFactorialPosition { position }),
        tok => Err(ParseError::UnexpectedToken { token: format!("{tok:?}"),
                                                 position }),
    }
}

/// Parses the rest of a parenthesized expression.
///
/// Expected form `( expression )`; the opening parenthesis has already been
/// consumed. Failure to find the closing parenthesis yields
/// `ParseError::ExpectedClosingParen` pointing at the opening one.
///
/// Grammar `grouping := "(" expression ")"`
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, open: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let expr = parse_expression(tokens)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { position: open }),
    }
}
