use std::iter::Peekable;

use crate::{
    ast::{Expr, Keyword},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::core::{ParseResult, parse_expression},
    },
};

/// Parses a call's argument list up to and including the closing `)`.
///
/// The opening parenthesis has already been consumed. Arguments are separated
/// by commas and a trailing comma is accepted. An argument of the form
/// `name=expr` is a keyword argument; keywords must come after all positional
/// arguments and may not repeat.
///
/// An immediately encountered `)` produces an empty list.
///
/// Grammar:
/// ```text
///     arguments := [ argument ("," argument)* [","] ] ")"
///     argument  := IDENT "=" expression | expression
/// ```
///
/// # Returns
/// The positional arguments and the keyword arguments, both in source order.
///
/// # Errors
/// Returns a `ParseError` if:
/// - an argument fails to parse,
/// - a positional argument follows a keyword argument,
/// - a keyword is repeated,
/// - the stream ends before the closing `)`.
pub(in crate::interpreter::parser) fn parse_arguments<'a, I>(
    tokens: &mut Peekable<I>)
    -> ParseResult<(Vec<Expr>, Vec<Keyword>)>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut arguments = Vec::new();
    let mut keywords: Vec<Keyword> = Vec::new();

    loop {
        if let Some((Token::RParen, _)) = tokens.peek() {
            tokens.next();
            break;
        }

        let position = match tokens.peek() {
            Some((_, position)) => *position,
            None => return Err(ParseError::UnexpectedEndOfInput),
        };

        if let Some(name) = peek_keyword(tokens) {
            if keywords.iter().any(|k| k.name == name) {
                return Err(ParseError::RepeatedKeyword { name, position });
            }
            tokens.next();
            tokens.next();
            let value = parse_expression(tokens)?;
            keywords.push(Keyword { name, value });
        } else {
            if !keywords.is_empty() {
                return Err(ParseError::PositionalAfterKeyword { position });
            }
            arguments.push(parse_expression(tokens)?);
        }

        match tokens.next() {
            Some((Token::Comma, _)) => {},
            Some((Token::RParen, _)) => break,
            Some((tok, position)) => {
                return Err(ParseError::UnexpectedToken { token:    format!("Expected ',' or ')', found {tok:?}"),
                                                         position: *position, });
            },
            None => return Err(ParseError::UnexpectedEndOfInput),
        }
    }

    Ok((arguments, keywords))
}

/// Looks two tokens ahead for `IDENT "="` without consuming anything.
///
/// # Returns
/// The keyword name when the next argument is a keyword argument.
fn peek_keyword<'a, I>(tokens: &Peekable<I>) -> Option<String>
    where I: Iterator<Item = &'a (Token, usize)> + Clone
{
    let mut ahead = tokens.clone();
    match (ahead.next(), ahead.next()) {
        (Some((Token::Identifier(name), _)), Some((Token::Equals, _))) => Some(name.clone()),
        _ => None,
    }
}
