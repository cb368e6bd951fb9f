/// Core parsing entry points.
///
/// Defines the parse result type, the public [`core::parse`] function and the
/// top of the precedence hierarchy.
pub mod core;

/// Unary, postfix and primary expression parsing.
///
/// Handles prefix signs, calls, member access, postfix factorials, literals,
/// identifiers and parenthesized groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive, multiplicative and power precedence levels.
pub mod binary;

/// Parsing utilities.
///
/// Argument lists and other helpers shared between precedence levels.
pub mod utils;

pub use self::core::{ParseResult, parse};
