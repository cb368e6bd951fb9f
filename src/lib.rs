//! # sandcalc
//!
//! sandcalc is a sandboxed arithmetic expression evaluator written in Rust.
//! It parses untrusted expression text and evaluates it against a fixed
//! whitelist of numeric operators, constants and functions. Nothing outside
//! that whitelist can be named, called or reached.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::{core::Context, function::core::Registry},
        normalize::normalize,
        parser::parse,
        value::core::Value,
    },
};

/// The JSON request/response boundary.
///
/// Maps a request body to a status code and a response document, turning
/// every failure into one of a few fixed messages.
pub mod api;
/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an expression as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the expression node types and operator kinds.
/// - Attaches byte offsets to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing or
/// evaluating an expression, and classifies them into a closed set of kinds.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches byte offsets and detailed messages for context.
/// - Provides the fixed messages that are safe to show to untrusted callers.
pub mod error;
/// Orchestrates the evaluation of an expression.
///
/// This module ties together lexing, parsing, evaluation, normalization and
/// value representations.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Holds the capability registry that bounds what an expression may do.
pub mod interpreter;
/// The HTTP front end serving the calculator endpoint.
pub mod server;
/// General utilities for safe numeric conversion.
///
/// This module provides reusable conversion routines used throughout the
/// evaluator: between exact integers and floating-point numbers, and
/// logarithms of integers too large for `f64`.
///
/// # Responsibilities
/// - Convert between `BigInt` and `f64` without silent overflow.
/// - Provide general numeric helpers used in multiple modules.
pub mod util;

/// Evaluates an expression against the standard registry.
///
/// This is the main entry point of the crate. The text is parsed, with postfix
/// factorials folded into calls, evaluated against [`Registry::global`], and
/// the result is normalized so that near-integral reals come back as
/// integers. Evaluation holds no shared mutable state and may run on any
/// number of threads at once.
///
/// # Errors
/// Returns an [`EvalError`] whose [`kind`](EvalError::kind) tells syntax
/// errors, unknown names, disallowed operations, domain errors and division
/// by zero apart.
///
/// # Examples
/// ```
/// use sandcalc::{error::ErrorKind, evaluate_expression, interpreter::value::core::Value};
///
/// assert_eq!(evaluate_expression("2 + 3 * 4").unwrap(), Value::from(14));
/// assert_eq!(evaluate_expression("5!").unwrap(), Value::from(120));
/// assert_eq!(evaluate_expression("sqrt(16)").unwrap(), Value::from(4));
/// assert_eq!(evaluate_expression("1 / 4").unwrap(), Value::Real(0.25));
///
/// let err = evaluate_expression("__import__('os')").unwrap_err();
/// assert_eq!(err.kind(), ErrorKind::UnknownName);
/// ```
pub fn evaluate_expression(source: &str) -> Result<Value, EvalError> {
    evaluate_with(source, Registry::global())
}

/// Evaluates an expression against a caller supplied registry.
///
/// Behaves like [`evaluate_expression`], but only the names bound in
/// `registry` are reachable.
///
/// # Errors
/// See [`evaluate_expression`].
///
/// # Examples
/// ```
/// use sandcalc::{
///     error::ErrorKind,
///     evaluate_with,
///     interpreter::{evaluator::function::core::Registry, value::core::Value},
/// };
///
/// let registry = Registry::new().with_constant("tau", 2.0 * std::f64::consts::PI)
///                               .with_function("sqrt", Registry::builtin("sqrt").unwrap());
///
/// assert_eq!(evaluate_with("sqrt(81)", &registry).unwrap(), Value::from(9));
/// assert_eq!(evaluate_with("pi", &registry).unwrap_err().kind(), ErrorKind::UnknownName);
/// ```
#[tracing::instrument(level = "debug", skip(registry))]
pub fn evaluate_with(source: &str, registry: &Registry) -> Result<Value, EvalError> {
    let expr = parse(source).inspect_err(|e| tracing::debug!(error = %e, "parse failed"))?;
    let value = Context::new(registry).eval(&expr)
                                      .map_err(EvalError::from)
                                      .inspect_err(|e| {
                                          tracing::debug!(kind = %e.kind(), error = %e, "evaluation failed");
                                      })?;

    Ok(normalize(value))
}
