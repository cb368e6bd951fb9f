/// Binary operator evaluation logic.
///
/// Handles the arithmetic operators `+ - * / // % **` on integers and reals,
/// including the division-by-zero checks.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements the prefix signs `+` and `-`.
pub mod unary;

/// Core evaluation logic and context.
///
/// Contains the evaluation entry point, the dispatch over AST nodes, and the
/// whitelist checks for names and calls.
pub mod core;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the builtin functions.
pub mod utils;

/// Function evaluation.
///
/// Holds the capability registry, argument binding, and every builtin
/// function the evaluator may call.
pub mod function;
