/// Parsing errors.
///
/// Defines all error types that can occur while lexing, parsing or rewriting
/// an expression. Every parse error is a syntax error: unknown characters,
/// unbalanced parentheses, misplaced operators or an empty expression.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while evaluating an expression
/// against the capability registry: unknown names, operations outside the
/// whitelist, domain violations and division by zero.
pub mod runtime_error;
/// The unified error returned by the top-level entry points.
///
/// Wraps parse and runtime errors and classifies them into the closed set of
/// [`ErrorKind`]s callers are expected to handle.
pub mod eval_error;
/// Errors of the HTTP front end.
pub mod server_error;

pub use eval_error::{ErrorKind, EvalError};
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use server_error::ServerError;
