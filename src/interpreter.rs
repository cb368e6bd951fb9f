/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST against a capability registry and applies
/// the arithmetic operators and whitelisted functions. Anything the registry
/// does not name, and any expression shape outside the arithmetic grammar, is
/// rejected.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Holds the registry of constants and builtin functions.
/// - Reports runtime errors such as division by zero or domain violations.
pub mod evaluator;
/// The lexer module tokenizes expression text for further parsing.
///
/// The lexer reads the raw text and produces a stream of tokens, each
/// corresponding to a number, a name, an operator or a delimiter. This is the
/// first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with byte offsets.
/// - Handles integer, real and string literals, identifiers, and operators.
/// - Reports lexical errors for characters outside the grammar.
pub mod lexer;
/// Collapses near-integral reals into integers after evaluation.
pub mod normalize;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and constructs
/// an AST that represents the structure of the expression.
///
/// # Responsibilities
/// - Converts tokens into AST nodes, folding postfix `!` into factorial calls.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Bounds the size and nesting of accepted input.
pub mod parser;
/// Text-level rewriting of postfix factorials into `fact(...)` calls.
pub mod rewrite;
/// The value module defines the runtime numeric type.
pub mod value;
