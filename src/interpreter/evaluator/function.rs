/// Built-in function implementations.
///
/// Contains `abs`, the rounding functions and the trigonometric functions.
pub mod builtin;
/// The `fact` (factorial) function implementation.
///
/// Computes exact factorials of small non-negative integers. The parser
/// rewrites every postfix `!` into a call of this function.
pub mod fact;
/// Logarithm function implementations.
///
/// Supports the natural logarithm and logarithms to an arbitrary base,
/// including integers too large for `f64`.
pub mod log;
/// The `sqrt` (square root) function implementation.
pub mod sqrt;

/// The capability registry and argument binding.
pub mod core;
