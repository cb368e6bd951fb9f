/// Dispatch of binary operators and the additive/multiplicative operators.
pub mod core;

/// True division, floor division and modulo.
///
/// Floor division rounds toward negative infinity and the remainder takes the
/// sign of the divisor, for integers and reals alike.
pub mod division;

/// Exponentiation.
pub mod power;
