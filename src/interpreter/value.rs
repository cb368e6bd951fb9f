/// The numeric value type.
///
/// Defines [`core::Value`], the result of every evaluation: an exact integer
/// or a double precision real, with helpers for conversion between the two.
pub mod core;
