/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between exact integers
/// and floating-point numbers without silent overflow. Use these helpers
/// whenever an integer meets a real, or a real has to become an integer.
///
/// All functions return a `Result`, which is `Ok` if the conversion is valid,
/// or a domain error if the value is out of range or not finite.
pub mod num;
