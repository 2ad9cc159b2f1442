// ============================================================================
// Numeric Module
// Pure scalar arithmetic over native floats
// ============================================================================
//
// This module provides:
// - float: the nine scalar operations over f64 (the core surface)
// - CalcError: error kinds for rejected operations
//
// Design principles:
// - Every operation is a pure function of its arguments
// - Only zero divisors are errors on the float path
// - Modulo is floor-style: the remainder takes the divisor's sign

mod errors;

pub mod float;

pub use errors::{CalcError, CalcResult};
pub use float::{absolute, add, divide, maximum, minimum, modulo, multiply, power, subtract};
