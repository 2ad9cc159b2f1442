// ============================================================================
// Calculation Errors
// Error kinds signaled by arithmetic operations and their dispatch layers
// ============================================================================

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors that can occur while evaluating an arithmetic operation.
///
/// The float operations only ever produce `DivisionByZero` and
/// `ModuloByZero`. The remaining kinds come from the calculator layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcError {
    /// Divisor of a division was zero
    DivisionByZero,
    /// Divisor of a modulo was zero
    ModuloByZero,
    /// Operation name or operand value was rejected
    InvalidInput,
    /// Wrong number of operands for the operation
    ArityMismatch,
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::DivisionByZero => write!(f, "division by zero"),
            CalcError::ModuloByZero => write!(f, "modulo by zero"),
            CalcError::InvalidInput => write!(f, "invalid input: operation or operand rejected"),
            CalcError::ArityMismatch => {
                write!(f, "arity mismatch: wrong number of operands for operation")
            },
        }
    }
}

impl std::error::Error for CalcError {}

/// Result type alias for arithmetic operations
pub type CalcResult<T> = Result<T, CalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(CalcError::DivisionByZero.to_string(), "division by zero");
        assert_eq!(CalcError::ModuloByZero.to_string(), "modulo by zero");
        assert_eq!(
            CalcError::ArityMismatch.to_string(),
            "arity mismatch: wrong number of operands for operation"
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(CalcError::DivisionByZero, CalcError::DivisionByZero);
        assert_ne!(CalcError::DivisionByZero, CalcError::ModuloByZero);
    }

    #[test]
    fn test_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(CalcError::ModuloByZero);
        assert_eq!(err.to_string(), "modulo by zero");
    }
}
