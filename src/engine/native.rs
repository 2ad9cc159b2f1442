// ============================================================================
// Native Backend
// Evaluates operations with IEEE-754 doubles
// ============================================================================

use crate::domain::Operation;
use crate::interfaces::ArithmeticBackend;
use crate::numeric::CalcResult;

/// Native `f64` backend.
///
/// Delegates straight to `numeric::float`; the only errors are zero
/// divisors and operand-count mismatches.
#[derive(Debug, Clone, Copy, Default)]
pub struct NativeBackend;

impl NativeBackend {
    /// Create a new native backend.
    pub fn new() -> Self {
        Self
    }
}

impl ArithmeticBackend for NativeBackend {
    #[inline]
    fn apply(&self, operation: Operation, operands: &[f64]) -> CalcResult<f64> {
        operation.apply(operands)
    }

    fn name(&self) -> &str {
        "Native"
    }
}
