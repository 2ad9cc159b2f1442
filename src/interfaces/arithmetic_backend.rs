// ============================================================================
// Arithmetic Backend Interface
// Defines the contract for pluggable numeric backends
// ============================================================================

use crate::domain::Operation;
use crate::numeric::CalcResult;

/// Strategy pattern interface for numeric backends
/// Implementations: Native (f64)
pub trait ArithmeticBackend: Send + Sync {
    /// Apply an operation to its operands
    ///
    /// # Arguments
    /// * `operation` - The operation to evaluate
    /// * `operands` - Exactly `operation.arity()` values
    ///
    /// # Returns
    /// The result, or the error the operation signals
    fn apply(&self, operation: Operation, operands: &[f64]) -> CalcResult<f64>;

    /// Get the backend name for logging/metrics
    fn name(&self) -> &str;
}
