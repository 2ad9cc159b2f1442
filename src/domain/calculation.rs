// ============================================================================
// Calculation Domain Model
// ============================================================================

use super::operation::Operation;
use crate::numeric::{CalcError, CalcResult};
use arrayvec::ArrayVec;
use chrono::{DateTime, Utc};
use uuid::Uuid;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Operands of a single calculation (at most two).
pub type Operands = ArrayVec<f64, 2>;

// ============================================================================
// Value Objects
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculationId(Uuid);

impl CalculationId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for CalculationId {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Calculation
// ============================================================================

/// A request to apply one operation to its operands.
///
/// The operand count always matches `operation.arity()`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Calculation {
    pub id: CalculationId,
    pub operation: Operation,
    operands: Operands,
    pub created_at: DateTime<Utc>,
}

impl Calculation {
    /// Create a calculation, checking the operand count.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if `operands.len() != operation.arity()`.
    pub fn new(operation: Operation, operands: &[f64]) -> CalcResult<Self> {
        if operands.len() != operation.arity() {
            return Err(CalcError::ArityMismatch);
        }

        let operands: Operands = operands
            .try_into()
            .map_err(|_| CalcError::ArityMismatch)?;

        Ok(Self {
            id: CalculationId::new(),
            operation,
            operands,
            created_at: Utc::now(),
        })
    }

    /// Calculation for a one-operand operation.
    pub fn unary(operation: Operation, value: f64) -> CalcResult<Self> {
        Self::new(operation, &[value])
    }

    /// Calculation for a two-operand operation.
    pub fn binary(operation: Operation, a: f64, b: f64) -> CalcResult<Self> {
        Self::new(operation, &[a, b])
    }

    pub fn operands(&self) -> &[f64] {
        &self.operands
    }

    /// True if any operand is NaN or infinite.
    pub fn has_non_finite_operand(&self) -> bool {
        self.operands.iter().any(|v| !v.is_finite())
    }
}
