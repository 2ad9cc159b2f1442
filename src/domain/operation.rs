// ============================================================================
// Operation Domain Model
// Named arithmetic operations and their dispatch
// ============================================================================

use crate::numeric::{self, CalcError, CalcResult};
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One of the nine scalar operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Power,
    Modulo,
    Absolute,
    Maximum,
    Minimum,
}

impl Operation {
    /// Every operation, in declaration order.
    pub const ALL: [Operation; 9] = [
        Operation::Add,
        Operation::Subtract,
        Operation::Multiply,
        Operation::Divide,
        Operation::Power,
        Operation::Modulo,
        Operation::Absolute,
        Operation::Maximum,
        Operation::Minimum,
    ];

    /// Number of operands the operation takes.
    #[inline]
    pub const fn arity(self) -> usize {
        match self {
            Operation::Absolute => 1,
            _ => 2,
        }
    }

    /// Lowercase name, e.g. `"modulo"`.
    pub const fn name(self) -> &'static str {
        match self {
            Operation::Add => "add",
            Operation::Subtract => "subtract",
            Operation::Multiply => "multiply",
            Operation::Divide => "divide",
            Operation::Power => "power",
            Operation::Modulo => "modulo",
            Operation::Absolute => "absolute",
            Operation::Maximum => "maximum",
            Operation::Minimum => "minimum",
        }
    }

    /// Short symbol, e.g. `"%"` for modulo.
    pub const fn symbol(self) -> &'static str {
        match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
            Operation::Power => "^",
            Operation::Modulo => "%",
            Operation::Absolute => "abs",
            Operation::Maximum => "max",
            Operation::Minimum => "min",
        }
    }

    /// Apply the operation to `f64` operands.
    ///
    /// # Errors
    /// - `ArityMismatch` if `operands.len() != self.arity()`
    /// - `DivisionByZero` / `ModuloByZero` from the underlying operation
    pub fn apply(self, operands: &[f64]) -> CalcResult<f64> {
        match (self, operands) {
            (Operation::Absolute, &[a]) => Ok(numeric::absolute(a)),
            (Operation::Add, &[a, b]) => Ok(numeric::add(a, b)),
            (Operation::Subtract, &[a, b]) => Ok(numeric::subtract(a, b)),
            (Operation::Multiply, &[a, b]) => Ok(numeric::multiply(a, b)),
            (Operation::Divide, &[a, b]) => numeric::divide(a, b),
            (Operation::Power, &[a, b]) => Ok(numeric::power(a, b)),
            (Operation::Modulo, &[a, b]) => numeric::modulo(a, b),
            (Operation::Maximum, &[a, b]) => Ok(numeric::maximum(a, b)),
            (Operation::Minimum, &[a, b]) => Ok(numeric::minimum(a, b)),
            _ => Err(CalcError::ArityMismatch),
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = CalcError;

    /// Parse from a name (case-insensitive) or a symbol.
    ///
    /// # Examples
    /// - "add" / "ADD" / "+" -> Add
    /// - "mod" / "%" -> Modulo
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Operation::ALL
            .into_iter()
            .find(|op| op.name().eq_ignore_ascii_case(s) || op.symbol() == s)
            .or_else(|| match s.to_ascii_lowercase().as_str() {
                "sub" => Some(Operation::Subtract),
                "mul" | "×" => Some(Operation::Multiply),
                "div" | "÷" => Some(Operation::Divide),
                "pow" | "**" => Some(Operation::Power),
                "mod" => Some(Operation::Modulo),
                _ => None,
            })
            .ok_or(CalcError::InvalidInput)
    }
}
