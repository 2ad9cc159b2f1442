// ============================================================================
// Calculator Library
// Pure scalar arithmetic with a pluggable numeric backend
// ============================================================================

//! # Calculator
//!
//! Nine pure scalar operations (add, subtract, multiply, divide, power,
//! modulo, absolute, maximum, minimum) over `f64`, with an optional
//! calculator layer on top.
//!
//! ## Features
//!
//! - **Pure functions** in [`numeric`]: no state, safe to call from any thread
//! - **Floor-style modulo**: the remainder takes the divisor's sign
//! - **Strict mode** that rejects NaN and infinite operands
//! - **Calculator** with pluggable backends and event handlers
//!
//! ## Example
//!
//! ```rust
//! use calculator::numeric::{self, CalcError};
//! use calculator::prelude::*;
//! use std::sync::Arc;
//!
//! assert_eq!(numeric::add(2, 3), 5.0);
//! assert_eq!(numeric::modulo(-10, 3), Ok(2.0));
//! assert_eq!(numeric::divide(10, 0), Err(CalcError::DivisionByZero));
//!
//! let calc = CalculatorBuilder::new("example")
//!     .reject_non_finite()
//!     .build(Arc::new(NoOpEventHandler))
//!     .unwrap();
//!
//! let calculation = Calculation::binary(Operation::Divide, 7.0, 2.0).unwrap();
//! assert_eq!(calc.evaluate(&calculation), Ok(3.5));
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
#[cfg(feature = "logging")]
pub mod logging;
pub mod numeric;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{Calculation, CalculationId, CalculatorConfig, Operands, Operation};
    pub use crate::engine::{create_from_config, Calculator, CalculatorBuilder, NativeBackend};
    pub use crate::interfaces::{
        ArithmeticBackend, CalcEvent, EventBatch, EventHandler, LoggingEventHandler,
        NoOpEventHandler, RecordingEventHandler,
    };
    pub use crate::numeric::{CalcError, CalcResult};
}

#[cfg(test)]
mod integration_tests {
    use super::prelude::*;
    use std::sync::Arc;

    #[test]
    fn test_end_to_end_calculation() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let calc = create_from_config(
            CalculatorConfig::lenient("e2e".to_string()),
            recorder.clone(),
        )
        .unwrap();

        let cases = [
            (Operation::Add, vec![2.0, 3.0], Ok(5.0)),
            (Operation::Subtract, vec![3.0, 7.0], Ok(-4.0)),
            (Operation::Multiply, vec![-3.0, 7.0], Ok(-21.0)),
            (Operation::Divide, vec![7.0, 2.0], Ok(3.5)),
            (Operation::Modulo, vec![-10.0, 3.0], Ok(2.0)),
            (Operation::Maximum, vec![3.5, 3.5], Ok(3.5)),
            (Operation::Minimum, vec![3.5, 3.5], Ok(3.5)),
            (Operation::Absolute, vec![-5.0], Ok(5.0)),
            (Operation::Divide, vec![10.0, 0.0], Err(CalcError::DivisionByZero)),
            (Operation::Modulo, vec![10.0, 0.0], Err(CalcError::ModuloByZero)),
        ];

        for (operation, operands, expected) in &cases {
            assert_eq!(calc.compute(*operation, operands), *expected, "{operation}");
        }

        let power = calc.compute(Operation::Power, &[2.0, 0.5]).unwrap();
        assert!((power - 1.4142135623730951).abs() < 1e-12);

        let failures = recorder
            .events()
            .iter()
            .filter(|e| matches!(e, CalcEvent::CalculationFailed { .. }))
            .count();
        assert_eq!(failures, 2);
        assert_eq!(recorder.len(), (cases.len() + 1) * 2);
    }

    #[test]
    fn test_operation_names_drive_calculator() {
        let calc = CalculatorBuilder::new("by-name")
            .build(Arc::new(NoOpEventHandler))
            .unwrap();

        let op: Operation = "%".parse().unwrap();
        assert_eq!(calc.compute(op, &[10.0, -3.0]), Ok(-2.0));
    }

    #[test]
    fn test_concurrent_use() {
        let recorder = Arc::new(RecordingEventHandler::new());
        let calc = Calculator::new(
            "shared".to_string(),
            Box::new(NativeBackend::new()),
            recorder.clone(),
        );

        crossbeam::scope(|s| {
            for t in 0..4 {
                let calc = &calc;
                s.spawn(move |_| {
                    for i in 0..100 {
                        let a = f64::from(t * 100 + i);
                        assert_eq!(calc.compute(Operation::Add, &[a, 1.0]), Ok(a + 1.0));
                        assert_eq!(
                            calc.compute(Operation::Divide, &[a, 0.0]),
                            Err(CalcError::DivisionByZero)
                        );
                    }
                });
            }
        })
        .unwrap();

        assert_eq!(recorder.len(), 4 * 100 * 2 * 2);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_calculation_serializes() {
        let calculation = Calculation::binary(Operation::Modulo, -10.0, 3.0).unwrap();
        let json = serde_json::to_string(&calculation).unwrap();
        assert!(json.contains("\"modulo\""));

        let back: Calculation = serde_json::from_str(&json).unwrap();
        assert_eq!(back, calculation);
    }
}
