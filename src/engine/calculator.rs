// ============================================================================
// Calculator
// Evaluates calculation requests against a pluggable backend
// ============================================================================

use crate::domain::{Calculation, Operation};
use crate::interfaces::{ArithmeticBackend, CalcEvent, EventBatch, EventHandler};
use crate::numeric::{CalcError, CalcResult};
use chrono::Utc;
use std::sync::Arc;

/// Stateless calculator with a pluggable numeric backend
pub struct Calculator {
    /// Name reported in logs (e.g. "ledger")
    name: Arc<String>,

    /// Pluggable numeric backend
    backend: Box<dyn ArithmeticBackend>,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,

    /// Reject NaN/infinite operands before evaluation
    reject_non_finite: bool,
}

impl Calculator {
    /// Create a new calculator
    pub fn new(
        name: String,
        backend: Box<dyn ArithmeticBackend>,
        event_handler: Arc<dyn EventHandler>,
    ) -> Self {
        Self {
            name: Arc::new(name),
            backend,
            event_handler,
            reject_non_finite: false,
        }
    }

    /// Reject NaN and infinite operands with `InvalidInput`
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Submit a calculation; returns the events it produced
    pub fn submit(&self, calculation: &Calculation) -> EventBatch {
        self.process(calculation).1
    }

    /// Evaluate a calculation, emitting its events to the handler
    pub fn evaluate(&self, calculation: &Calculation) -> CalcResult<f64> {
        self.process(calculation).0
    }

    /// Build and evaluate a calculation in one step
    ///
    /// # Errors
    /// `ArityMismatch` if the operand count is wrong (no events are
    /// emitted in that case), otherwise whatever evaluation signals.
    pub fn compute(&self, operation: Operation, operands: &[f64]) -> CalcResult<f64> {
        let calculation = Calculation::new(operation, operands)?;
        self.evaluate(&calculation)
    }

    /// Get the calculator name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the backend name
    pub fn backend_name(&self) -> &str {
        self.backend.name()
    }

    pub fn rejects_non_finite(&self) -> bool {
        self.reject_non_finite
    }

    // ========================================================================
    // Private methods
    // ========================================================================

    fn process(&self, calculation: &Calculation) -> (CalcResult<f64>, EventBatch) {
        let mut events = EventBatch::new();

        // Event: Calculation received
        events.push(CalcEvent::CalculationReceived {
            calculation_id: calculation.id,
            operation: calculation.operation,
            timestamp: Utc::now(),
        });

        let outcome = self.run(calculation);

        match outcome {
            Ok(result) => {
                tracing::trace!(
                    calculator = %self.name,
                    backend = self.backend.name(),
                    operation = %calculation.operation,
                    result,
                    "calculation completed"
                );
                events.push(CalcEvent::CalculationCompleted {
                    calculation_id: calculation.id,
                    operation: calculation.operation,
                    result,
                    timestamp: Utc::now(),
                });
            },
            Err(error) => {
                tracing::debug!(
                    calculator = %self.name,
                    backend = self.backend.name(),
                    operation = %calculation.operation,
                    operands = ?calculation.operands(),
                    %error,
                    "calculation failed"
                );
                events.push(CalcEvent::CalculationFailed {
                    calculation_id: calculation.id,
                    operation: calculation.operation,
                    error,
                    timestamp: Utc::now(),
                });
            },
        }

        // Emit events
        self.event_handler.on_events(events.clone());

        (outcome, events)
    }

    fn run(&self, calculation: &Calculation) -> CalcResult<f64> {
        if self.reject_non_finite && calculation.has_non_finite_operand() {
            return Err(CalcError::InvalidInput);
        }

        self.backend
            .apply(calculation.operation, calculation.operands())
    }
}
