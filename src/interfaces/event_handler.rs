// ============================================================================
// Event Handler Interface
// Defines the contract for observing calculation events
// ============================================================================

use crate::domain::{CalculationId, Operation};
use crate::numeric::CalcError;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Events emitted for one submitted calculation
pub type EventBatch = SmallVec<[CalcEvent; 2]>;

/// Events emitted by the calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum CalcEvent {
    /// Calculation received by the calculator
    CalculationReceived {
        calculation_id: CalculationId,
        operation: Operation,
        timestamp: DateTime<Utc>,
    },

    /// Calculation evaluated successfully
    CalculationCompleted {
        calculation_id: CalculationId,
        operation: Operation,
        result: f64,
        timestamp: DateTime<Utc>,
    },

    /// Calculation rejected or failed during evaluation
    CalculationFailed {
        calculation_id: CalculationId,
        operation: Operation,
        error: CalcError,
        timestamp: DateTime<Utc>,
    },
}

impl CalcEvent {
    pub fn calculation_id(&self) -> CalculationId {
        match self {
            CalcEvent::CalculationReceived { calculation_id, .. }
            | CalcEvent::CalculationCompleted { calculation_id, .. }
            | CalcEvent::CalculationFailed { calculation_id, .. } => *calculation_id,
        }
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        match self {
            CalcEvent::CalculationReceived { timestamp, .. }
            | CalcEvent::CalculationCompleted { timestamp, .. }
            | CalcEvent::CalculationFailed { timestamp, .. } => *timestamp,
        }
    }
}

/// Event handler trait for processing calculator events
/// Implementations can handle logging, auditing, metrics, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a calculator event
    fn on_event(&self, event: CalcEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: EventBatch) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: CalcEvent) {}
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        let at = event.timestamp();
        match &event {
            CalcEvent::CalculationFailed {
                calculation_id,
                operation,
                error,
                ..
            } => tracing::warn!(
                id = %calculation_id.as_uuid(),
                %operation,
                %error,
                %at,
                "calculation failed"
            ),
            _ => tracing::debug!(%at, "Calculator event: {:?}", event),
        }
    }
}

/// Event handler that keeps every event it sees, in arrival order.
#[derive(Default)]
pub struct RecordingEventHandler {
    events: Mutex<Vec<CalcEvent>>,
}

impl RecordingEventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the recorded events
    pub fn events(&self) -> Vec<CalcEvent> {
        self.events.lock().clone()
    }

    pub fn len(&self) -> usize {
        self.events.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.lock().is_empty()
    }

    pub fn clear(&self) {
        self.events.lock().clear();
    }
}

impl EventHandler for RecordingEventHandler {
    fn on_event(&self, event: CalcEvent) {
        self.events.lock().push(event);
    }

    fn on_events(&self, events: EventBatch) {
        self.events.lock().extend(events);
    }
}
