// ============================================================================
// Interfaces Module
// Contains all trait definitions and contracts
// ============================================================================

mod arithmetic_backend;
mod event_handler;

pub use arithmetic_backend::ArithmeticBackend;
pub use event_handler::{
    CalcEvent, EventBatch, EventHandler, LoggingEventHandler, NoOpEventHandler,
    RecordingEventHandler,
};
