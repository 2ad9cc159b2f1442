// ============================================================================
// Domain Models Module
// Operations, calculation requests and calculator configuration
// ============================================================================

pub mod calculation;
pub mod config;
pub mod operation;

pub use calculation::{Calculation, CalculationId, Operands};
pub use config::CalculatorConfig;
pub use operation::Operation;
