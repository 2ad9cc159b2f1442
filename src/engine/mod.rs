// ============================================================================
// Engine Module
// Contains the calculator and its numeric backend
// ============================================================================

mod calculator;
mod native;

pub mod factory;

pub use calculator::Calculator;
pub use factory::{create_from_config, CalculatorBuilder};
pub use native::NativeBackend;
