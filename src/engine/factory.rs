// ============================================================================
// Calculator Factory
// Creates calculators with proper configuration
// ============================================================================

use crate::domain::config::CalculatorConfig;
use crate::engine::{Calculator, NativeBackend};
use crate::interfaces::EventHandler;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a calculator from configuration
///
/// # Arguments
/// * `config` - Calculator configuration
/// * `event_handler` - Event handler for calculation events
///
/// # Returns
/// * `Result<Calculator, String>` - Configured calculator or error
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use std::sync::Arc;
///
/// let config = CalculatorConfig::strict("ledger".to_string());
/// let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();
/// assert!(calc.rejects_non_finite());
/// ```
pub fn create_from_config(
    config: CalculatorConfig,
    event_handler: Arc<dyn EventHandler>,
) -> Result<Calculator, String> {
    // Validate configuration first
    config.validate()?;

    Ok(
        Calculator::new(config.name, Box::new(NativeBackend::new()), event_handler)
            .with_reject_non_finite(config.reject_non_finite),
    )
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Builder for creating calculators with fluent API
///
/// # Example
/// ```
/// use calculator::prelude::*;
/// use std::sync::Arc;
///
/// let calc = CalculatorBuilder::new("strict")
///     .reject_non_finite()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(calc.compute(Operation::Modulo, &[-10.0, 3.0]), Ok(2.0));
/// ```
pub struct CalculatorBuilder {
    config: CalculatorConfig,
}

impl CalculatorBuilder {
    /// Create a new builder
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            config: CalculatorConfig::new(name.into()),
        }
    }

    /// Reject NaN and infinite operands
    pub fn reject_non_finite(mut self) -> Self {
        self.config.reject_non_finite = true;
        self
    }

    /// Get the configuration built so far
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Build the calculator
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> Result<Calculator, String> {
        create_from_config(self.config, event_handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Operation;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::CalcError;

    #[test]
    fn test_create_lenient() {
        let config = CalculatorConfig::lenient("float".to_string());
        let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();

        assert_eq!(calc.name(), "float");
        assert_eq!(calc.backend_name(), "Native");
        assert!(!calc.rejects_non_finite());
    }

    #[test]
    fn test_create_strict() {
        let config = CalculatorConfig::strict("ledger".to_string());
        let calc = create_from_config(config, Arc::new(NoOpEventHandler)).unwrap();

        assert!(calc.rejects_non_finite());
        assert_eq!(
            calc.compute(Operation::Add, &[f64::INFINITY, 1.0]),
            Err(CalcError::InvalidInput)
        );
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = CalculatorConfig::new(String::new());
        assert!(create_from_config(config, Arc::new(NoOpEventHandler)).is_err());
    }

    #[test]
    fn test_builder() {
        let builder = CalculatorBuilder::new("built").reject_non_finite();
        assert!(builder.config().reject_non_finite);

        let calc = builder.build(Arc::new(NoOpEventHandler)).unwrap();
        assert_eq!(calc.compute(Operation::Divide, &[7.0, 2.0]), Ok(3.5));
    }

    #[test]
    fn test_builder_defaults_to_lenient() {
        let calc = CalculatorBuilder::new("default")
            .build(Arc::new(NoOpEventHandler))
            .unwrap();
        assert!(!calc.rejects_non_finite());
    }
}
