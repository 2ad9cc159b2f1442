// ============================================================================
// Calculator Configuration
// Naming and operand policy for a calculator instance
// ============================================================================

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Configuration for creating a calculator
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    /// Name reported in events and logs
    pub name: String,

    /// Reject NaN and infinite operands with `InvalidInput` before evaluating
    pub reject_non_finite: bool,
}

impl CalculatorConfig {
    /// Create a new configuration with required parameters
    pub fn new(name: String) -> Self {
        Self {
            name,
            reject_non_finite: false,
        }
    }

    /// Builder method: Reject non-finite operands
    pub fn with_reject_non_finite(mut self, reject: bool) -> Self {
        self.reject_non_finite = reject;
        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.name.trim().is_empty() {
            return Err("Calculator name cannot be empty".to_string());
        }

        Ok(())
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Total over every input, NaN and infinities included
    pub fn lenient(name: String) -> Self {
        Self::new(name)
    }

    /// Non-finite operands are rejected
    pub fn strict(name: String) -> Self {
        Self::new(name).with_reject_non_finite(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_config() {
        let config = CalculatorConfig::new("default".to_string());

        assert_eq!(config.name, "default");
        assert!(!config.reject_non_finite);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = CalculatorConfig::new("strict".to_string()).with_reject_non_finite(true);
        assert!(config.reject_non_finite);
    }

    #[test]
    fn test_validation() {
        let config = CalculatorConfig::new("  ".to_string());
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_preset_configs() {
        let lenient = CalculatorConfig::lenient("float".to_string());
        assert!(!lenient.reject_non_finite);

        let strict = CalculatorConfig::strict("ledger".to_string());
        assert!(strict.reject_non_finite);
    }
}
