// ============================================================================
// Logging
// tracing-subscriber setup for binaries and tests (feature = "logging")
// ============================================================================

use tracing_subscriber::EnvFilter;

/// Install a global fmt subscriber filtered by `filter` (e.g. `"calculator=debug"`).
///
/// `RUST_LOG` takes precedence over `filter` when it is set.
///
/// # Errors
/// Fails if a global subscriber is already installed.
pub fn try_init_tracing(filter: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init()
}

/// Like [`try_init_tracing`], ignoring an already-installed subscriber.
pub fn init_tracing(filter: &str) {
    if try_init_tracing(filter).is_err() {
        tracing::debug!("global subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        init_tracing("calculator=trace");
        init_tracing("calculator=trace");
        assert!(try_init_tracing("calculator=trace").is_err());
    }
}
