//! Logger backed by the `tracing` crate

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use super::traits::Logger;

/// A logger that forwards every message to `tracing`
///
/// Events are emitted under the `multichat` target with a `component`
/// field, so they can be filtered with `RUST_LOG=multichat=debug`.
#[derive(Debug, Clone)]
pub struct TracingLogger {
    component: String,
}

impl Default for TracingLogger {
    fn default() -> Self {
        Self::new()
    }
}

impl TracingLogger {
    /// Create a tracing logger with the default component name
    pub fn new() -> Self {
        Self::with_component("multichat")
    }

    /// Create a tracing logger tagged with a custom component name
    pub fn with_component(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }
}

impl Logger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "multichat", component = %self.component, "{}", message);
    }

    fn info(&self, message: &str) {
        tracing::info!(target: "multichat", component = %self.component, "{}", message);
    }

    fn warn(&self, message: &str) {
        tracing::warn!(target: "multichat", component = %self.component, "{}", message);
    }

    fn error(&self, message: &str) {
        tracing::error!(target: "multichat", component = %self.component, "{}", message);
    }
}

/// Install a global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_level`. Calling this more than
/// once is harmless: later calls leave the first subscriber in place and
/// return `false`.
pub fn init_tracing(default_level: &str) -> bool {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(true))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tracing_logger_creation() {
        let logger = TracingLogger::new();
        assert_eq!(logger.component(), "multichat");

        let custom = TracingLogger::with_component("gemini");
        assert_eq!(custom.component(), "gemini");
    }

    #[test]
    fn test_tracing_logger_logs() {
        init_tracing("debug");
        let logger = TracingLogger::new();
        logger.debug("debug message");
        logger.info("info message");
        logger.warn("warn message");
        logger.error("error message");
    }

    #[test]
    fn test_init_is_idempotent() {
        init_tracing("info");
        assert!(!init_tracing("info"));
    }
}
