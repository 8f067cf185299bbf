// Tracing log adapter - Structured logging using tracing crate

use tracing::{debug, error, info, warn};

use crate::ports::*;

/// Tracing log adapter
///
/// Subscriber installation lives in [`crate::utils::logging`]; this adapter
/// only emits events.
#[derive(Debug, Default)]
pub struct TracingLogAdapter;

impl TracingLogAdapter {
    /// Create new tracing log adapter
    pub fn new() -> Self {
        Self
    }
}

impl LogPort for TracingLogAdapter {
    fn debug(&self, message: &str) {
        debug!("{}", message);
    }

    fn info(&self, message: &str) {
        info!("{}", message);
    }

    fn warn(&self, message: &str) {
        warn!("{}", message);
    }

    fn error(&self, message: &str) {
        error!("{}", message);
    }

    fn critical(&self, message: &str) {
        error!(critical = true, "{}", message);
    }
}
