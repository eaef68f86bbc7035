use business::domain::logger::Logger;
use tracing::{debug, error, info, warn};

/// Forwards pantry log lines to whichever `tracing` subscriber the host installed.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingLogger;

impl Logger for TracingLogger {
    fn info(&self, message: &str) {
        info!(target: "pantry", "{}", message);
    }
    fn warn(&self, message: &str) {
        warn!(target: "pantry", "{}", message);
    }
    fn error(&self, message: &str) {
        error!(target: "pantry", "{}", message);
    }
    fn debug(&self, message: &str) {
        debug!(target: "pantry", "{}", message);
    }
}
