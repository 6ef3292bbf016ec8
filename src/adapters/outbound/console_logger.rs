use crate::domains::logger::DomainLogger;
use std::sync::Arc;

/// Writes to stderr; stdout is reserved for answers.
struct StderrBridge;

impl DomainLogger for StderrBridge {
    fn info(&self, msg: &str) { eprintln!("INFO: {}", msg); }
    fn warn(&self, msg: &str) { eprintln!("WARN: {}", msg); }
    fn error(&self, msg: &str) { eprintln!("ERROR: {}", msg); }
}

pub fn init_console_logger() -> Arc<dyn DomainLogger> {
    Arc::new(StderrBridge {})
}
