use crate::domains::logger::DomainLogger;
use log::LevelFilter;
use std::sync::Arc;

/// Forwards to a primary logger and, when present, a secondary one.
pub struct MultiLogger {
    primary: Arc<dyn DomainLogger>,
    secondary: Option<Arc<dyn DomainLogger>>,
}

impl MultiLogger {
    pub fn new(primary: Arc<dyn DomainLogger>, secondary: Option<Arc<dyn DomainLogger>>) -> Self {
        Self { primary, secondary }
    }
}

impl DomainLogger for MultiLogger {
    fn info(&self, msg: &str) {
        self.primary.info(msg);
        if let Some(sec) = &self.secondary {
            sec.info(msg);
        }
    }

    fn warn(&self, msg: &str) {
        self.primary.warn(msg);
        if let Some(sec) = &self.secondary {
            sec.warn(msg);
        }
    }

    fn error(&self, msg: &str) {
        self.primary.error(msg);
        if let Some(sec) = &self.secondary {
            sec.error(msg);
        }
    }
}

/// File logger with the console as secondary; falls back to the console alone
/// when the file backend cannot be initialized.
pub fn init_combined_logger(path: &str, level: LevelFilter) -> Arc<dyn DomainLogger> {
    let console = super::init_console_logger();
    match super::init_file_logger(path, level) {
        Ok(file_logger) => Arc::new(MultiLogger::new(file_logger, Some(console))) as Arc<dyn DomainLogger>,
        Err(e) => {
            console.warn(&e);
            console
        }
    }
}
