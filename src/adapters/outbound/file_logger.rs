use crate::domains::logger::{DomainLogger, FileLogger};
use log::LevelFilter;
use std::sync::Arc;

/// Initialize the fast_log file backend and return a logger the service can inject.
/// fast_log installs a global logger, so this succeeds at most once per process.
pub fn init_file_logger(path: &str, level: LevelFilter) -> Result<Arc<dyn DomainLogger>, String> {
    FileLogger::init(path, level).map_err(|e| format!("Failed to initialize fast_log: {}", e))?;
    Ok(Arc::new(FileLogger))
}
