use std::path::{Path, PathBuf};
use std::env;
use std::fs;
use crate::domains::ports::PuzzleSource;
use crate::common::{DomainError, DomainResult};

pub const DATA_DIR_ENV: &str = "GRIDFLOW_DATA_DIR";

/// Reads puzzle files relative to a base directory. Absolute names are used as given.
pub struct FilesystemPuzzleSource {
    base: PathBuf,
}

impl FilesystemPuzzleSource {
    /// Precedence: explicit base -> GRIDFLOW_DATA_DIR -> ./resources/puzzles -> current directory
    pub fn new(base: Option<PathBuf>) -> Self {
        let base = base.unwrap_or_else(|| {
            if let Ok(v) = env::var(DATA_DIR_ENV) {
                PathBuf::from(v)
            } else {
                let cwd_default = Path::new("resources/puzzles");
                if cwd_default.exists() { cwd_default.to_path_buf() } else { PathBuf::from(".") }
            }
        });
        Self { base }
    }

    pub fn base(&self) -> &Path {
        &self.base
    }

    fn resolve(&self, name: &str) -> PathBuf {
        let candidate = Path::new(name);
        if candidate.is_absolute() {
            candidate.to_path_buf()
        } else {
            self.base.join(candidate)
        }
    }
}

impl PuzzleSource for FilesystemPuzzleSource {
    fn load_puzzle(&self, name: &str) -> DomainResult<String> {
        let path = self.resolve(name);
        fs::read_to_string(&path)
            .map_err(|e| DomainError::InfrastructureError(format!("{}: {}", path.display(), e)))
    }
}
