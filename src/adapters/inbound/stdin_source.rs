use std::io::Read;
use crate::domains::ports::PuzzleSource;
use crate::common::{DomainError, DomainResult};

/// Reads the whole of standard input; the puzzle name is ignored.
pub struct StdinPuzzleSource;

impl PuzzleSource for StdinPuzzleSource {
    fn load_puzzle(&self, _name: &str) -> DomainResult<String> {
        let mut s = String::new();
        std::io::stdin()
            .lock()
            .read_to_string(&mut s)
            .map_err(|e| DomainError::InfrastructureError(format!("stdin: {}", e)))?;
        Ok(s)
    }
}
