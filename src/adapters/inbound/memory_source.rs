use std::collections::HashMap;
use crate::domains::ports::PuzzleSource;
use crate::common::{DomainError, DomainResult};

#[derive(Debug, Clone, Default)]
pub struct InMemoryPuzzleSource {
    puzzles: HashMap<String, String>,
}

impl InMemoryPuzzleSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_puzzle(mut self, name: &str, text: &str) -> Self {
        self.puzzles.insert(name.to_string(), text.to_string());
        self
    }
}

impl PuzzleSource for InMemoryPuzzleSource {
    fn load_puzzle(&self, name: &str) -> DomainResult<String> {
        self.puzzles
            .get(name)
            .cloned()
            .ok_or_else(|| DomainError::InfrastructureError(format!("no puzzle named '{}'", name)))
    }
}
