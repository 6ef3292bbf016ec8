use crate::common::DomainResult;

/// Port for fetching raw puzzle text. Adapters provide filesystem, stdin or
/// in-memory sources.
pub trait PuzzleSource: Send + Sync {
    fn load_puzzle(&self, name: &str) -> DomainResult<String>;
}
