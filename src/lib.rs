pub mod adapters;
pub mod application;
pub mod common;
pub mod config;
pub mod domains;

pub use config::Config;

// Re-export the types most callers need
pub use common::{AggregateRoot, ApplicationError, ApplicationResult, DomainError, DomainEvent, DomainResult};
pub use domains::flood_escape::{EscapeOutcome, EscapeStatus, FloodEscape, FloodEscapeEvent};
pub use domains::grid::{Cell, Coord, DistanceMap, Grid};
pub use domains::search::{multi_source, saturation, single_source, Saturation, Traversal};
pub use domains::{DomainLogger, DynLogger, PuzzleSource};
