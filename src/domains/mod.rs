pub mod flood_escape;
pub mod grid;
pub mod logger;
pub mod ports;
pub mod recurrence;
pub mod scan;
pub mod search;

pub use logger::{parse_level, DomainLogger, DynLogger, FileLogger};
pub use ports::PuzzleSource;
