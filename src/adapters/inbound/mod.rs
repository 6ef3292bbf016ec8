pub mod filesystem_source;
pub mod memory_source;
pub mod stdin_source;

pub use filesystem_source::*;
pub use memory_source::*;
pub use stdin_source::*;
