pub mod aggregate;
pub mod events;
pub mod projections;

pub use aggregate::*;
pub use events::*;
pub use projections::*;
