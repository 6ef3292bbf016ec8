pub mod types;
pub mod grid;
pub mod distance;

pub use types::*;
pub use grid::*;
pub use distance::*;
