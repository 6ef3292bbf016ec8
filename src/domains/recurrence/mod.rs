//! Bottom-up dynamic programming over explicit tables.
//!
//! Every recurrence here fills an index-addressed array once per index, so
//! stack depth never depends on the input size.

pub mod schedule;
pub mod sequence;
pub mod steps;

pub use schedule::*;
pub use sequence::*;
pub use steps::*;
