//! Text front-ends: each function parses one puzzle format and renders the answer.

pub mod grid;
pub mod recurrence;
pub mod scan;
