pub mod catalog;
pub mod input;
pub mod problems;
pub mod solver_service;

pub use catalog::*;
pub use input::*;
pub use solver_service::*;
