pub mod window;
pub mod prefix;
pub mod bisect;
pub mod greedy;
pub mod pattern;

pub use window::*;
pub use prefix::*;
pub use bisect::*;
pub use greedy::*;
pub use pattern::*;
