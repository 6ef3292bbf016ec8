pub mod traversal;
pub mod single_source;
pub mod multi_source;
pub mod network;

pub use traversal::*;
pub use single_source::*;
pub use multi_source::*;
pub use network::*;
