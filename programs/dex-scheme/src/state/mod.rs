pub mod proposal;
pub mod scheme;

pub use proposal::*;
pub use scheme::*;
