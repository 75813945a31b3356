pub mod execute;
pub mod initialize;
pub mod pool;
pub mod report_outcome;
pub mod submit_pool;
pub mod submit_router_upgrade;
pub mod submit_swap;
pub mod submit_unpool;
pub mod swap;
pub mod unpool;

pub use execute::*;
pub use initialize::*;
pub use pool::*;
pub use report_outcome::*;
pub use submit_pool::*;
pub use submit_router_upgrade::*;
pub use submit_swap::*;
pub use submit_unpool::*;
pub use swap::*;
pub use unpool::*;
