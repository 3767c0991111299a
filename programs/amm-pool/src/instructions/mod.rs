pub mod deposit;
pub mod initialize;
pub mod lock_pool;
pub mod swap;
pub mod unlock_pool;
pub mod withdraw;

pub use deposit::*;
pub use initialize::*;
pub use lock_pool::*;
pub use swap::*;
pub use unlock_pool::*;
pub use withdraw::*;
