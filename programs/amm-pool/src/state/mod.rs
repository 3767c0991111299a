pub mod balances;
pub mod config;

pub use balances::*;
pub use config::*;
