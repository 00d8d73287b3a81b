// Instructions module
// - initialize_pool
// - add_liquidity
// - swap

pub mod add_liquidity;
pub mod initialize_pool;
pub mod swap;

pub use add_liquidity::*;
pub use initialize_pool::*;
pub use swap::*;
