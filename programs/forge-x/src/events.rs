// Events emitted on successful state transitions.

use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub fee: u64,
    pub pool_address: Pubkey,
}

#[event]
pub struct LiquidityAdded {
    pub amount_a: u64,
    pub amount_b: u64,
    pub new_reserve_a: u64,
    pub new_reserve_b: u64,
    pub pool_address: Pubkey,
}

#[event]
pub struct SwapExecuted {
    pub user: Pubkey,
    pub amount_in: u64,
    pub amount_out: u64,
    pub new_reserve_a: u64,
    pub new_reserve_b: u64,
    pub fee: u64,
}
