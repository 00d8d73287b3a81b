// Forge_X Liquidity Pool Program
//
// Two-asset liquidity pool with a basis-point swap fee.
//
// Instructions:
// - initialize_pool: Create the pool account with zero reserves
// - add_liquidity: Move both assets into the pool vaults
// - swap: Exchange asset A for asset B against the pooled reserves

use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;

declare_id!("CxSwnvkjvWwQhD2RW4LgvzUjkB3wXptNgYw78Wc2y598");

#[program]
pub mod forge_x {
    use super::*;

    pub fn initialize_pool(ctx: Context<InitializePool>, fee: u64) -> Result<()> {
        ctx.accounts.initialize_pool(fee)
    }

    pub fn add_liquidity(ctx: Context<AddLiquidity>, amount_a: u64, amount_b: u64) -> Result<()> {
        ctx.accounts.add_liquidity(amount_a, amount_b)
    }

    pub fn swap(ctx: Context<Swap>, amount_in: u64) -> Result<()> {
        ctx.accounts.swap(amount_in)
    }
}
