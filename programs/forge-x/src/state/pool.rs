// Pool State

use anchor_lang::prelude::*;
use crate::errors::*;

#[account]
#[derive(InitSpace)]
pub struct Pool {
    pub token_a_reserve: u64,     // Asset A held by the pool vaults
    pub token_b_reserve: u64,     // Asset B held by the pool vaults
    pub fee: u64,                 // Swap fee in basis points
    pub authority: Pubkey,        // User that initialized the pool
    pub vault_authority_bump: u8, // PDA bump for the vault authority
}

impl Pool {
    pub fn credit_reserves(&mut self, amount_a: u64, amount_b: u64) -> Result<()> {
        self.token_a_reserve = self
            .token_a_reserve
            .checked_add(amount_a)
            .ok_or(ForgeError::Overflow)?;
        self.token_b_reserve = self
            .token_b_reserve
            .checked_add(amount_b)
            .ok_or(ForgeError::Overflow)?;
        Ok(())
    }

    pub fn apply_swap(&mut self, amount_in: u64, amount_out: u64) -> Result<()> {
        self.token_a_reserve = self
            .token_a_reserve
            .checked_add(amount_in)
            .ok_or(ForgeError::Overflow)?;
        self.token_b_reserve = self
            .token_b_reserve
            .checked_sub(amount_out)
            .ok_or(ForgeError::Underflow)?;
        Ok(())
    }
}
