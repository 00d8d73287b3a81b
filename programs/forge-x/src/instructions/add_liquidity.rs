// Add Liquidity Instruction
//
// Moves both assets from the caller into the pool vaults and credits
// the reserves by the deposited amounts.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct AddLiquidity<'info> {
    #[account(mut)]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = token_a.owner == user.key(),
    )]
    pub token_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = token_b.owner == user.key(),
    )]
    pub token_b: Account<'info, TokenAccount>,

    /// CHECK: PDA signer for the pool vaults
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, pool.key().as_ref()],
        bump = pool.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = pool_a.owner == vault_authority.key(),
        constraint = pool_a.mint == token_a.mint,
    )]
    pub pool_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = pool_b.owner == vault_authority.key(),
        constraint = pool_b.mint == token_b.mint,
    )]
    pub pool_b: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> AddLiquidity<'info> {
    pub fn add_liquidity(&mut self, amount_a: u64, amount_b: u64) -> Result<()> {
        require!(
            amount_a > 0 && amount_b > 0,
            ForgeError::InvalidLiquidityAmount
        );

        // Transfer tokens from user to the pool vaults
        transfer_tokens(
            amount_a,
            &self.token_program.to_account_info(),
            &self.token_a.to_account_info(),
            &self.pool_a.to_account_info(),
            &self.user.to_account_info(),
        )?;

        transfer_tokens(
            amount_b,
            &self.token_program.to_account_info(),
            &self.token_b.to_account_info(),
            &self.pool_b.to_account_info(),
            &self.user.to_account_info(),
        )?;

        self.pool.credit_reserves(amount_a, amount_b)?;

        emit!(LiquidityAdded {
            amount_a,
            amount_b,
            new_reserve_a: self.pool.token_a_reserve,
            new_reserve_b: self.pool.token_b_reserve,
            pool_address: self.pool.key(),
        });

        msg!("Deposited: {} A, {} B", amount_a, amount_b);

        Ok(())
    }
}
