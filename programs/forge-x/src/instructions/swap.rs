// Swap Instruction
//
// Exchanges asset A for asset B using the constant product formula.
// The fee is deducted from the input before calculating the output.

use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::{constants::*, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub pool: Account<'info, Pool>,

    pub user: Signer<'info>,

    #[account(
        mut,
        constraint = user_token_a.owner == user.key(),
    )]
    pub user_token_a: Account<'info, TokenAccount>,

    #[account(mut)]
    pub user_token_b: Account<'info, TokenAccount>,

    /// CHECK: PDA signer for the pool vaults
    #[account(
        seeds = [VAULT_AUTHORITY_SEED, pool.key().as_ref()],
        bump = pool.vault_authority_bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        constraint = pool_a.owner == vault_authority.key(),
        constraint = pool_a.mint == user_token_a.mint,
    )]
    pub pool_a: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = pool_b.owner == vault_authority.key(),
        constraint = pool_b.mint == user_token_b.mint,
    )]
    pub pool_b: Account<'info, TokenAccount>,

    pub token_program: Program<'info, Token>,
}

impl<'info> Swap<'info> {
    pub fn swap(&mut self, amount_in: u64) -> Result<()> {
        require!(amount_in > 0, ForgeError::InvalidSwapAmount);

        require!(
            self.pool.token_a_reserve > 0 && self.pool.token_b_reserve > 0,
            ForgeError::InsufficientLiquidity
        );

        let amount_out = swap_quote(
            amount_in,
            self.pool.token_a_reserve,
            self.pool.token_b_reserve,
            self.pool.fee,
        )?;

        require!(
            amount_out > 0 && amount_out <= self.pool.token_b_reserve,
            ForgeError::InsufficientOutput
        );

        // Pay in with the user's authority
        transfer_tokens(
            amount_in,
            &self.token_program.to_account_info(),
            &self.user_token_a.to_account_info(),
            &self.pool_a.to_account_info(),
            &self.user.to_account_info(),
        )?;

        // Pay out with the vault authority PDA
        let pool_key = self.pool.key();
        let authority_seeds = &[
            VAULT_AUTHORITY_SEED,
            pool_key.as_ref(),
            &[self.pool.vault_authority_bump],
        ];

        transfer_from_vault(
            amount_out,
            &self.token_program.to_account_info(),
            &self.pool_b.to_account_info(),
            &self.user_token_b.to_account_info(),
            &self.vault_authority.to_account_info(),
            authority_seeds,
        )?;

        self.pool.apply_swap(amount_in, amount_out)?;

        emit!(SwapExecuted {
            user: self.user.key(),
            amount_in,
            amount_out,
            new_reserve_a: self.pool.token_a_reserve,
            new_reserve_b: self.pool.token_b_reserve,
            fee: self.pool.fee,
        });

        msg!("Swapped {} A -> {} B", amount_in, amount_out);

        Ok(())
    }
}
