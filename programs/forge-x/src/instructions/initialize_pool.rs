// Initialize Pool Instruction
//
// Creates the pool account and writes its canonical zero-reserve state.
// The pool account is a fresh keypair account, so creation can only
// happen once per address and the account itself must co-sign.

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct InitializePool<'info> {
    #[account(
        init,
        payer = user,
        space = ANCHOR_DISCRIMINATOR + Pool::INIT_SPACE,
    )]
    pub pool: Account<'info, Pool>,

    #[account(mut)]
    pub user: Signer<'info>,

    pub system_program: Program<'info, System>,
}

impl<'info> InitializePool<'info> {
    pub fn initialize_pool(&mut self, fee: u64) -> Result<()> {
        // Validate fee is within limits (max 100%)
        require!(fee <= MAX_FEE_BASIS_POINTS, ForgeError::InvalidFee);

        // The vault authority PDA is never passed to this instruction;
        // only its bump is recorded for later vault transfers.
        let pool_key = self.pool.key();
        let (_, vault_authority_bump) =
            Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, pool_key.as_ref()], &crate::ID);

        self.pool.set_inner(Pool {
            token_a_reserve: 0,
            token_b_reserve: 0,
            fee,
            authority: self.user.key(),
            vault_authority_bump,
        });

        emit!(PoolInitialized {
            fee,
            pool_address: pool_key,
        });

        msg!("Pool initialized: {}", pool_key);
        msg!("Fee: {} basis points", fee);

        Ok(())
    }
}
