// Forge_X Helper Functions
//
// Swap quoting and CPI helpers shared by the instructions.

use anchor_lang::prelude::*;
use anchor_spl::token::{Transfer, transfer};

use crate::{constants::*, errors::*};

// Quote a swap of asset A for asset B against the current reserves.
// The fee is taken from the input amount, in basis points:
//   amount_in_with_fee = amount_in * (10000 - fee) / 10000
//   amount_out = amount_in_with_fee * reserve_out / (reserve_in + amount_in_with_fee)
// Caller must ensure reserve_in > 0.
pub fn swap_quote(amount_in: u64, reserve_in: u64, reserve_out: u64, fee: u64) -> Result<u64> {
    let fee_factor = FEE_DENOMINATOR
        .checked_sub(fee)
        .ok_or(ForgeError::InvalidFee)?;

    let amount_in_with_fee = amount_in
        .checked_mul(fee_factor)
        .ok_or(ForgeError::Overflow)?
        / FEE_DENOMINATOR;

    let amount_out = amount_in_with_fee
        .checked_mul(reserve_out)
        .ok_or(ForgeError::Overflow)?
        / reserve_in
            .checked_add(amount_in_with_fee)
            .ok_or(ForgeError::Overflow)?;

    Ok(amount_out)
}

// Transfer tokens with a wallet authority
// Used for moving user tokens into the pool vaults
pub fn transfer_tokens<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
) -> Result<()> {
    transfer(
        CpiContext::new(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
        ),
        amount,
    )
}

// Transfer tokens out of a pool vault (requires the vault authority PDA)
// Used in the swap instruction
pub fn transfer_from_vault<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: from.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
