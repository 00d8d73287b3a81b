
use anchor_lang::prelude::*;

#[error_code]
pub enum ForgeError {
    #[msg("Fee basis points cannot exceed maximum allowed (10000 = 100%)")]
    InvalidFee,

    #[msg("Liquidity amounts must be greater than zero")]
    InvalidLiquidityAmount,

    #[msg("Swap amount must be greater than zero")]
    InvalidSwapAmount,

    #[msg("Insufficient liquidity in the pool")]
    InsufficientLiquidity,

    #[msg("Insufficient output amount")]
    InsufficientOutput,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Arithmetic underflow occurred")]
    Underflow,
}
