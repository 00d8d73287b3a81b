// Forge_X Program Constants

pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";
pub const MAX_FEE_BASIS_POINTS: u64 = 10_000; // 100%
pub const FEE_DENOMINATOR: u64 = 10_000;
pub const ANCHOR_DISCRIMINATOR: usize = 8;
