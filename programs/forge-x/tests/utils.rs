// Test utilities for the Forge_X program

use litesvm::LiteSVM;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
};

use anchor_lang::AccountDeserialize;
use forge_x::state::Pool;

// Program ID matching declare_id! (forge_x)
pub const FORGE_PROGRAM_ID: Pubkey = Pubkey::new_from_array(forge_x::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const VAULT_AUTHORITY_SEED: &[u8] = b"vault_authority";

// Token decimals
pub const DECIMALS: u8 = 9;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the Forge_X program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../target/deploy/forge_x.so");
    let _ = svm.add_program(FORGE_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Derive the vault authority PDA for a pool
pub fn derive_vault_authority_pda(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[VAULT_AUTHORITY_SEED, pool.as_ref()], &FORGE_PROGRAM_ID)
}

// Fetch and decode a pool account
// Returns None when no account exists at the address
pub fn fetch_pool(svm: &LiteSVM, pool: &Pubkey) -> Option<Pool> {
    let account = svm.get_account(pool)?;
    Pool::try_deserialize(&mut account.data.as_slice()).ok()
}

// Build initialize_pool instruction
// The pool account co-signs its own creation
pub fn build_initialize_pool_ix(pool: &Pubkey, user: &Pubkey, fee: u64) -> Instruction {
    let discriminator = anchor_discriminator("initialize_pool");

    let mut data = discriminator.to_vec();
    data.extend_from_slice(&fee.to_le_bytes());

    Instruction {
        program_id: FORGE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*pool, true),
            AccountMeta::new(*user, true),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build add_liquidity instruction
pub fn build_add_liquidity_ix(
    pool: &Pubkey,
    user: &Pubkey,
    token_a: &Pubkey,
    token_b: &Pubkey,
    pool_a: &Pubkey,
    pool_b: &Pubkey,
    amount_a: u64,
    amount_b: u64,
) -> Instruction {
    let (vault_authority, _) = derive_vault_authority_pda(pool);

    let discriminator = anchor_discriminator("add_liquidity");

    let mut data = discriminator.to_vec();
    data.extend_from_slice(&amount_a.to_le_bytes());
    data.extend_from_slice(&amount_b.to_le_bytes());

    Instruction {
        program_id: FORGE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*pool, false),
            AccountMeta::new(*user, true),
            AccountMeta::new(*token_a, false),
            AccountMeta::new(*token_b, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(*pool_a, false),
            AccountMeta::new(*pool_b, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}

// Build swap instruction
pub fn build_swap_ix(
    pool: &Pubkey,
    user: &Pubkey,
    user_token_a: &Pubkey,
    user_token_b: &Pubkey,
    pool_a: &Pubkey,
    pool_b: &Pubkey,
    amount_in: u64,
) -> Instruction {
    let (vault_authority, _) = derive_vault_authority_pda(pool);

    let discriminator = anchor_discriminator("swap");

    let mut data = discriminator.to_vec();
    data.extend_from_slice(&amount_in.to_le_bytes());

    Instruction {
        program_id: FORGE_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*pool, false),
            AccountMeta::new_readonly(*user, true),
            AccountMeta::new(*user_token_a, false),
            AccountMeta::new(*user_token_b, false),
            AccountMeta::new_readonly(vault_authority, false),
            AccountMeta::new(*pool_a, false),
            AccountMeta::new(*pool_b, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        ],
        data,
    }
}
