// Address derivation for pool accounts
//
// config    = PDA ["config", seed.to_le_bytes()]
// LP mint   = PDA ["lp", config]
// vault X/Y = associated token account of (config, mint)
//
// The `find` forms search for the canonical bump and are used by initialize
// and by clients. The `is_*` forms re-derive from a stored bump and are what
// account constraints use on every other instruction.

use anchor_lang::prelude::*;
use anchor_spl::associated_token::get_associated_token_address;

use crate::constants::*;

pub fn config_address(seed: u64) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED, &seed.to_le_bytes()], &crate::ID)
}

pub fn lp_mint_address(config: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[LP_MINT_SEED, config.as_ref()], &crate::ID)
}

pub fn vault_address(config: &Pubkey, mint: &Pubkey) -> Pubkey {
    get_associated_token_address(config, mint)
}

pub fn is_config_address(key: &Pubkey, seed: u64, bump: u8) -> bool {
    Pubkey::create_program_address(&[CONFIG_SEED, &seed.to_le_bytes(), &[bump]], &crate::ID)
        .map_or(false, |expected| expected == *key)
}

pub fn is_lp_mint_address(key: &Pubkey, config: &Pubkey, bump: u8) -> bool {
    Pubkey::create_program_address(&[LP_MINT_SEED, config.as_ref(), &[bump]], &crate::ID)
        .map_or(false, |expected| expected == *key)
}
