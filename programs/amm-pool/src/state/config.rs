// Pool Configuration State

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

#[account]
#[derive(InitSpace, Debug)]
pub struct Config {
    pub seed: u64,                  // Caller-chosen pool id, part of the config PDA
    pub authority: Option<Pubkey>,  // Can lock/unlock pool; None means never
    pub mint_x: Pubkey,             // First token in pair
    pub mint_y: Pubkey,             // Second token in pair
    pub mint_lp: Pubkey,            // LP token mint (PDA of this config)
    pub fee_bps: u16,               // Swap fee on input (e.g., 30 = 0.30%)
    pub locked: bool,               // Emergency pause state
    pub config_bump: u8,            // PDA bump for config
    pub lp_bump: u8,                // PDA bump for LP mint
}

impl Config {
    pub fn lock(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_is_authority(caller)?;
        self.locked = true;
        Ok(())
    }

    pub fn unlock(&mut self, caller: &Pubkey) -> Result<()> {
        self.assert_is_authority(caller)?;
        self.locked = false;
        Ok(())
    }

    pub fn assert_not_locked(&self) -> Result<()> {
        require!(!self.locked, AmmError::PoolLocked);
        Ok(())
    }

    // Runs `f` with the signer seeds of the config PDA, which owns both
    // vaults and is the LP mint authority
    pub fn with_signer_seeds<R>(&self, f: impl FnOnce(&[&[&[u8]]]) -> R) -> R {
        let seed_bytes = self.seed.to_le_bytes();
        let bump = [self.config_bump];
        let seeds: &[&[u8]] = &[CONFIG_SEED, &seed_bytes, &bump];
        f(&[seeds])
    }

    // A pool created without an authority fails closed here
    pub fn assert_is_authority(&self, caller: &Pubkey) -> Result<()> {
        match self.authority {
            Some(authority) if authority == *caller => Ok(()),
            _ => err!(AmmError::InvalidAuthority),
        }
    }
}
