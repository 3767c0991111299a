// Unlock Pool Instruction
//
// Re-enables pool operations. Only pool authority can unlock, and unlock
// is accepted whether or not the pool is currently locked.

use anchor_lang::prelude::*;

use crate::{derivation, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct UnlockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = derivation::is_config_address(&config.key(), config.seed, config.config_bump)
            @ AmmError::BadDerivation,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> UnlockPool<'info> {
    pub fn unlock_pool(&mut self) -> Result<()> {
        self.config.unlock(&self.authority.key())?;

        emit!(PoolLockChanged {
            config: self.config.key(),
            authority: self.authority.key(),
            locked: false,
        });

        msg!("Pool unlocked by {}", self.authority.key());

        Ok(())
    }
}
