// Lock Pool Instruction
//
// Emergency pause mechanism. Only pool authority can lock.
// Locking an already locked pool succeeds and leaves it locked.

use anchor_lang::prelude::*;

use crate::{derivation, errors::*, events::*, state::*};

#[derive(Accounts)]
pub struct LockPool<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        constraint = derivation::is_config_address(&config.key(), config.seed, config.config_bump)
            @ AmmError::BadDerivation,
    )]
    pub config: Account<'info, Config>,
}

impl<'info> LockPool<'info> {
    pub fn lock_pool(&mut self) -> Result<()> {
        self.config.lock(&self.authority.key())?;

        emit!(PoolLockChanged {
            config: self.config.key(),
            authority: self.authority.key(),
            locked: true,
        });

        msg!("Pool locked by {}", self.authority.key());

        Ok(())
    }
}
