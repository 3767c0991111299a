// Initialize Pool Instruction
//
// Creates the config record for `seed`, the LP mint and both vaults.
// The config account is created by the handler rather than by an `init`
// constraint so an existing pool is reported as AlreadyInitialized.
// The LP mint and vaults use init_if_needed: when the pool already exists
// they pass validation and the config check rejects the call, and a vault
// ATA pre-created by a third party does not block initialization.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{constants::*, derivation, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    pub mint_x: Box<Account<'info, Mint>>,
    pub mint_y: Box<Account<'info, Mint>>,

    /// CHECK: derivation and emptiness are verified in the handler, which creates it
    #[account(mut)]
    pub config: UncheckedAccount<'info>,

    #[account(
        init_if_needed,
        payer = admin,
        seeds = [LP_MINT_SEED, config.key().as_ref()],
        bump,
        mint::decimals = LP_DECIMALS,
        mint::authority = config,
    )]
    pub mint_lp: Box<Account<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint_x,
        associated_token::authority = config,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = admin,
        associated_token::mint = mint_y,
        associated_token::authority = config,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Initialize<'info> {
    pub fn initialize(
        &mut self,
        seed: u64,
        fee_bps: u16,
        authority: Option<Pubkey>,
        bumps: &InitializeBumps,
    ) -> Result<()> {
        require!(fee_bps < BPS_DENOMINATOR, AmmError::FeeTooHigh);

        require_keys_neq!(
            self.mint_x.key(),
            self.mint_y.key(),
            AmmError::IdenticalMints
        );

        let (expected_config, config_bump) = derivation::config_address(seed);
        require_keys_eq!(self.config.key(), expected_config, AmmError::BadDerivation);

        require!(
            self.config.owner != &crate::ID && self.config.data_is_empty(),
            AmmError::AlreadyInitialized
        );

        let seed_bytes = seed.to_le_bytes();
        create_pda_account(
            ANCHOR_DISCRIMINATOR + Config::INIT_SPACE,
            &self.admin.to_account_info(),
            &self.config.to_account_info(),
            &self.system_program.to_account_info(),
            &[CONFIG_SEED, &seed_bytes, &[config_bump]],
        )?;

        let config = Config {
            seed,
            authority,
            mint_x: self.mint_x.key(),
            mint_y: self.mint_y.key(),
            mint_lp: self.mint_lp.key(),
            fee_bps,
            locked: false,
            config_bump,
            lp_bump: bumps.mint_lp,
        };

        {
            let mut data = self.config.try_borrow_mut_data()?;
            config.try_serialize(&mut &mut data[..])?;
        }

        emit!(PoolInitialized {
            config: self.config.key(),
            seed,
            mint_x: config.mint_x,
            mint_y: config.mint_y,
            mint_lp: config.mint_lp,
            fee_bps,
            authority,
        });

        msg!("Pool {} initialized: {} / {}", seed, config.mint_x, config.mint_y);
        msg!("Fee: {} basis points", fee_bps);

        Ok(())
    }
}
