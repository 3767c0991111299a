// Swap Instruction
//
// Swaps tokens using constant product formula (x * y = k).
// Fee is deducted from input before calculating output; the full input,
// fee included, stays in the input vault.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{curve, derivation, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Swap<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        constraint = derivation::is_config_address(&config.key(), config.seed, config.config_bump)
            @ AmmError::BadDerivation,
    )]
    pub config: Box<Account<'info, Config>>,

    #[account(address = config.mint_x @ AmmError::InvalidMint)]
    pub mint_x: Box<Account<'info, Mint>>,

    #[account(address = config.mint_y @ AmmError::InvalidMint)]
    pub mint_y: Box<Account<'info, Mint>>,

    #[account(
        mut,
        address = derivation::vault_address(&config.key(), &config.mint_x) @ AmmError::BadDerivation,
    )]
    pub vault_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        address = derivation::vault_address(&config.key(), &config.mint_y) @ AmmError::BadDerivation,
    )]
    pub vault_y: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_x,
        associated_token::authority = user,
    )]
    pub user_x: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_y,
        associated_token::authority = user,
    )]
    pub user_y: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Swap<'info> {
    pub fn swap(
        &mut self,
        x_to_y: bool,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<SwapResult> {
        self.config.assert_not_locked()?;

        let (reserve_in, reserve_out) = if x_to_y {
            (self.vault_x.amount, self.vault_y.amount)
        } else {
            (self.vault_y.amount, self.vault_x.amount)
        };

        let amount_out = curve::swap_quote(
            amount_in,
            reserve_in,
            reserve_out,
            self.config.fee_bps,
            min_amount_out,
        )?;

        let (user_in, vault_in, vault_out, user_out) = if x_to_y {
            (&self.user_x, &self.vault_x, &self.vault_y, &self.user_y)
        } else {
            (&self.user_y, &self.vault_y, &self.vault_x, &self.user_x)
        };

        require!(user_in.amount >= amount_in, AmmError::InsufficientFunds);

        let token_program = self.token_program.to_account_info();

        pay_into_vault(
            amount_in,
            &token_program,
            &user_in.to_account_info(),
            &vault_in.to_account_info(),
            &self.user.to_account_info(),
        )?;

        pay_out_of_vault(
            amount_out,
            &token_program,
            &vault_out.to_account_info(),
            &user_out.to_account_info(),
            &self.config,
        )?;

        // swap_quote checked both sides for overflow and amount_out < reserve_out
        let new_reserve_in = reserve_in + amount_in;
        let new_reserve_out = reserve_out - amount_out;
        let (reserve_x, reserve_y) = if x_to_y {
            (new_reserve_in, new_reserve_out)
        } else {
            (new_reserve_out, new_reserve_in)
        };

        emit!(Swapped {
            config: self.config.key(),
            user: self.user.key(),
            x_to_y,
            amount_in,
            amount_out,
            reserve_x,
            reserve_y,
        });

        if x_to_y {
            msg!("Swapped {} X -> {} Y", amount_in, amount_out);
        } else {
            msg!("Swapped {} Y -> {} X", amount_in, amount_out);
        }

        Ok(SwapResult {
            amount_in,
            amount_out,
            reserve_x,
            reserve_y,
        })
    }
}
