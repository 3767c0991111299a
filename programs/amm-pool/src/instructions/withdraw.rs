// Withdraw Liquidity Instruction
//
// Burns LP tokens and returns the proportional share of both reserves,
// rounded down.

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{curve, derivation, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Withdraw<'info> {
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
        constraint = derivation::is_lp_mint_address(&mint_lp.key(), &config.key(), config.lp_bump)
            @ AmmError::BadDerivation,
    )]
    pub mint_lp: Box<Account<'info, Mint>>,

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

    #[account(
        mut,
        token::mint = mint_lp,
        token::authority = user,
    )]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Withdraw<'info> {
    pub fn withdraw(&mut self, lp_amount: u64, min_x: u64, min_y: u64) -> Result<PoolBalances> {
        self.config.assert_not_locked()?;

        require!(
            self.user_lp.amount >= lp_amount,
            AmmError::InsufficientLpBalance
        );

        let reserve_x = self.vault_x.amount;
        let reserve_y = self.vault_y.amount;
        let lp_supply = self.mint_lp.supply;

        let (amount_x, amount_y) =
            curve::withdraw_amounts(lp_amount, min_x, min_y, reserve_x, reserve_y, lp_supply)?;

        // withdraw_amounts bounds lp_amount by lp_supply, so payouts never exceed reserves
        let balances = PoolBalances {
            reserve_x: reserve_x - amount_x,
            reserve_y: reserve_y - amount_y,
            lp_supply: lp_supply - lp_amount,
        };

        let token_program = self.token_program.to_account_info();

        burn_lp(
            lp_amount,
            &token_program,
            &self.mint_lp.to_account_info(),
            &self.user_lp.to_account_info(),
            &self.user.to_account_info(),
        )?;

        pay_out_of_vault(
            amount_x,
            &token_program,
            &self.vault_x.to_account_info(),
            &self.user_x.to_account_info(),
            &self.config,
        )?;
        pay_out_of_vault(
            amount_y,
            &token_program,
            &self.vault_y.to_account_info(),
            &self.user_y.to_account_info(),
            &self.config,
        )?;

        emit!(LiquidityWithdrawn {
            config: self.config.key(),
            user: self.user.key(),
            lp_amount,
            amount_x,
            amount_y,
            reserve_x: balances.reserve_x,
            reserve_y: balances.reserve_y,
            lp_supply: balances.lp_supply,
        });

        msg!("Withdrawn: {} LP -> {} X, {} Y", lp_amount, amount_x, amount_y);

        Ok(balances)
    }
}
