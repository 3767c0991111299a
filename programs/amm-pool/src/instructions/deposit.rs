// Deposit Liquidity Instruction
//
// Mints exactly `lp_amount` LP tokens to the depositor.
// First deposit: contributes max_x / max_y and sets the price
// Subsequent: contributions proportional to reserves, rounded up

use anchor_lang::prelude::*;
use anchor_spl::{
    associated_token::AssociatedToken,
    token::{Mint, Token, TokenAccount},
};

use crate::{curve, derivation, errors::*, events::*, helpers::*, state::*};

#[derive(Accounts)]
pub struct Deposit<'info> {
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
        mut,
        token::mint = mint_x,
        token::authority = user,
    )]
    pub user_x: Box<Account<'info, TokenAccount>>,

    #[account(
        mut,
        token::mint = mint_y,
        token::authority = user,
    )]
    pub user_y: Box<Account<'info, TokenAccount>>,

    #[account(
        init_if_needed,
        payer = user,
        associated_token::mint = mint_lp,
        associated_token::authority = user,
    )]
    pub user_lp: Box<Account<'info, TokenAccount>>,

    pub token_program: Program<'info, Token>,
    pub associated_token_program: Program<'info, AssociatedToken>,
    pub system_program: Program<'info, System>,
}

impl<'info> Deposit<'info> {
    pub fn deposit(&mut self, lp_amount: u64, max_x: u64, max_y: u64) -> Result<PoolBalances> {
        self.config.assert_not_locked()?;

        let reserve_x = self.vault_x.amount;
        let reserve_y = self.vault_y.amount;
        let lp_supply = self.mint_lp.supply;

        let (amount_x, amount_y) =
            curve::deposit_amounts(lp_amount, max_x, max_y, reserve_x, reserve_y, lp_supply)?;

        require!(
            self.user_x.amount >= amount_x && self.user_y.amount >= amount_y,
            AmmError::InsufficientFunds
        );

        let balances = PoolBalances {
            reserve_x: reserve_x.checked_add(amount_x).ok_or(AmmError::Overflow)?,
            reserve_y: reserve_y.checked_add(amount_y).ok_or(AmmError::Overflow)?,
            lp_supply: lp_supply.checked_add(lp_amount).ok_or(AmmError::Overflow)?,
        };

        let token_program = self.token_program.to_account_info();
        let user = self.user.to_account_info();

        pay_into_vault(
            amount_x,
            &token_program,
            &self.user_x.to_account_info(),
            &self.vault_x.to_account_info(),
            &user,
        )?;
        pay_into_vault(
            amount_y,
            &token_program,
            &self.user_y.to_account_info(),
            &self.vault_y.to_account_info(),
            &user,
        )?;

        mint_lp_to(
            lp_amount,
            &token_program,
            &self.mint_lp.to_account_info(),
            &self.user_lp.to_account_info(),
            &self.config,
        )?;

        emit!(LiquidityDeposited {
            config: self.config.key(),
            user: self.user.key(),
            lp_amount,
            amount_x,
            amount_y,
            reserve_x: balances.reserve_x,
            reserve_y: balances.reserve_y,
            lp_supply: balances.lp_supply,
        });

        msg!("Deposited: {} X, {} Y -> {} LP", amount_x, amount_y, lp_amount);

        Ok(balances)
    }
}
