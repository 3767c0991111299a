// Constant Product AMM Pool Program
//
// Two-token pool priced by x * y = k. Each pool is keyed by a u64 seed and
// owns an LP mint plus one vault per token, all controlled by its config PDA.
//
// Instructions:
// - initialize: Create the pool for a seed and token pair
// - deposit: Add tokens proportionally, receive an exact LP amount
// - withdraw: Burn LP tokens, receive a proportional share of both reserves
// - swap: Exchange one token for the other, fee charged on input
// - lock / unlock: Emergency pause controlled by the pool authority

use anchor_lang::prelude::*;

pub mod constants;
pub mod curve;
pub mod derivation;
pub mod errors;
pub mod events;
pub mod helpers;
pub mod instructions;
pub mod state;

use instructions::*;
use state::{PoolBalances, SwapResult};

declare_id!("6f9oVffZD8ju5iXLFmVP2NUhVMRMpqLwmj4444Z3XLcp");

#[program]
pub mod amm_pool {
    use super::*;

    pub fn initialize(
        ctx: Context<Initialize>,
        seed: u64,
        fee_bps: u16,
        authority: Option<Pubkey>,
    ) -> Result<()> {
        ctx.accounts.initialize(seed, fee_bps, authority, &ctx.bumps)
    }

    pub fn deposit(
        ctx: Context<Deposit>,
        lp_amount: u64,
        max_x: u64,
        max_y: u64,
    ) -> Result<PoolBalances> {
        ctx.accounts.deposit(lp_amount, max_x, max_y)
    }

    pub fn withdraw(
        ctx: Context<Withdraw>,
        lp_amount: u64,
        min_x: u64,
        min_y: u64,
    ) -> Result<PoolBalances> {
        ctx.accounts.withdraw(lp_amount, min_x, min_y)
    }

    pub fn swap(
        ctx: Context<Swap>,
        x_to_y: bool,
        amount_in: u64,
        min_amount_out: u64,
    ) -> Result<SwapResult> {
        ctx.accounts.swap(x_to_y, amount_in, min_amount_out)
    }

    pub fn lock(ctx: Context<LockPool>) -> Result<()> {
        ctx.accounts.lock_pool()
    }

    pub fn unlock(ctx: Context<UnlockPool>) -> Result<()> {
        ctx.accounts.unlock_pool()
    }
}
