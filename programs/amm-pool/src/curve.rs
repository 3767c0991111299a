// Constant Product Curve
//
// Pure share-accounting and pricing math for the pool (x * y = k).
// Every function here is host-callable so clients can quote slippage bounds
// with exactly the numbers the program will use.
//
// Rounding always favors the pool:
// - deposits round contributions UP (ceil)
// - withdrawals round payouts DOWN (floor)
// - swaps truncate the post-fee input and floor the output

use anchor_lang::prelude::*;

use crate::{constants::*, errors::*};

// Token amounts a depositor must contribute to receive `lp_amount` LP tokens.
//
// An empty pool (`lp_supply == 0`) takes exactly `max_x` / `max_y` and the
// first depositor sets the price. Otherwise the contributions keep the
// current reserve ratio and must fit under the slippage ceilings.
pub fn deposit_amounts(
    lp_amount: u64,
    max_x: u64,
    max_y: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64)> {
    require!(lp_amount > 0, AmmError::ZeroLiquidity);

    if lp_supply == 0 {
        require!(max_x > 0 && max_y > 0, AmmError::ZeroLiquidity);
        return Ok((max_x, max_y));
    }

    let amount_x = mul_div_ceil(lp_amount, reserve_x, lp_supply)?;
    let amount_y = mul_div_ceil(lp_amount, reserve_y, lp_supply)?;

    require!(
        amount_x <= max_x && amount_y <= max_y,
        AmmError::SlippageExceeded
    );

    Ok((amount_x, amount_y))
}

// Token amounts paid out for burning `lp_amount` LP tokens.
pub fn withdraw_amounts(
    lp_amount: u64,
    min_x: u64,
    min_y: u64,
    reserve_x: u64,
    reserve_y: u64,
    lp_supply: u64,
) -> Result<(u64, u64)> {
    require!(lp_amount > 0, AmmError::ZeroAmount);
    require!(
        lp_supply > 0 && lp_amount <= lp_supply,
        AmmError::InsufficientLpBalance
    );

    let amount_x = mul_div_floor(lp_amount, reserve_x, lp_supply)?;
    let amount_y = mul_div_floor(lp_amount, reserve_y, lp_supply)?;

    require!(
        amount_x >= min_x && amount_y >= min_y,
        AmmError::SlippageExceeded
    );

    Ok((amount_x, amount_y))
}

// Input left after the swap fee, truncated so the fee is never under-collected.
pub fn amount_after_fee(amount_in: u64, fee_bps: u16) -> Result<u64> {
    require!(fee_bps < BPS_DENOMINATOR, AmmError::FeeTooHigh);

    let net = (amount_in as u128)
        .checked_mul((BPS_DENOMINATOR - fee_bps) as u128)
        .ok_or(AmmError::Overflow)?
        / BPS_DENOMINATOR as u128;

    u64::try_from(net).map_err(|_| error!(AmmError::Overflow))
}

// Output amount for swapping `amount_in` into a pool holding
// `reserve_in` / `reserve_out`.
//
// The full `amount_in` (fee included) is credited to the input reserve, so
// the fee stays in the pool and `k` never decreases.
pub fn swap_quote(
    amount_in: u64,
    reserve_in: u64,
    reserve_out: u64,
    fee_bps: u16,
    min_amount_out: u64,
) -> Result<u64> {
    require!(amount_in > 0, AmmError::ZeroAmount);
    require!(reserve_in > 0 && reserve_out > 0, AmmError::EmptyPool);

    let net_in = amount_after_fee(amount_in, fee_bps)?;

    let numerator = (reserve_out as u128)
        .checked_mul(net_in as u128)
        .ok_or(AmmError::Overflow)?;
    let denominator = (reserve_in as u128)
        .checked_add(net_in as u128)
        .ok_or(AmmError::Overflow)?;
    let amount_out =
        u64::try_from(numerator / denominator).map_err(|_| error!(AmmError::Overflow))?;

    require!(amount_out >= min_amount_out, AmmError::SlippageExceeded);
    require!(amount_out > 0, AmmError::ZeroAmount);
    require!(amount_out < reserve_out, AmmError::InvariantViolation);

    let new_reserve_in = reserve_in
        .checked_add(amount_in)
        .ok_or(AmmError::Overflow)?;
    require!(
        invariant(new_reserve_in, reserve_out - amount_out) >= invariant(reserve_in, reserve_out),
        AmmError::InvariantViolation
    );

    Ok(amount_out)
}

pub fn invariant(reserve_x: u64, reserve_y: u64) -> u128 {
    reserve_x as u128 * reserve_y as u128
}

fn mul_div_floor(a: u64, b: u64, denominator: u64) -> Result<u64> {
    let product = (a as u128).checked_mul(b as u128).ok_or(AmmError::Overflow)?;
    let quotient = product
        .checked_div(denominator as u128)
        .ok_or(AmmError::EmptyPool)?;
    u64::try_from(quotient).map_err(|_| error!(AmmError::Overflow))
}

fn mul_div_ceil(a: u64, b: u64, denominator: u64) -> Result<u64> {
    require!(denominator > 0, AmmError::EmptyPool);
    let product = (a as u128).checked_mul(b as u128).ok_or(AmmError::Overflow)?;
    let quotient = product.div_ceil(denominator as u128);
    u64::try_from(quotient).map_err(|_| error!(AmmError::Overflow))
}
