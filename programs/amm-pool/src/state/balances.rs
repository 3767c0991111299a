use anchor_lang::prelude::*;

// Returned by deposit and withdraw
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct PoolBalances {
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,
}

// Returned by swap
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct SwapResult {
    pub amount_in: u64,
    pub amount_out: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
}
