use anchor_lang::prelude::*;

#[event]
pub struct PoolInitialized {
    pub config: Pubkey,
    pub seed: u64,
    pub mint_x: Pubkey,
    pub mint_y: Pubkey,
    pub mint_lp: Pubkey,
    pub fee_bps: u16,
    pub authority: Option<Pubkey>,
}

#[event]
pub struct LiquidityDeposited {
    pub config: Pubkey,
    pub user: Pubkey,
    pub lp_amount: u64,
    pub amount_x: u64,
    pub amount_y: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,
}

#[event]
pub struct LiquidityWithdrawn {
    pub config: Pubkey,
    pub user: Pubkey,
    pub lp_amount: u64,
    pub amount_x: u64,
    pub amount_y: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
    pub lp_supply: u64,
}

#[event]
pub struct Swapped {
    pub config: Pubkey,
    pub user: Pubkey,
    pub x_to_y: bool,
    pub amount_in: u64,
    pub amount_out: u64,
    pub reserve_x: u64,
    pub reserve_y: u64,
}

// Emitted by both lock and unlock, including repeated calls
#[event]
pub struct PoolLockChanged {
    pub config: Pubkey,
    pub authority: Pubkey,
    pub locked: bool,
}
