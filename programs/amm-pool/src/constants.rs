// AMM Program Constants

// Seeds for PDA derivation: ["config", seed.to_le_bytes()]
pub const CONFIG_SEED: &[u8] = b"config";

// Seeds for PDA derivation: ["lp", config]
pub const LP_MINT_SEED: &[u8] = b"lp";

// Fees are expressed in basis points of the swap input
pub const BPS_DENOMINATOR: u16 = 10_000;

pub const LP_DECIMALS: u8 = 6;

pub const ANCHOR_DISCRIMINATOR: usize = 8;
