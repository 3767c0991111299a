use anchor_lang::prelude::*;

#[error_code]
pub enum AmmError {
    // Authorization errors
    #[msg("Only the pool authority can lock or unlock this pool")]
    InvalidAuthority,

    #[msg("Account does not match its expected derived address")]
    BadDerivation,

    // State guard errors
    #[msg("Pool is currently locked - operations are disabled")]
    PoolLocked,

    #[msg("A pool already exists for this seed")]
    AlreadyInitialized,

    // Economic guard errors
    #[msg("Slippage limit exceeded")]
    SlippageExceeded,

    #[msg("Liquidity amounts cannot be zero")]
    ZeroLiquidity,

    #[msg("Amount cannot be zero")]
    ZeroAmount,

    #[msg("Pool has no liquidity")]
    EmptyPool,

    #[msg("Not enough LP tokens to burn")]
    InsufficientLpBalance,

    #[msg("Insufficient token balance for this operation")]
    InsufficientFunds,

    #[msg("Swap would violate the constant product invariant")]
    InvariantViolation,

    // Initialization errors
    #[msg("Fee basis points must be below 10000")]
    FeeTooHigh,

    #[msg("Token mints must be different - cannot create pool with same token")]
    IdenticalMints,

    #[msg("Token mint does not belong to this pool")]
    InvalidMint,

    // Arithmetic errors
    #[msg("Arithmetic overflow occurred")]
    Overflow,
}

#[cfg(test)]
pub(crate) fn error_code(err: anchor_lang::error::Error) -> u32 {
    match err {
        anchor_lang::error::Error::AnchorError(e) => e.error_code_number,
        anchor_lang::error::Error::ProgramError(e) => panic!("unexpected program error: {:?}", e),
    }
}
