use anchor_lang::prelude::*;

/// Error codes for the vesting ledger and its program surface.
#[error_code]
pub enum VestingError {
    #[msg("Unauthorized: caller does not hold the required role")]
    Unauthorized,

    #[msg("No tokens due for claim")]
    NothingDue,

    #[msg("Not enough tokens in ledger")]
    InsufficientFunds,

    #[msg("Invalid public key")]
    InvalidPubkey,

    #[msg("Invalid schedule configuration")]
    InvalidConfig,

    #[msg("Invalid amount (must be > 0)")]
    InvalidAmount,

    #[msg("Invalid token mint")]
    InvalidTokenMint,

    #[msg("Invalid token account")]
    InvalidTokenAccount,

    #[msg("Deposit would exceed total vesting amount")]
    OverDeposit,

    #[msg("Math overflow")]
    MathOverflow,
}
