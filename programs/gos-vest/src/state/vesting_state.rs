use anchor_lang::prelude::*;

use crate::ledger::VestingLedger;

/// Vesting state PDA: one ledger per `(mint, ledger_id)`.
#[account]
pub struct VestingState {
    /// Vesting token mint.
    pub mint: Pubkey,
    /// Caller-chosen discriminator so one mint can back several ledgers.
    pub ledger_id: u64,
    /// Bump of this PDA.
    pub bump: u8,
    /// Bump of the vault token account PDA.
    pub vault_bump: u8,
    /// Schedule, roles and claim progress.
    pub ledger: VestingLedger,
}

impl VestingState {
    pub const SIZE: usize =
        32 + // mint
        8 +  // ledger_id
        1 +  // bump
        1 +  // vault_bump
        VestingLedger::SIZE;
}
