//! Program-wide constants.

/// Vesting duration in 30-day months.
pub const DURATION_MONTHS: u8 = 24;

/// Length of one vesting month in seconds (30 days).
pub const SECONDS_PER_MONTH: i64 = 2_592_000;

/// Seed prefix of the vesting state PDA: `[VESTING_SEED, mint, ledger_id_le]`.
pub const VESTING_SEED: &[u8] = b"gos_vest";

/// Seed prefix of the vault token account PDA: `[VAULT_SEED, vesting_state]`.
pub const VAULT_SEED: &[u8] = b"vault";
