use anchor_lang::prelude::*;

use crate::constants::VESTING_SEED;
use crate::ledger::VestingStatus;
use crate::state::VestingState;

/// Read-only view of the ledger at the current clock, published as an event.
pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
    let st = &ctx.accounts.vesting_state;
    let now = Clock::get()?.unix_timestamp;
    let ledger = &st.ledger;

    emit!(VestingQuote {
        ledger: st.key(),
        beneficiary: ledger.beneficiary(),
        elapsed_months: ledger.elapsed_months(now),
        claimed_months: ledger.claimed_months(),
        tokens_due: ledger.tokens_due(now)?,
        tokens_remaining: ledger.tokens_remaining(),
        next_unlock_ts: ledger.next_unlock_ts(now)?,
        vesting_end_ts: ledger.schedule().end_ts()?,
        fully_vested: ledger.status() == VestingStatus::FullyVested,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct EmitVestingQuote<'info> {
    #[account(
        seeds = [VESTING_SEED, vesting_state.mint.as_ref(), vesting_state.ledger_id.to_le_bytes().as_ref()],
        bump = vesting_state.bump
    )]
    pub vesting_state: Account<'info, VestingState>,
}

#[event]
pub struct VestingQuote {
    pub ledger: Pubkey,
    pub beneficiary: Pubkey,
    pub elapsed_months: u8,
    pub claimed_months: u8,
    pub tokens_due: u128,
    pub tokens_remaining: u128,
    pub next_unlock_ts: Option<i64>,
    pub vesting_end_ts: i64,
    pub fully_vested: bool,
}
