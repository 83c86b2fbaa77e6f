use anchor_lang::prelude::*;
use anchor_spl::token::{Mint, Token, TokenAccount};

use crate::constants::{DURATION_MONTHS, VAULT_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::ledger::{VestingLedger, VestingSchedule};
use crate::state::VestingState;

pub fn initialize_vesting(
    ctx: Context<InitializeVesting>,
    ledger_id: u64,
    beneficiary: Pubkey,
    total_amount: u64,
    monthly_amount: Option<u64>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let schedule = match monthly_amount {
        Some(monthly) => VestingSchedule::with_monthly_amount(
            total_amount as u128,
            monthly as u128,
            DURATION_MONTHS,
            now,
        )?,
        None => VestingSchedule::new(total_amount as u128, DURATION_MONTHS, now)?,
    };

    let state_key = ctx.accounts.vesting_state.key();
    let mint = ctx.accounts.mint.key();
    let owner = ctx.accounts.owner.key();
    require_keys_neq!(beneficiary, ctx.accounts.vault.key(), VestingError::InvalidConfig);
    let ledger = VestingLedger::new(state_key, mint, owner, beneficiary, schedule)?;

    let st = &mut ctx.accounts.vesting_state;
    st.mint = mint;
    st.ledger_id = ledger_id;
    st.bump = ctx.bumps.vesting_state;
    st.vault_bump = ctx.bumps.vault;
    st.ledger = ledger;

    msg!(
        "vesting ledger {} initialized: total={} monthly={} months={}",
        ledger_id,
        schedule.total_amount,
        schedule.monthly_amount,
        schedule.duration_months
    );
    emit!(VestingInitialized {
        ledger: state_key,
        mint,
        owner,
        beneficiary,
        start_ts: schedule.start_ts,
        total_amount: schedule.total_amount,
        monthly_amount: schedule.monthly_amount,
        duration_months: schedule.duration_months,
    });

    Ok(())
}

#[derive(Accounts)]
#[instruction(ledger_id: u64)]
pub struct InitializeVesting<'info> {
    #[account(
        init,
        payer = owner,
        space = 8 + VestingState::SIZE,
        seeds = [VESTING_SEED, mint.key().as_ref(), ledger_id.to_le_bytes().as_ref()],
        bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        init,
        payer = owner,
        token::mint = mint,
        token::authority = vesting_state,
        seeds = [VAULT_SEED, vesting_state.key().as_ref()],
        bump
    )]
    pub vault: Account<'info, TokenAccount>,

    pub mint: Account<'info, Mint>,

    #[account(mut)]
    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
    pub system_program: Program<'info, System>,
    pub rent: Sysvar<'info, Rent>,
}

#[event]
pub struct VestingInitialized {
    pub ledger: Pubkey,
    pub mint: Pubkey,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub start_ts: i64,
    pub total_amount: u128,
    pub monthly_amount: u128,
    pub duration_months: u8,
}
