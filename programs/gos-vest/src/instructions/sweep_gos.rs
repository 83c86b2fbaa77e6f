use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{VAULT_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::instructions::sweep::TokensSwept;
use crate::state::VestingState;
use crate::utils::VaultStore;

/// Drains the vesting vault to `destination`'s owner. Claim progress is not touched.
pub fn sweep_gos(ctx: Context<SweepGos>) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let recipient = ctx.accounts.destination.owner;
    let ledger_key = ctx.accounts.vesting_state.key();
    let authority = ctx.accounts.vesting_state.to_account_info();

    let mint = ctx.accounts.vesting_state.mint;
    let ledger_id = ctx.accounts.vesting_state.ledger_id.to_le_bytes();
    let bump = [ctx.accounts.vesting_state.bump];
    let seeds: &[&[u8]] = &[VESTING_SEED, mint.as_ref(), &ledger_id, &bump];
    let signer_seeds: &[&[&[u8]]] = &[seeds];

    let mut store = VaultStore::new(
        ledger_key,
        &ctx.accounts.vault,
        &ctx.accounts.destination,
        authority,
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    let amount = ctx
        .accounts
        .vesting_state
        .ledger
        .sweep_gos(&caller, &mut store, &recipient)?;

    msg!("swept {} from vesting vault", amount);
    emit!(TokensSwept {
        ledger: ledger_key,
        mint,
        recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct SweepGos<'info> {
    #[account(
        seeds = [VESTING_SEED, vesting_state.mint.as_ref(), vesting_state.ledger_id.to_le_bytes().as_ref()],
        bump = vesting_state.bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        seeds = [VAULT_SEED, vesting_state.key().as_ref()],
        bump = vesting_state.vault_bump,
        constraint = vault.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub vault: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}
