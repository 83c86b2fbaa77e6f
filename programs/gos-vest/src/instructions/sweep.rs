use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::VESTING_SEED;
use crate::error::VestingError;
use crate::state::VestingState;
use crate::utils::VaultStore;

/// Drains any token account held by the ledger PDA, vesting token included.
pub fn sweep(ctx: Context<Sweep>) -> Result<()> {
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
        &ctx.accounts.source,
        &ctx.accounts.destination,
        authority,
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    let amount = ctx
        .accounts
        .vesting_state
        .ledger
        .sweep(&caller, &mut store, &recipient)?;

    msg!("swept {} of mint {}", amount, ctx.accounts.source.mint);
    emit!(TokensSwept {
        ledger: ledger_key,
        mint: ctx.accounts.source.mint,
        recipient,
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct Sweep<'info> {
    #[account(
        seeds = [VESTING_SEED, vesting_state.mint.as_ref(), vesting_state.ledger_id.to_le_bytes().as_ref()],
        bump = vesting_state.bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    #[account(
        mut,
        constraint = source.owner == vesting_state.key() @ VestingError::InvalidTokenAccount,
    )]
    pub source: Account<'info, TokenAccount>,

    #[account(
        mut,
        constraint = destination.mint == source.mint @ VestingError::InvalidTokenMint,
    )]
    pub destination: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensSwept {
    pub ledger: Pubkey,
    pub mint: Pubkey,
    pub recipient: Pubkey,
    pub amount: u128,
}
