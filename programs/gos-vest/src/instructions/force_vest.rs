use anchor_lang::prelude::*;
use anchor_spl::token::{Token, TokenAccount};

use crate::constants::{VAULT_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::VestingState;
use crate::utils::VaultStore;

pub fn force_vest(ctx: Context<ForceVest>) -> Result<()> {
    let caller = ctx.accounts.owner.key();
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
        &ctx.accounts.beneficiary_token_account,
        authority,
        ctx.accounts.token_program.to_account_info(),
        signer_seeds,
    )?;

    let st = &mut ctx.accounts.vesting_state;
    let amount = st.ledger.force_vest(&caller, &mut store)?;

    msg!("force vest released {}", amount);
    emit!(ForceVested {
        ledger: ledger_key,
        owner: caller,
        beneficiary: st.ledger.beneficiary(),
        amount,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct ForceVest<'info> {
    #[account(
        mut,
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
        constraint = beneficiary_token_account.owner == vesting_state.ledger.beneficiary() @ VestingError::InvalidTokenAccount,
    )]
    pub beneficiary_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct ForceVested {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub beneficiary: Pubkey,
    pub amount: u128,
}
