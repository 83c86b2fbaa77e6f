use anchor_lang::prelude::*;
use anchor_spl::token::{self, Token, TokenAccount, Transfer};

use crate::constants::{VAULT_SEED, VESTING_SEED};
use crate::error::VestingError;
use crate::state::VestingState;

pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
    require!(amount > 0, VestingError::InvalidAmount);

    let st = &ctx.accounts.vesting_state;
    st.ledger.authorize_owner(&ctx.accounts.owner.key())?;

    let vault_balance = (ctx.accounts.vault.amount as u128)
        .checked_add(amount as u128)
        .ok_or(VestingError::MathOverflow)?;
    require!(
        vault_balance <= st.ledger.schedule().total_amount,
        VestingError::OverDeposit
    );

    token::transfer(
        CpiContext::new(
            ctx.accounts.token_program.to_account_info(),
            Transfer {
                from: ctx.accounts.owner_token_account.to_account_info(),
                to: ctx.accounts.vault.to_account_info(),
                authority: ctx.accounts.owner.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(TokensDeposited {
        ledger: ctx.accounts.vesting_state.key(),
        owner: ctx.accounts.owner.key(),
        amount,
        vault_balance,
    });

    Ok(())
}

#[derive(Accounts)]
pub struct DepositTokens<'info> {
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
        constraint = owner_token_account.mint == vesting_state.mint @ VestingError::InvalidTokenMint,
        constraint = owner_token_account.owner == owner.key() @ VestingError::InvalidTokenAccount,
    )]
    pub owner_token_account: Account<'info, TokenAccount>,

    pub owner: Signer<'info>,

    pub token_program: Program<'info, Token>,
}

#[event]
pub struct TokensDeposited {
    pub ledger: Pubkey,
    pub owner: Pubkey,
    pub amount: u64,
    pub vault_balance: u128,
}
