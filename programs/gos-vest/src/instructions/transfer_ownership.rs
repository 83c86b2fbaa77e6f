use anchor_lang::prelude::*;

use crate::constants::VESTING_SEED;
use crate::state::VestingState;

pub fn transfer_ownership(ctx: Context<ChangeOwner>, new_owner: Pubkey) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let ledger_key = ctx.accounts.vesting_state.key();

    ctx.accounts
        .vesting_state
        .ledger
        .transfer_ownership(&caller, new_owner)?;

    emit!(OwnershipTransferred {
        ledger: ledger_key,
        previous_owner: caller,
        new_owner,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct ChangeOwner<'info> {
    #[account(
        mut,
        seeds = [VESTING_SEED, vesting_state.mint.as_ref(), vesting_state.ledger_id.to_le_bytes().as_ref()],
        bump = vesting_state.bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

/// `new_owner` is the default key when ownership was renounced.
#[event]
pub struct OwnershipTransferred {
    pub ledger: Pubkey,
    pub previous_owner: Pubkey,
    pub new_owner: Pubkey,
}
