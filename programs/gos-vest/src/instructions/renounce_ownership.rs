use anchor_lang::prelude::*;

use crate::instructions::transfer_ownership::{ChangeOwner, OwnershipTransferred};

pub fn renounce_ownership(ctx: Context<ChangeOwner>) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let ledger_key = ctx.accounts.vesting_state.key();

    ctx.accounts.vesting_state.ledger.renounce_ownership(&caller)?;

    msg!("ownership of ledger {} renounced", ledger_key);
    emit!(OwnershipTransferred {
        ledger: ledger_key,
        previous_owner: caller,
        new_owner: Pubkey::default(),
    });
    Ok(())
}
