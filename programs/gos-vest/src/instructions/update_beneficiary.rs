use anchor_lang::prelude::*;

use crate::constants::VESTING_SEED;
use crate::state::VestingState;

pub fn update_beneficiary(
    ctx: Context<UpdateBeneficiary>,
    new_beneficiary: Pubkey,
) -> Result<()> {
    let caller = ctx.accounts.owner.key();
    let ledger_key = ctx.accounts.vesting_state.key();

    let st = &mut ctx.accounts.vesting_state;
    let old = st.ledger.update_beneficiary(&caller, new_beneficiary)?;

    emit!(BeneficiaryUpdated {
        ledger: ledger_key,
        old_beneficiary: old,
        new_beneficiary,
    });
    Ok(())
}

#[derive(Accounts)]
pub struct UpdateBeneficiary<'info> {
    #[account(
        mut,
        seeds = [VESTING_SEED, vesting_state.mint.as_ref(), vesting_state.ledger_id.to_le_bytes().as_ref()],
        bump = vesting_state.bump
    )]
    pub vesting_state: Account<'info, VestingState>,

    pub owner: Signer<'info>,
}

#[event]
pub struct BeneficiaryUpdated {
    pub ledger: Pubkey,
    pub old_beneficiary: Pubkey,
    pub new_beneficiary: Pubkey,
}
