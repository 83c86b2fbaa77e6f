use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod instructions;
pub mod ledger;
pub mod state;
pub mod utils;

pub use instructions::*;

declare_id!("7JqurVNY5srRwAAzc8j8QAXR6vpFb3L1v2BtCTCg2uhJ");

#[program]
pub mod gos_vest {
    use super::*;

    pub fn initialize_vesting(
        ctx: Context<InitializeVesting>,
        ledger_id: u64,
        beneficiary: Pubkey,
        total_amount: u64,
        monthly_amount: Option<u64>,
    ) -> Result<()> {
        instructions::initialize_vesting::initialize_vesting(
            ctx,
            ledger_id,
            beneficiary,
            total_amount,
            monthly_amount,
        )
    }

    pub fn deposit_tokens(ctx: Context<DepositTokens>, amount: u64) -> Result<()> {
        instructions::deposit_tokens::deposit_tokens(ctx, amount)
    }

    pub fn claim_tokens(ctx: Context<ClaimTokens>) -> Result<()> {
        instructions::claim_tokens::claim_tokens(ctx)
    }

    pub fn force_vest(ctx: Context<ForceVest>) -> Result<()> {
        instructions::force_vest::force_vest(ctx)
    }

    pub fn sweep(ctx: Context<Sweep>) -> Result<()> {
        instructions::sweep::sweep(ctx)
    }

    pub fn sweep_gos(ctx: Context<SweepGos>) -> Result<()> {
        instructions::sweep_gos::sweep_gos(ctx)
    }

    pub fn update_beneficiary(
        ctx: Context<UpdateBeneficiary>,
        new_beneficiary: Pubkey,
    ) -> Result<()> {
        instructions::update_beneficiary::update_beneficiary(ctx, new_beneficiary)
    }

    pub fn transfer_ownership(ctx: Context<ChangeOwner>, new_owner: Pubkey) -> Result<()> {
        instructions::transfer_ownership::transfer_ownership(ctx, new_owner)
    }

    pub fn renounce_ownership(ctx: Context<ChangeOwner>) -> Result<()> {
        instructions::renounce_ownership::renounce_ownership(ctx)
    }

    pub fn emit_vesting_quote(ctx: Context<EmitVestingQuote>) -> Result<()> {
        instructions::emit_vesting_quote::emit_vesting_quote(ctx)
    }
}
