//! Backend-independent vesting accounting.
//!
//! A [`VestingLedger`] owns one beneficiary's schedule and claim counter and
//! moves tokens only through a [`TokenStore`]. Every mutating call checks
//! roles and balances before touching the store, and records the new claim
//! state only after the transfer succeeded, so a failed call leaves both the
//! ledger and the store unchanged.

pub mod schedule;
pub mod token_store;

pub use schedule::*;
pub use token_store::*;

use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Mutable claim progress of a ledger.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimState {
    /// Months already paid out; never decreases, never exceeds the duration.
    pub claimed_months: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum VestingStatus {
    Active,
    FullyVested,
}

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct VestingLedger {
    /// Address holding the ledger's tokens inside the token store.
    account: Pubkey,
    /// Mint of the vesting token.
    token: Pubkey,
    /// Administrative authority; `None` once ownership is renounced.
    owner: Option<Pubkey>,
    beneficiary: Pubkey,
    schedule: VestingSchedule,
    claim: ClaimState,
}

impl VestingLedger {
    pub const SIZE: usize =
        32 +     // account
        32 +     // token
        1 + 32 + // owner
        32 +     // beneficiary
        VestingSchedule::SIZE +
        1;       // claim.claimed_months

    pub fn new(
        account: Pubkey,
        token: Pubkey,
        owner: Pubkey,
        beneficiary: Pubkey,
        schedule: VestingSchedule,
    ) -> Result<Self> {
        require!(owner != Pubkey::default(), VestingError::InvalidPubkey);
        require!(beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
        require!(beneficiary != account, VestingError::InvalidConfig);
        Ok(Self {
            account,
            token,
            owner: Some(owner),
            beneficiary,
            schedule,
            claim: ClaimState::default(),
        })
    }

    pub fn account(&self) -> Pubkey {
        self.account
    }

    pub fn token(&self) -> Pubkey {
        self.token
    }

    pub fn owner(&self) -> Option<Pubkey> {
        self.owner
    }

    pub fn beneficiary(&self) -> Pubkey {
        self.beneficiary
    }

    pub fn schedule(&self) -> &VestingSchedule {
        &self.schedule
    }

    pub fn start_timestamp(&self) -> i64 {
        self.schedule.start_ts
    }

    pub fn claimed_months(&self) -> u8 {
        self.claim.claimed_months
    }

    pub fn status(&self) -> VestingStatus {
        if self.claim.claimed_months >= self.schedule.duration_months {
            VestingStatus::FullyVested
        } else {
            VestingStatus::Active
        }
    }

    pub fn elapsed_months(&self, now_ts: i64) -> u8 {
        self.schedule.elapsed_months(now_ts)
    }

    /// Vested but unclaimed tokens at `now_ts`.
    pub fn tokens_due(&self, now_ts: i64) -> Result<u128> {
        let pending = self
            .elapsed_months(now_ts)
            .saturating_sub(self.claim.claimed_months);
        Ok(self
            .schedule
            .monthly_amount
            .checked_mul(pending as u128)
            .ok_or(VestingError::MathOverflow)?)
    }

    /// Tokens not yet accounted as released by the schedule.
    pub fn tokens_remaining(&self) -> u128 {
        self.schedule
            .total_amount
            .saturating_sub(self.schedule.released_after(self.claim.claimed_months))
    }

    pub fn next_unlock_ts(&self, now_ts: i64) -> Result<Option<i64>> {
        if self.status() == VestingStatus::FullyVested {
            return Ok(None);
        }
        self.schedule.next_unlock_ts(now_ts)
    }

    /// Fails with `Unauthorized` unless `caller` is the current owner.
    pub fn authorize_owner(&self, caller: &Pubkey) -> Result<()> {
        match self.owner {
            Some(owner) if owner == *caller => Ok(()),
            _ => Err(VestingError::Unauthorized.into()),
        }
    }

    /// Pays every vested, unclaimed month to the beneficiary.
    pub fn claim_tokens<S: TokenStore>(
        &mut self,
        caller: &Pubkey,
        now_ts: i64,
        store: &mut S,
    ) -> Result<u128> {
        require_keys_eq!(*caller, self.beneficiary, VestingError::Unauthorized);
        require_keys_eq!(store.mint(), self.token, VestingError::InvalidTokenMint);

        let balance = store.balance_of(&self.account)?;
        require!(balance > 0, VestingError::InsufficientFunds);

        let elapsed = self.elapsed_months(now_ts);
        let due = self.tokens_due(now_ts)?;
        require!(due > 0, VestingError::NothingDue);
        require!(balance >= due, VestingError::InsufficientFunds);

        store.transfer(&self.account, &self.beneficiary, due)?;
        self.claim.claimed_months = elapsed;
        Ok(due)
    }

    /// Releases the whole ledger balance to the beneficiary and closes the schedule.
    pub fn force_vest<S: TokenStore>(&mut self, caller: &Pubkey, store: &mut S) -> Result<u128> {
        self.authorize_owner(caller)?;
        require_keys_eq!(store.mint(), self.token, VestingError::InvalidTokenMint);

        let balance = store.balance_of(&self.account)?;
        if balance > 0 {
            store.transfer(&self.account, &self.beneficiary, balance)?;
        }
        self.claim.claimed_months = self.schedule.duration_months;
        Ok(balance)
    }

    /// Drains the ledger's balance of `store`'s token to `recipient`.
    /// Claim progress is left untouched.
    pub fn sweep<S: TokenStore>(
        &self,
        caller: &Pubkey,
        store: &mut S,
        recipient: &Pubkey,
    ) -> Result<u128> {
        self.authorize_owner(caller)?;

        let balance = store.balance_of(&self.account)?;
        if balance > 0 {
            store.transfer(&self.account, recipient, balance)?;
        }
        Ok(balance)
    }

    /// [`Self::sweep`] restricted to the vesting token.
    pub fn sweep_gos<S: TokenStore>(
        &self,
        caller: &Pubkey,
        store: &mut S,
        recipient: &Pubkey,
    ) -> Result<u128> {
        self.authorize_owner(caller)?;
        require_keys_eq!(store.mint(), self.token, VestingError::InvalidTokenMint);
        self.sweep(caller, store, recipient)
    }

    /// Replaces the beneficiary, returning the previous one.
    pub fn update_beneficiary(
        &mut self,
        caller: &Pubkey,
        new_beneficiary: Pubkey,
    ) -> Result<Pubkey> {
        self.authorize_owner(caller)?;
        require!(new_beneficiary != Pubkey::default(), VestingError::InvalidPubkey);
        require!(new_beneficiary != self.account, VestingError::InvalidConfig);

        Ok(std::mem::replace(&mut self.beneficiary, new_beneficiary))
    }

    pub fn transfer_ownership(&mut self, caller: &Pubkey, new_owner: Pubkey) -> Result<()> {
        self.authorize_owner(caller)?;
        require!(new_owner != Pubkey::default(), VestingError::InvalidPubkey);
        self.owner = Some(new_owner);
        Ok(())
    }

    /// Leaves the ledger without an owner; owner-gated calls fail from then on.
    pub fn renounce_ownership(&mut self, caller: &Pubkey) -> Result<()> {
        self.authorize_owner(caller)?;
        self.owner = None;
        Ok(())
    }
}
