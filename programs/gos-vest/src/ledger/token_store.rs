use std::collections::BTreeMap;

use anchor_lang::prelude::*;

use crate::error::VestingError;

/// Holder of one fungible token's balances, as seen by a vesting ledger.
///
/// Implementations must either complete a transfer in full or fail without
/// moving anything.
pub trait TokenStore {
    /// Mint of the token this store holds.
    fn mint(&self) -> Pubkey;

    fn balance_of(&self, account: &Pubkey) -> Result<u128>;

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()>;
}

/// Balance book kept in memory; backs simulators and tests.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InMemoryTokenStore {
    mint: Pubkey,
    balances: BTreeMap<Pubkey, u128>,
}

impl InMemoryTokenStore {
    pub fn new(mint: Pubkey) -> Self {
        Self {
            mint,
            balances: BTreeMap::new(),
        }
    }

    /// Credit newly issued tokens to `account`.
    pub fn mint_to(&mut self, account: &Pubkey, amount: u128) -> Result<()> {
        let entry = self.balances.entry(*account).or_insert(0);
        *entry = entry
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }

    pub fn total_supply(&self) -> Result<u128> {
        self.balances.values().try_fold(0u128, |acc, b| {
            acc.checked_add(*b)
                .ok_or_else(|| error!(VestingError::MathOverflow))
        })
    }
}

impl TokenStore for InMemoryTokenStore {
    fn mint(&self) -> Pubkey {
        self.mint
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u128> {
        Ok(self.balances.get(account).copied().unwrap_or(0))
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        let from_balance = self.balance_of(from)?;
        require!(from_balance >= amount, VestingError::InsufficientFunds);
        if from == to || amount == 0 {
            return Ok(());
        }
        let to_balance = self
            .balance_of(to)?
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;

        self.balances.insert(*from, from_balance - amount);
        self.balances.insert(*to, to_balance);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn transfer_moves_balance() {
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut store = InMemoryTokenStore::new(Pubkey::new_unique());
        store.mint_to(&a, 100).unwrap();

        store.transfer(&a, &b, 40).unwrap();
        assert_eq!(store.balance_of(&a).unwrap(), 60);
        assert_eq!(store.balance_of(&b).unwrap(), 40);
        assert_eq!(store.total_supply().unwrap(), 100);
    }

    #[test]
    fn overdraw_fails_without_moving_anything() {
        let (a, b) = (Pubkey::new_unique(), Pubkey::new_unique());
        let mut store = InMemoryTokenStore::new(Pubkey::new_unique());
        store.mint_to(&a, 10).unwrap();

        assert!(store.transfer(&a, &b, 11).is_err());
        assert_eq!(store.balance_of(&a).unwrap(), 10);
        assert_eq!(store.balance_of(&b).unwrap(), 0);
    }

    #[test]
    fn mint_overflow_is_reported() {
        let a = Pubkey::new_unique();
        let mut store = InMemoryTokenStore::new(Pubkey::new_unique());
        store.mint_to(&a, u128::MAX).unwrap();
        assert!(store.mint_to(&a, 1).is_err());
        assert_eq!(store.balance_of(&a).unwrap(), u128::MAX);
    }
}
