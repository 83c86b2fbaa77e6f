//! SPL token vault exposed to the ledger as a [`TokenStore`].

use anchor_lang::prelude::*;
use anchor_spl::token::{self, TokenAccount, Transfer};

use crate::error::VestingError;
use crate::ledger::TokenStore;

/// Outgoing transfers from a PDA-owned token account to one destination account.
///
/// `Account<TokenAccount>` is not refreshed after a CPI, so amounts already
/// moved in this instruction are tracked in `released`.
pub struct VaultStore<'a, 'info> {
    ledger: Pubkey,
    vault: &'a Account<'info, TokenAccount>,
    destination: &'a Account<'info, TokenAccount>,
    authority: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    signer_seeds: &'a [&'a [&'a [u8]]],
    released: u64,
}

impl<'a, 'info> VaultStore<'a, 'info> {
    pub fn new(
        ledger: Pubkey,
        vault: &'a Account<'info, TokenAccount>,
        destination: &'a Account<'info, TokenAccount>,
        authority: AccountInfo<'info>,
        token_program: AccountInfo<'info>,
        signer_seeds: &'a [&'a [&'a [u8]]],
    ) -> Result<Self> {
        require_keys_eq!(vault.owner, ledger, VestingError::InvalidTokenAccount);
        require_keys_eq!(authority.key(), ledger, VestingError::InvalidTokenAccount);
        require_keys_eq!(destination.mint, vault.mint, VestingError::InvalidTokenMint);
        require_keys_neq!(destination.key(), vault.key(), VestingError::InvalidTokenAccount);
        Ok(Self {
            ledger,
            vault,
            destination,
            authority,
            token_program,
            signer_seeds,
            released: 0,
        })
    }

    fn available(&self) -> u64 {
        self.vault.amount.saturating_sub(self.released)
    }
}

impl TokenStore for VaultStore<'_, '_> {
    fn mint(&self) -> Pubkey {
        self.vault.mint
    }

    fn balance_of(&self, account: &Pubkey) -> Result<u128> {
        if *account == self.ledger {
            return Ok(self.available() as u128);
        }
        if *account == self.destination.owner {
            return Ok(self.destination.amount.saturating_add(self.released) as u128);
        }
        err!(VestingError::InvalidTokenAccount)
    }

    fn transfer(&mut self, from: &Pubkey, to: &Pubkey, amount: u128) -> Result<()> {
        require_keys_eq!(*from, self.ledger, VestingError::InvalidTokenAccount);
        require_keys_eq!(*to, self.destination.owner, VestingError::InvalidTokenAccount);
        let amount = u64::try_from(amount).map_err(|_| VestingError::MathOverflow)?;
        require!(self.available() >= amount, VestingError::InsufficientFunds);

        token::transfer(
            CpiContext::new_with_signer(
                self.token_program.clone(),
                Transfer {
                    from: self.vault.to_account_info(),
                    to: self.destination.to_account_info(),
                    authority: self.authority.clone(),
                },
                self.signer_seeds,
            ),
            amount,
        )?;

        self.released = self
            .released
            .checked_add(amount)
            .ok_or(VestingError::MathOverflow)?;
        Ok(())
    }
}
