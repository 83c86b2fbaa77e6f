use anchor_lang::prelude::*;

use crate::error::VestingError;
use crate::utils::time;

/// Immutable release schedule fixed when a ledger is created.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct VestingSchedule {
    /// Total tokens ever releasable.
    pub total_amount: u128,
    /// Tokens unlocked per elapsed month.
    pub monthly_amount: u128,
    /// Number of monthly releases.
    pub duration_months: u8,
    /// Vesting start timestamp (Unix seconds).
    pub start_ts: i64,
}

impl VestingSchedule {
    pub const SIZE: usize =
        16 + // total_amount
        16 + // monthly_amount
        1 +  // duration_months
        8;   // start_ts

    /// Schedule releasing `total_amount / duration_months` (rounded down) each month.
    pub fn new(total_amount: u128, duration_months: u8, start_ts: i64) -> Result<Self> {
        require!(duration_months > 0, VestingError::InvalidConfig);
        Self::with_monthly_amount(
            total_amount,
            total_amount / duration_months as u128,
            duration_months,
            start_ts,
        )
    }

    /// Schedule with an explicit monthly release.
    ///
    /// `monthly_amount * duration_months` may exceed `total_amount`; the last
    /// month is then only reachable through a forced settlement.
    pub fn with_monthly_amount(
        total_amount: u128,
        monthly_amount: u128,
        duration_months: u8,
        start_ts: i64,
    ) -> Result<Self> {
        require!(total_amount > 0, VestingError::InvalidAmount);
        require!(duration_months > 0, VestingError::InvalidConfig);
        require!(monthly_amount > 0, VestingError::InvalidConfig);
        require!(monthly_amount <= total_amount, VestingError::InvalidConfig);
        Ok(Self {
            total_amount,
            monthly_amount,
            duration_months,
            start_ts,
        })
    }

    pub fn elapsed_months(&self, now_ts: i64) -> u8 {
        time::elapsed_months(now_ts, self.start_ts, self.duration_months)
    }

    /// Tokens accounted as released after `months` months, capped at the total.
    /// A completed schedule counts as fully released, settlement included.
    pub fn released_after(&self, months: u8) -> u128 {
        if months >= self.duration_months {
            return self.total_amount;
        }
        self.monthly_amount
            .saturating_mul(months as u128)
            .min(self.total_amount)
    }

    /// Amount the final settlement must release so lifetime payout equals the total.
    pub fn final_amount(&self) -> u128 {
        self.total_amount
            .saturating_sub(self.released_after(self.duration_months.saturating_sub(1)))
    }

    pub fn next_unlock_ts(&self, now_ts: i64) -> Result<Option<i64>> {
        time::next_unlock_ts(now_ts, self.start_ts, self.duration_months)
    }

    /// Boundary at which the last month has elapsed.
    pub fn end_ts(&self) -> Result<i64> {
        time::month_boundary(self.start_ts, self.duration_months)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::SECONDS_PER_MONTH;

    #[test]
    fn derived_monthly_rounds_down() {
        let s = VestingSchedule::new(100, 24, 0).unwrap();
        assert_eq!(s.monthly_amount, 4);
        assert_eq!(s.final_amount(), 100 - 4 * 23);
        assert_eq!(s.released_after(23), 92);
        assert_eq!(s.released_after(24), 100);
        assert_eq!(s.released_after(30), 100);
    }

    #[test]
    fn explicit_monthly_may_overshoot_total() {
        let s = VestingSchedule::with_monthly_amount(
            88_947_368_420_000_000_000_000_000,
            3_706_973_680_000_000_000_000_000,
            24,
            0,
        )
        .unwrap();
        assert_eq!(s.released_after(24), s.total_amount);
        assert_eq!(s.final_amount(), 3_686_973_780_000_000_000_000_000);
    }

    #[test]
    fn rejects_degenerate_configs() {
        assert!(VestingSchedule::new(0, 24, 0).is_err());
        assert!(VestingSchedule::new(100, 0, 0).is_err());
        // total smaller than the month count derives a zero monthly release
        assert!(VestingSchedule::new(10, 24, 0).is_err());
        assert!(VestingSchedule::with_monthly_amount(100, 101, 24, 0).is_err());
    }

    #[test]
    fn end_is_last_month_boundary() {
        let s = VestingSchedule::new(2_400, 24, 1_000).unwrap();
        assert_eq!(s.end_ts().unwrap(), 1_000 + 24 * SECONDS_PER_MONTH);
        assert_eq!(s.elapsed_months(s.end_ts().unwrap()), 24);
    }
}
