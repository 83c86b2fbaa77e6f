//! Fixed-length month arithmetic for the vesting clock.
//! - boundary_k = start + k * SECONDS_PER_MONTH
//! - elapsed_months = largest k s.t. now >= boundary_k (inclusive), clamped to [0, duration]
//! - timestamps before start count as zero elapsed months

use anchor_lang::prelude::*;

use crate::constants::SECONDS_PER_MONTH;
use crate::error::VestingError;

/// Whole months elapsed between `start_ts` and `now_ts`, clamped to `[0, duration_months]`.
pub fn elapsed_months(now_ts: i64, start_ts: i64, duration_months: u8) -> u8 {
    if now_ts <= start_ts {
        return 0;
    }
    let months = now_ts.saturating_sub(start_ts) / SECONDS_PER_MONTH;
    months.min(duration_months as i64) as u8
}

/// Timestamp at which month `k` of the schedule has fully elapsed.
pub fn month_boundary(start_ts: i64, k: u8) -> Result<i64> {
    let offset = SECONDS_PER_MONTH
        .checked_mul(k as i64)
        .ok_or(VestingError::MathOverflow)?;
    Ok(start_ts
        .checked_add(offset)
        .ok_or(VestingError::MathOverflow)?)
}

/// Boundary of the next month to unlock, or `None` once every month has elapsed.
pub fn next_unlock_ts(now_ts: i64, start_ts: i64, duration_months: u8) -> Result<Option<i64>> {
    let elapsed = elapsed_months(now_ts, start_ts, duration_months);
    if elapsed >= duration_months {
        return Ok(None);
    }
    month_boundary(start_ts, elapsed + 1).map(Some)
}

#[cfg(test)]
mod tests {
    use super::*;

    const START: i64 = 1_700_000_000;

    #[test]
    fn month_boundary_inclusive() {
        assert_eq!(elapsed_months(START, START, 24), 0);

        let b1 = month_boundary(START, 1).unwrap();
        assert_eq!(b1, START + 2_592_000);
        assert_eq!(elapsed_months(b1, START, 24), 1);
        // one second before boundary_1 => still zero
        assert_eq!(elapsed_months(b1 - 1, START, 24), 0);
    }

    #[test]
    fn before_start_counts_as_zero() {
        assert_eq!(elapsed_months(START - 1, START, 24), 0);
        assert_eq!(elapsed_months(i64::MIN, START, 24), 0);
    }

    #[test]
    fn elapsed_saturates_at_duration() {
        let now = START + 100 * SECONDS_PER_MONTH;
        assert_eq!(elapsed_months(now, START, 24), 24);
        assert_eq!(elapsed_months(i64::MAX, START, 24), 24);
    }

    #[test]
    fn next_unlock_tracks_following_boundary() {
        assert_eq!(
            next_unlock_ts(START, START, 24).unwrap(),
            Some(START + SECONDS_PER_MONTH)
        );
        let mid = START + 3 * SECONDS_PER_MONTH + 17;
        assert_eq!(
            next_unlock_ts(mid, START, 24).unwrap(),
            Some(START + 4 * SECONDS_PER_MONTH)
        );
        assert_eq!(
            next_unlock_ts(START + 24 * SECONDS_PER_MONTH, START, 24).unwrap(),
            None
        );
    }

    #[test]
    fn boundary_overflow_is_reported() {
        assert!(month_boundary(i64::MAX - 10, 1).is_err());
    }
}
