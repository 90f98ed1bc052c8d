//! Individual pillar derivations.
//!
//! Each derivation is a fixed offset from an anchor reduced onto a cycle.
//! Month and hour follow calendar-month and two-hour (시진) heuristics rather
//! than solar-term boundaries.

use saju_time::{NaiveDate, days_between};

use crate::branch::Branch;
use crate::error::SajuError;
use crate::ganji::{Ganji, ganji_from_index};

/// Year whose pillar is cycle index 0 (갑자).
pub const YEAR_ANCHOR: i32 = 1984;

/// Date whose day pillar is cycle index 0, as `(year, month, day)`.
pub const DAY_EPOCH_YMD: (i32, u32, u32) = (1900, 1, 1);

/// Date whose day pillar is cycle index 0.
pub const DAY_EPOCH: NaiveDate = match NaiveDate::from_ymd_opt(
    DAY_EPOCH_YMD.0,
    DAY_EPOCH_YMD.1,
    DAY_EPOCH_YMD.2,
) {
    Some(date) => date,
    None => panic!("day epoch is not a valid date"),
};

/// Date whose day pillar is cycle index 0.
pub const fn day_epoch() -> NaiveDate {
    DAY_EPOCH
}

/// Year pillar for a Gregorian year.
///
/// Widened to `i64` before subtracting the anchor, so every `i32` year maps
/// onto the cycle without overflow.
pub fn year_pillar(year: i32) -> Ganji {
    ganji_from_index(i64::from(year) - i64::from(YEAR_ANCHOR))
}

/// Month branch for a calendar month (`1..=12`).
pub fn month_branch(month: u32) -> Result<Branch, SajuError> {
    if !(1..=12).contains(&month) {
        return Err(SajuError::InvalidMonth(month));
    }
    Ok(month_branch_unchecked(month))
}

/// Day pillar for a calendar date.
pub fn day_pillar(date: NaiveDate) -> Ganji {
    ganji_from_index(days_between(date, day_epoch()))
}

/// Hour branch for a 24-hour clock hour (`0..=23`).
///
/// 23:00–00:59 is 자, 01:00–02:59 is 축, and so on in two-hour windows.
pub fn hour_branch(hour: u32) -> Result<Branch, SajuError> {
    if hour > 23 {
        return Err(SajuError::InvalidHour(hour));
    }
    Ok(hour_branch_unchecked(hour))
}

pub(crate) fn month_branch_unchecked(month: u32) -> Branch {
    Branch::from_index(i64::from(month) + 1)
}

pub(crate) fn hour_branch_unchecked(hour: u32) -> Branch {
    Branch::from_index((i64::from(hour) + 1).div_euclid(2))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::branch::ALL_BRANCHES;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn anchor_year_is_gapja() {
        let g = year_pillar(YEAR_ANCHOR);
        assert_eq!(g.index(), 0);
        assert_eq!(g.to_string(), "갑자");
    }

    #[test]
    fn year_before_anchor_wraps() {
        // 1983 - 1984 = -1 → 59
        let g = year_pillar(1983);
        assert_eq!(g.index(), 59);
        assert_eq!(g.to_string(), "계해");
    }

    #[test]
    fn year_1990() {
        assert_eq!(year_pillar(1990).to_string(), "경오");
    }

    #[test]
    fn extreme_years_do_not_overflow() {
        assert!(year_pillar(i32::MIN).index() < 60);
        assert!(year_pillar(i32::MAX).index() < 60);
    }

    #[test]
    fn month_twelve_is_chuk() {
        let b = month_branch(12).unwrap();
        assert_eq!(b.index(), 1);
        assert_eq!(b, Branch::Chuk);
    }

    #[test]
    fn month_mapping() {
        // (month + 1) mod 12
        let expected = [
            Branch::In,
            Branch::Myo,
            Branch::Jin,
            Branch::Sa,
            Branch::O,
            Branch::Mi,
            Branch::Sin,
            Branch::Yu,
            Branch::Sul,
            Branch::Hae,
            Branch::Ja,
            Branch::Chuk,
        ];
        for (m, b) in (1..=12).zip(expected) {
            assert_eq!(month_branch(m).unwrap(), b, "month {m}");
        }
    }

    #[test]
    fn month_out_of_range() {
        assert_eq!(month_branch(0), Err(SajuError::InvalidMonth(0)));
        assert_eq!(month_branch(13), Err(SajuError::InvalidMonth(13)));
        assert_eq!(month_branch(u32::MAX), Err(SajuError::InvalidMonth(u32::MAX)));
    }

    #[test]
    fn epoch_constant_matches_fields() {
        let (y, m, d) = DAY_EPOCH_YMD;
        assert_eq!(DAY_EPOCH, ymd(y, m, d));
        assert_eq!(day_epoch(), DAY_EPOCH);
    }

    #[test]
    fn epoch_day_is_gapja() {
        assert_eq!(day_pillar(day_epoch()).index(), 0);
    }

    #[test]
    fn day_before_epoch_wraps() {
        assert_eq!(day_pillar(ymd(1899, 12, 31)).index(), 59);
    }

    #[test]
    fn day_known_values() {
        assert_eq!(day_pillar(ymd(1990, 5, 15)).to_string(), "경오");
        assert_eq!(day_pillar(ymd(2000, 2, 29)).to_string(), "정미");
        assert_eq!(day_pillar(ymd(1850, 6, 1)).to_string(), "계유");
    }

    #[test]
    fn hour_twenty_three_wraps_to_ja() {
        let b = hour_branch(23).unwrap();
        assert_eq!(b.index(), 0);
        assert_eq!(b, Branch::Ja);
    }

    #[test]
    fn hours_partition_into_two_hour_windows() {
        assert_eq!(hour_branch(0).unwrap(), Branch::Ja);
        for (i, b) in ALL_BRANCHES.iter().enumerate().skip(1) {
            let start = 2 * i as u32 - 1;
            assert_eq!(hour_branch(start).unwrap(), *b, "hour {start}");
            assert_eq!(hour_branch(start + 1).unwrap(), *b, "hour {}", start + 1);
        }
    }

    #[test]
    fn hour_out_of_range() {
        assert_eq!(hour_branch(24), Err(SajuError::InvalidHour(24)));
    }
}
