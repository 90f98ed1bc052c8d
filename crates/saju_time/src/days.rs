//! Whole-day arithmetic between calendar dates.

use chrono::NaiveDate;

/// Number of whole days from `b` to `a` (`a - b`).
///
/// Negative when `a` precedes `b`. Leap days and century rules follow the
/// proleptic Gregorian calendar.
pub fn days_between(a: NaiveDate, b: NaiveDate) -> i64 {
    a.signed_duration_since(b).num_days()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_is_zero() {
        assert_eq!(days_between(ymd(1900, 1, 1), ymd(1900, 1, 1)), 0);
    }

    #[test]
    fn antisymmetric() {
        let a = ymd(2024, 3, 1);
        let b = ymd(1900, 1, 1);
        assert_eq!(days_between(a, b), -days_between(b, a));
    }

    #[test]
    fn leap_day_counted() {
        assert_eq!(days_between(ymd(2024, 3, 1), ymd(2024, 2, 28)), 2);
        assert_eq!(days_between(ymd(2023, 3, 1), ymd(2023, 2, 28)), 1);
    }

    #[test]
    fn century_rules() {
        // 1900 is not a leap year, 2000 is
        assert_eq!(days_between(ymd(1901, 1, 1), ymd(1900, 1, 1)), 365);
        assert_eq!(days_between(ymd(2001, 1, 1), ymd(2000, 1, 1)), 366);
    }

    #[test]
    fn before_reference() {
        assert_eq!(days_between(ymd(1899, 12, 31), ymd(1900, 1, 1)), -1);
    }
}
