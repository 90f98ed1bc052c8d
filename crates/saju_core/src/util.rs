//! Shared arithmetic helpers.

/// Euclidean remainder of `value` by `modulus`, always in `0..modulus`.
///
/// Every cycle lookup goes through this helper so that offsets before an
/// anchor (negative `value`) still land on a valid index.
///
/// # Panics
///
/// Panics if `modulus` is zero.
pub const fn floor_mod(value: i64, modulus: u32) -> usize {
    value.rem_euclid(modulus as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_passes_through() {
        assert_eq!(floor_mod(7, 12), 7);
        assert_eq!(floor_mod(60, 60), 0);
        assert_eq!(floor_mod(125, 60), 5);
    }

    #[test]
    fn negative_wraps_up() {
        assert_eq!(floor_mod(-1, 60), 59);
        assert_eq!(floor_mod(-60, 60), 0);
        assert_eq!(floor_mod(-61, 60), 59);
        assert_eq!(floor_mod(-3, 10), 7);
    }

    #[test]
    fn extremes_stay_in_range() {
        assert!(floor_mod(i64::MIN, 60) < 60);
        assert!(floor_mod(i64::MAX, 12) < 12);
    }
}
