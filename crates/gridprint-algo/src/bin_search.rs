#![forbid(unsafe_code)]

//! Binary-search variants over monotonic predicates.
//!
//! Each function searches the inclusive interval `[start, end]` for the
//! boundary of a predicate that flips exactly once across the interval.
//! The diagrams show which element is found; `None` means the sought side
//! of the boundary does not exist in the interval. An empty interval
//! (`start > end`) always yields `None`.

/// `000000[1]111` — first `i` in `[start, end]` for which `test(i)` passes.
///
/// Requires `test` to be false-then-true monotonic over the interval.
///
/// # Example
/// ```
/// use gridprint_algo::first_pass;
///
/// assert_eq!(first_pass(0, 10, |i| i * i >= 20), Some(5));
/// assert_eq!(first_pass(0, 10, |i| i > 100), None);
/// ```
pub fn first_pass(start: i64, end: i64, mut test: impl FnMut(i64) -> bool) -> Option<i64> {
    if start > end {
        return None;
    }

    let mut l = start - 1;
    let mut r = end;

    while l + 1 < r {
        let m = (l + r).div_euclid(2);
        if test(m) {
            r = m;
        } else {
            l = m;
        }
    }

    test(r).then_some(r)
}

/// `00000[0]1111` — last `i` in `[start, end]` for which `test(i)` fails.
///
/// Requires `test` to be false-then-true monotonic over the interval.
pub fn last_fail(start: i64, end: i64, mut test: impl FnMut(i64) -> bool) -> Option<i64> {
    if start > end {
        return None;
    }

    let mut l = start;
    let mut r = end + 1;

    while l + 1 < r {
        let m = (l + r).div_euclid(2);
        if test(m) {
            r = m;
        } else {
            l = m;
        }
    }

    (!test(l)).then_some(l)
}

/// `11111[1]0000` — last `i` in `[start, end]` for which `test(i)` passes.
///
/// Requires `test` to be true-then-false monotonic over the interval.
pub fn last_pass(start: i64, end: i64, mut test: impl FnMut(i64) -> bool) -> Option<i64> {
    if start > end {
        return None;
    }

    let mut l = start;
    let mut r = end + 1;

    while l + 1 < r {
        let m = (l + r).div_euclid(2);
        if test(m) {
            l = m;
        } else {
            r = m;
        }
    }

    test(l).then_some(l)
}

/// `111111[0]000` — first `i` in `[start, end]` for which `test(i)` fails.
///
/// Requires `test` to be true-then-false monotonic over the interval.
pub fn first_fail(start: i64, end: i64, mut test: impl FnMut(i64) -> bool) -> Option<i64> {
    if start > end {
        return None;
    }

    let mut l = start - 1;
    let mut r = end;

    while l + 1 < r {
        let m = (l + r).div_euclid(2);
        if test(m) {
            l = m;
        } else {
            r = m;
        }
    }

    (!test(r)).then_some(r)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_pass_finds_boundary() {
        assert_eq!(first_pass(0, 9, |i| i >= 4), Some(4));
        assert_eq!(first_pass(0, 9, |_| true), Some(0));
        assert_eq!(first_pass(0, 9, |_| false), None);
    }

    #[test]
    fn last_fail_is_one_before_first_pass() {
        assert_eq!(last_fail(0, 9, |i| i >= 4), Some(3));
        assert_eq!(last_fail(0, 9, |_| true), None);
        assert_eq!(last_fail(0, 9, |_| false), Some(9));
    }

    #[test]
    fn last_pass_finds_boundary() {
        assert_eq!(last_pass(0, 9, |i| i <= 6), Some(6));
        assert_eq!(last_pass(0, 9, |_| true), Some(9));
        assert_eq!(last_pass(0, 9, |_| false), None);
    }

    #[test]
    fn first_fail_is_one_after_last_pass() {
        assert_eq!(first_fail(0, 9, |i| i <= 6), Some(7));
        assert_eq!(first_fail(0, 9, |_| true), None);
        assert_eq!(first_fail(0, 9, |_| false), Some(0));
    }

    #[test]
    fn single_element_interval() {
        assert_eq!(first_pass(5, 5, |_| true), Some(5));
        assert_eq!(first_pass(5, 5, |_| false), None);
        assert_eq!(last_pass(5, 5, |_| true), Some(5));
    }

    #[test]
    fn empty_interval_is_none() {
        assert_eq!(first_pass(3, 2, |_| true), None);
        assert_eq!(last_fail(3, 2, |_| false), None);
        assert_eq!(last_pass(3, 2, |_| true), None);
        assert_eq!(first_fail(3, 2, |_| false), None);
    }

    #[test]
    fn negative_intervals_round_toward_lower_bound() {
        // div_euclid keeps the midpoint inside [l, r] for negative sums
        assert_eq!(first_pass(-10, 10, |i| i >= -3), Some(-3));
        assert_eq!(last_pass(-10, -1, |i| i <= -5), Some(-5));
    }
}
