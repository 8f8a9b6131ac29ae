#![forbid(unsafe_code)]

//! Odometer-style nested cartesian enumeration.
//!
//! Equivalent to a dynamically-deep stack of `for` loops: the last axis
//! spins fastest. Zero axes yield a single empty tuple; any empty axis
//! yields nothing.

/// Enumerate every index tuple of the cartesian product of the inclusive
/// ranges `starts[i]..=ends[i]`, invoking `cb` for each.
///
/// # Panics
/// Panics if `starts` and `ends` differ in length (caller bug).
///
/// # Example
/// ```
/// use gridprint_algo::nested_loops_indexes;
///
/// let mut seen = Vec::new();
/// nested_loops_indexes(&[0, 0], &[1, 1], |ix| seen.push(ix.to_vec()));
/// assert_eq!(seen, vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]);
/// ```
pub fn nested_loops_indexes(starts: &[i64], ends: &[i64], mut cb: impl FnMut(&[i64])) {
    assert_eq!(
        starts.len(),
        ends.len(),
        "starts and ends must have the same length"
    );

    if starts.iter().zip(ends).any(|(s, e)| e < s) {
        return;
    }

    let mut indexes: Vec<i64> = starts.to_vec();

    loop {
        cb(&indexes);

        // Rightmost axis not yet at its end.
        let mut j = indexes.len();
        while j > 0 && indexes[j - 1] == ends[j - 1] {
            j -= 1;
        }
        if j == 0 {
            break;
        }

        let j = j - 1;
        indexes[j] += 1;
        for i in j + 1..indexes.len() {
            indexes[i] = starts[i];
        }
    }
}

/// Collecting variant of [`nested_loops_indexes`].
#[must_use]
pub fn nested_loops_indexes_all(starts: &[i64], ends: &[i64]) -> Vec<Vec<i64>> {
    let mut result = Vec::new();
    nested_loops_indexes(starts, ends, |ix| result.push(ix.to_vec()));
    result
}

/// Enumerate the cartesian product of the given axes, invoking `cb` with
/// one element picked from each axis. The last axis spins fastest.
pub fn nested_loops<T: Clone>(axes: &[Vec<T>], mut cb: impl FnMut(&[T])) {
    if axes.iter().any(Vec::is_empty) {
        return;
    }

    let starts = vec![0i64; axes.len()];
    let ends: Vec<i64> = axes.iter().map(|axis| axis.len() as i64 - 1).collect();
    let mut state: Vec<T> = Vec::with_capacity(axes.len());

    nested_loops_indexes(&starts, &ends, |ix| {
        state.clear();
        state.extend(
            ix.iter()
                .zip(axes)
                .map(|(&i, axis)| axis[i as usize].clone()),
        );
        cb(&state);
    });
}

/// Collecting variant of [`nested_loops`].
#[must_use]
pub fn nested_loops_all<T: Clone>(axes: &[Vec<T>]) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    nested_loops(axes, |state| result.push(state.to_vec()));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_by_two_product() {
        assert_eq!(
            nested_loops_indexes_all(&[0, 0], &[1, 1]),
            vec![vec![0, 0], vec![0, 1], vec![1, 0], vec![1, 1]]
        );
    }

    #[test]
    fn last_axis_spins_fastest() {
        let all = nested_loops_indexes_all(&[0, 5], &[1, 6]);
        assert_eq!(all, vec![vec![0, 5], vec![0, 6], vec![1, 5], vec![1, 6]]);
    }

    #[test]
    fn zero_axes_yield_one_empty_tuple() {
        assert_eq!(nested_loops_indexes_all(&[], &[]), vec![Vec::<i64>::new()]);
    }

    #[test]
    fn inverted_range_yields_nothing() {
        assert!(nested_loops_indexes_all(&[0, 3], &[1, 2]).is_empty());
    }

    #[test]
    fn negative_ranges_are_supported() {
        assert_eq!(
            nested_loops_indexes_all(&[-1], &[1]),
            vec![vec![-1], vec![0], vec![1]]
        );
    }

    #[test]
    fn array_variant_picks_one_per_axis() {
        let axes = vec![vec!['a', 'b'], vec!['x', 'y']];
        assert_eq!(
            nested_loops_all(&axes),
            vec![
                vec!['a', 'x'],
                vec!['a', 'y'],
                vec!['b', 'x'],
                vec!['b', 'y'],
            ]
        );
    }

    #[test]
    fn array_variant_with_empty_axis_yields_nothing() {
        let axes: Vec<Vec<u8>> = vec![vec![1, 2], vec![]];
        assert!(nested_loops_all(&axes).is_empty());
    }

    #[test]
    #[should_panic(expected = "same length")]
    fn mismatched_axis_lengths_panic() {
        nested_loops_indexes(&[0], &[1, 2], |_| {});
    }
}
