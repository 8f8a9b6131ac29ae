#![forbid(unsafe_code)]

//! K-of-N combination enumeration in lexicographic order.

/// Enumerate all strictly increasing index tuples of length `k` drawn from
/// `0..n`, in lexicographic order, invoking `cb` for each.
///
/// `k == 0` yields a single empty tuple; `k > n` yields nothing.
///
/// # Example
/// ```
/// use gridprint_algo::combinations_indexes;
///
/// let mut seen = Vec::new();
/// combinations_indexes(3, 2, |ix| seen.push(ix.to_vec()));
/// assert_eq!(seen, vec![vec![0, 1], vec![0, 2], vec![1, 2]]);
/// ```
pub fn combinations_indexes(n: usize, k: usize, mut cb: impl FnMut(&[usize])) {
    if k > n {
        return;
    }

    let mut indexes: Vec<usize> = (0..k).collect();

    loop {
        cb(&indexes);

        // Rightmost index that can still advance.
        let mut j = k;
        while j > 0 && indexes[j - 1] == n - k + (j - 1) {
            j -= 1;
        }
        if j == 0 {
            break;
        }

        let j = j - 1;
        indexes[j] += 1;
        for i in j + 1..k {
            indexes[i] = indexes[j] + (i - j);
        }
    }
}

/// Collecting variant of [`combinations_indexes`].
#[must_use]
pub fn combinations_indexes_all(n: usize, k: usize) -> Vec<Vec<usize>> {
    let mut result = Vec::new();
    combinations_indexes(n, k, |ix| result.push(ix.to_vec()));
    result
}

/// Enumerate all `k`-element combinations of `elements`, invoking `cb`
/// with each combination in lexicographic index order.
pub fn combinations<T: Clone>(elements: &[T], k: usize, mut cb: impl FnMut(&[T])) {
    let mut picked: Vec<T> = Vec::with_capacity(k);
    combinations_indexes(elements.len(), k, |ix| {
        picked.clear();
        picked.extend(ix.iter().map(|&i| elements[i].clone()));
        cb(&picked);
    });
}

/// Collecting variant of [`combinations`].
#[must_use]
pub fn combinations_all<T: Clone>(elements: &[T], k: usize) -> Vec<Vec<T>> {
    let mut result = Vec::new();
    combinations(elements, k, |combo| result.push(combo.to_vec()));
    result
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn binomial(n: usize, k: usize) -> usize {
        if k > n {
            return 0;
        }
        let mut acc: usize = 1;
        for i in 0..k {
            acc = acc * (n - i) / (i + 1);
        }
        acc
    }

    proptest! {
        #[test]
        fn count_matches_binomial(n in 0usize..10, k in 0usize..10) {
            prop_assert_eq!(combinations_indexes_all(n, k).len(), binomial(n, k));
        }

        #[test]
        fn all_tuples_are_unique(n in 0usize..9, k in 0usize..9) {
            let all = combinations_indexes_all(n, k);
            let mut dedup = all.clone();
            dedup.sort();
            dedup.dedup();
            prop_assert_eq!(all.len(), dedup.len());
        }
    }
}
