#![forbid(unsafe_code)]

//! Ragged-safe helpers over row-major `Vec<Vec<T>>` matrices.
//!
//! Rows may have differing lengths; every helper iterates each row to its
//! own length and never assumes rectangularity.

/// Row-major matrix. Rows may be ragged.
pub type Matrix<T> = Vec<Vec<T>>;

/// Build a matrix with `rows` rows, each sized by `columns_for_row`, filled
/// by `fill(row, column)`.
///
/// # Example
/// ```
/// use gridprint_core::matrix_create;
///
/// let m = matrix_create(2, |_| 3, |r, c| r * 10 + c);
/// assert_eq!(m, vec![vec![0, 1, 2], vec![10, 11, 12]]);
/// ```
pub fn matrix_create<T>(
    rows: usize,
    mut columns_for_row: impl FnMut(usize) -> usize,
    mut fill: impl FnMut(usize, usize) -> T,
) -> Matrix<T> {
    (0..rows)
        .map(|r| (0..columns_for_row(r)).map(|c| fill(r, c)).collect())
        .collect()
}

/// Visit every cell in row-major order.
pub fn matrix_for_each<T>(matrix: &Matrix<T>, mut visit: impl FnMut(&T, usize, usize)) {
    for (r, row) in matrix.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            visit(value, r, c);
        }
    }
}

/// Map every cell, preserving the (possibly ragged) shape.
pub fn matrix_map<T, U>(matrix: &Matrix<T>, mut map: impl FnMut(&T, usize, usize) -> U) -> Matrix<U> {
    matrix
        .iter()
        .enumerate()
        .map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(|(c, value)| map(value, r, c))
                .collect()
        })
        .collect()
}

/// Fold every cell in row-major order into an accumulator.
pub fn matrix_reduce<T, A>(
    matrix: &Matrix<T>,
    mut acc: A,
    mut fold: impl FnMut(A, &T, usize, usize) -> A,
) -> A {
    for (r, row) in matrix.iter().enumerate() {
        for (c, value) in row.iter().enumerate() {
            acc = fold(acc, value, r, c);
        }
    }
    acc
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_with_varying_row_lengths() {
        let m = matrix_create(3, |r| r, |r, c| (r, c));
        assert_eq!(m[0], vec![]);
        assert_eq!(m[1], vec![(1, 0)]);
        assert_eq!(m[2], vec![(2, 0), (2, 1)]);
    }

    #[test]
    fn map_preserves_ragged_shape() {
        let m: Matrix<i32> = vec![vec![1], vec![], vec![2, 3]];
        let doubled = matrix_map(&m, |v, _, _| v * 2);
        assert_eq!(doubled, vec![vec![2], vec![], vec![4, 6]]);
    }

    #[test]
    fn for_each_visits_row_major_with_coordinates() {
        let m: Matrix<char> = vec![vec!['a', 'b'], vec!['c']];
        let mut seen = Vec::new();
        matrix_for_each(&m, |v, r, c| seen.push((*v, r, c)));
        assert_eq!(seen, vec![('a', 0, 0), ('b', 0, 1), ('c', 1, 0)]);
    }

    #[test]
    fn reduce_over_empty_matrix_returns_initial() {
        let m: Matrix<i32> = vec![];
        assert_eq!(matrix_reduce(&m, 7, |acc, v, _, _| acc + v), 7);
    }

    #[test]
    fn reduce_sums_all_cells() {
        let m: Matrix<i32> = vec![vec![1, 2], vec![], vec![3]];
        assert_eq!(matrix_reduce(&m, 0, |acc, v, _, _| acc + v), 6);
    }
}
