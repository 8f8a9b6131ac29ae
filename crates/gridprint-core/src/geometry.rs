#![forbid(unsafe_code)]

//! Geometry value types used throughout the layout pipeline.
//!
//! All three types are plain `Copy` records. `Position`/`Size` live in
//! canvas space (non-negative), while [`Bounds`] is an inclusive rectangle
//! of *section offsets*, which are signed: a satellite section above a
//! cell's primary content sits at row `-1`.

/// Absolute canvas coordinate, `(top, left)` in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Position {
    pub top: usize,
    pub left: usize,
}

impl Position {
    #[must_use]
    pub const fn new(top: usize, left: usize) -> Self {
        Self { top, left }
    }
}

/// Extent in character cells.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Size {
    pub height: usize,
    pub width: usize,
}

impl Size {
    #[must_use]
    pub const fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.height == 0 || self.width == 0
    }
}

/// Inclusive rectangle of signed section offsets.
///
/// `Bounds::default()` covers exactly the origin slot `(0, 0)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub first_row: i32,
    pub last_row: i32,
    pub first_column: i32,
    pub last_column: i32,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::at_origin()
    }
}

impl Bounds {
    /// Bounds covering only the `(0, 0)` slot.
    #[must_use]
    pub const fn at_origin() -> Self {
        Self {
            first_row: 0,
            last_row: 0,
            first_column: 0,
            last_column: 0,
        }
    }

    /// Bounds covering exactly one slot.
    #[must_use]
    pub const fn at(row: i32, column: i32) -> Self {
        Self {
            first_row: row,
            last_row: row,
            first_column: column,
            last_column: column,
        }
    }

    /// Grow the rectangle so it also covers `(row, column)`.
    pub fn include(&mut self, row: i32, column: i32) {
        self.first_row = self.first_row.min(row);
        self.last_row = self.last_row.max(row);
        self.first_column = self.first_column.min(column);
        self.last_column = self.last_column.max(column);
    }

    /// Elementwise min/max union of two rectangles.
    #[must_use]
    pub fn envelope(self, other: Self) -> Self {
        Self {
            first_row: self.first_row.min(other.first_row),
            last_row: self.last_row.max(other.last_row),
            first_column: self.first_column.min(other.first_column),
            last_column: self.last_column.max(other.last_column),
        }
    }

    /// Iterate the row offsets this rectangle spans.
    pub fn rows(&self) -> impl Iterator<Item = i32> + use<> {
        self.first_row..=self.last_row
    }

    /// Iterate the column offsets this rectangle spans.
    pub fn columns(&self) -> impl Iterator<Item = i32> + use<> {
        self.first_column..=self.last_column
    }

    /// Number of section rows spanned.
    #[must_use]
    pub fn row_count(&self) -> usize {
        (self.last_row - self.first_row + 1).max(0) as usize
    }

    /// Number of section columns spanned.
    #[must_use]
    pub fn column_count(&self) -> usize {
        (self.last_column - self.first_column + 1).max(0) as usize
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_bounds() -> impl Strategy<Value = Bounds> {
        (-4i32..=4, 0i32..=4, -4i32..=4, 0i32..=4).prop_map(|(fr, dr, fc, dc)| Bounds {
            first_row: fr,
            last_row: fr + dr,
            first_column: fc,
            last_column: fc + dc,
        })
    }

    proptest! {
        #[test]
        fn envelope_contains_both_operands(a in arb_bounds(), b in arb_bounds()) {
            let e = a.envelope(b);
            prop_assert!(e.first_row <= a.first_row && e.first_row <= b.first_row);
            prop_assert!(e.last_row >= a.last_row && e.last_row >= b.last_row);
            prop_assert!(e.first_column <= a.first_column && e.first_column <= b.first_column);
            prop_assert!(e.last_column >= a.last_column && e.last_column >= b.last_column);
        }

        #[test]
        fn include_matches_point_envelope(a in arb_bounds(), row in -5i32..=5, column in -5i32..=5) {
            let mut grown = a;
            grown.include(row, column);
            prop_assert_eq!(grown, a.envelope(Bounds::at(row, column)));
        }
    }
}
