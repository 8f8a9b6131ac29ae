#![forbid(unsafe_code)]

//! Border sides, box-drawing glyph sets, and the connectivity map that
//! merges adjacent cell outlines into shared junctions.
//!
//! Borders are not painted per cell. Each bordered cell instead marks, for
//! every canvas coordinate its outline touches, which of the four compass
//! directions a line continues in. Marks from neighbouring cells land on
//! the same coordinates and accumulate, so after all cells are marked each
//! coordinate holds a 4-bit connectivity code that picks the right glyph:
//! a corner, a straight run, a tee, or a full cross.

use std::collections::HashMap;

use bitflags::bitflags;
use gridprint_core::{Position, Size};

bitflags! {
    /// Which sides of a cell's outline to draw.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Borders: u8 {
        const NONE = 0;
        const TOP = 1;
        const RIGHT = 1 << 1;
        const BOTTOM = 1 << 2;
        const LEFT = 1 << 3;
        const ALL = Self::TOP.bits()
            | Self::RIGHT.bits()
            | Self::BOTTOM.bits()
            | Self::LEFT.bits();
    }
}

impl Default for Borders {
    fn default() -> Self {
        Borders::ALL
    }
}

/// The eleven glyphs needed to draw any merged rectangular outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
    pub horizontal: char,
    pub vertical: char,
    pub tee_down: char,
    pub tee_up: char,
    pub tee_left: char,
    pub tee_right: char,
    pub cross: char,
}

pub const SQUARE: BorderSet = BorderSet {
    top_left: '┌',
    top_right: '┐',
    bottom_left: '└',
    bottom_right: '┘',
    horizontal: '─',
    vertical: '│',
    tee_down: '┬',
    tee_up: '┴',
    tee_left: '┤',
    tee_right: '├',
    cross: '┼',
};

pub const ROUNDED: BorderSet = BorderSet {
    top_left: '╭',
    top_right: '╮',
    bottom_left: '╰',
    bottom_right: '╯',
    ..SQUARE
};

pub const DOUBLE: BorderSet = BorderSet {
    top_left: '╔',
    top_right: '╗',
    bottom_left: '╚',
    bottom_right: '╝',
    horizontal: '═',
    vertical: '║',
    tee_down: '╦',
    tee_up: '╩',
    tee_left: '╣',
    tee_right: '╠',
    cross: '╬',
};

pub const HEAVY: BorderSet = BorderSet {
    top_left: '┏',
    top_right: '┓',
    bottom_left: '┗',
    bottom_right: '┛',
    horizontal: '━',
    vertical: '┃',
    tee_down: '┳',
    tee_up: '┻',
    tee_left: '┫',
    tee_right: '┣',
    cross: '╋',
};

pub const ASCII: BorderSet = BorderSet {
    top_left: '+',
    top_right: '+',
    bottom_left: '+',
    bottom_right: '+',
    horizontal: '-',
    vertical: '|',
    tee_down: '+',
    tee_up: '+',
    tee_left: '+',
    tee_right: '+',
    cross: '+',
};

/// Named border glyph families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BorderType {
    #[default]
    Square,
    Rounded,
    Double,
    Heavy,
    Ascii,
}

impl BorderType {
    #[must_use]
    pub const fn border_set(self) -> BorderSet {
        match self {
            BorderType::Square => SQUARE,
            BorderType::Rounded => ROUNDED,
            BorderType::Double => DOUBLE,
            BorderType::Heavy => HEAVY,
            BorderType::Ascii => ASCII,
        }
    }
}

// Connectivity bits: in which directions does a line leave this coordinate.
const UP: u8 = 1 << 3;
const RIGHT: u8 = 1 << 2;
const DOWN: u8 = 1 << 1;
const LEFT: u8 = 1;

/// Accumulated connectivity marks, keyed by `(top, left)` canvas coordinate.
#[derive(Debug, Default)]
pub(crate) struct BorderMap {
    marks: HashMap<(usize, usize), u8>,
}

impl BorderMap {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn mark(&mut self, top: usize, left: usize, bits: u8) {
        *self.marks.entry((top, left)).or_insert(0) |= bits;
    }

    /// Mark the outline of one cell's outer rectangle, limited to `sides`.
    pub(crate) fn mark_cell(&mut self, position: Position, size: Size, sides: Borders) {
        if size.height == 0 || size.width == 0 {
            return;
        }
        let top = position.top;
        let left = position.left;
        let bottom = top + size.height - 1;
        let right = left + size.width - 1;

        if sides.contains(Borders::TOP) {
            self.mark(top, left, RIGHT);
            self.mark(top, right, LEFT);
            for x in left + 1..right {
                self.mark(top, x, LEFT | RIGHT);
            }
        }
        if sides.contains(Borders::BOTTOM) {
            self.mark(bottom, left, RIGHT);
            self.mark(bottom, right, LEFT);
            for x in left + 1..right {
                self.mark(bottom, x, LEFT | RIGHT);
            }
        }
        if sides.contains(Borders::LEFT) {
            self.mark(top, left, DOWN);
            self.mark(bottom, left, UP);
            for y in top + 1..bottom {
                self.mark(y, left, UP | DOWN);
            }
        }
        if sides.contains(Borders::RIGHT) {
            self.mark(top, right, DOWN);
            self.mark(bottom, right, UP);
            for y in top + 1..bottom {
                self.mark(y, right, UP | DOWN);
            }
        }
    }

    /// Resolve every marked coordinate to its glyph. A lone stub (a line
    /// entering from only one side) resolves to a blank, erasing whatever
    /// was painted underneath.
    pub(crate) fn glyphs<'a>(
        &'a self,
        set: &'a BorderSet,
    ) -> impl Iterator<Item = ((usize, usize), char)> + 'a {
        self.marks
            .iter()
            .map(|(&at, &code)| (at, junction_glyph(set, code).unwrap_or(' ')))
    }
}

/// Map a 4-bit connectivity code (`UP | RIGHT | DOWN | LEFT`) to a glyph.
#[must_use]
pub(crate) fn junction_glyph(set: &BorderSet, code: u8) -> Option<char> {
    let glyph = match code {
        c if c == DOWN | LEFT => set.top_right,
        c if c == RIGHT | LEFT => set.horizontal,
        c if c == RIGHT | DOWN => set.top_left,
        c if c == RIGHT | DOWN | LEFT => set.tee_down,
        c if c == UP | LEFT => set.bottom_right,
        c if c == UP | DOWN => set.vertical,
        c if c == UP | DOWN | LEFT => set.tee_left,
        c if c == UP | RIGHT => set.bottom_left,
        c if c == UP | RIGHT | LEFT => set.tee_up,
        c if c == UP | RIGHT | DOWN => set.tee_right,
        c if c == UP | RIGHT | DOWN | LEFT => set.cross,
        _ => return None,
    };
    Some(glyph)
}
