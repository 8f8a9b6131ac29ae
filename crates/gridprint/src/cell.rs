#![forbid(unsafe_code)]

//! Cell values, sections, and the per-cell working state threaded through
//! the layout pipeline.
//!
//! A matrix slot starts life as a [`CellValue`]. The value accessor expands
//! it into one or more [`Section`]s placed on a local grid around the value
//! itself (which sits at section coordinate `(0, 0)`); satellite accessors
//! contribute more sections above, below, left and right. Everything the
//! pipeline learns about a cell afterwards accumulates in [`CellInfo`].

use std::collections::HashMap;
use std::fmt;

use gridprint_core::{Bounds, Position, Size};
use gridprint_style::Color;
use smallvec::SmallVec;

/// A single matrix entry as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellValue {
    Text(String),
    Int(i64),
    Bool(bool),
}

impl CellValue {
    /// The rendered form of the value, exactly as it will appear in the
    /// cell's `(0, 0)` section.
    #[must_use]
    pub fn render(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Text(s) => f.write_str(s),
            CellValue::Int(n) => write!(f, "{n}"),
            CellValue::Bool(b) => write!(f, "{b}"),
        }
    }
}

impl From<&str> for CellValue {
    fn from(s: &str) -> Self {
        CellValue::Text(s.to_owned())
    }
}

impl From<String> for CellValue {
    fn from(s: String) -> Self {
        CellValue::Text(s)
    }
}

impl From<i64> for CellValue {
    fn from(n: i64) -> Self {
        CellValue::Int(n)
    }
}

impl From<i32> for CellValue {
    fn from(n: i32) -> Self {
        CellValue::Int(i64::from(n))
    }
}

impl From<usize> for CellValue {
    fn from(n: usize) -> Self {
        CellValue::Int(n as i64)
    }
}

impl From<bool> for CellValue {
    fn from(b: bool) -> Self {
        CellValue::Bool(b)
    }
}

/// One fragment of text occupying a slot on a cell's local section grid.
///
/// Section coordinates are relative to the cell's value, which occupies
/// `(0, 0)`; negative rows sit above it, negative columns to its left.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub section_row: i32,
    pub section_col: i32,
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub text: String,
}

impl Section {
    pub fn new(section_row: i32, section_col: i32, text: impl Into<String>) -> Self {
        Self {
            section_row,
            section_col,
            fg: None,
            bg: None,
            text: text.into(),
        }
    }

    #[must_use]
    pub fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }
}

/// What a value accessor may return for a cell: a plain replacement value
/// (placed at `(0, 0)`) or an explicit list of sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SectionContent {
    Value(CellValue),
    Sections(Vec<Section>),
}

impl From<CellValue> for SectionContent {
    fn from(value: CellValue) -> Self {
        SectionContent::Value(value)
    }
}

impl From<Vec<Section>> for SectionContent {
    fn from(sections: Vec<Section>) -> Self {
        SectionContent::Sections(sections)
    }
}

impl From<&str> for SectionContent {
    fn from(s: &str) -> Self {
        SectionContent::Value(s.into())
    }
}

impl From<String> for SectionContent {
    fn from(s: String) -> Self {
        SectionContent::Value(s.into())
    }
}

impl From<i64> for SectionContent {
    fn from(n: i64) -> Self {
        SectionContent::Value(n.into())
    }
}

impl From<i32> for SectionContent {
    fn from(n: i32) -> Self {
        SectionContent::Value(n.into())
    }
}

impl From<usize> for SectionContent {
    fn from(n: usize) -> Self {
        SectionContent::Value(n.into())
    }
}

impl From<bool> for SectionContent {
    fn from(b: bool) -> Self {
        SectionContent::Value(b.into())
    }
}

/// Most cells carry the value section plus at most four satellites.
pub(crate) type SectionList = SmallVec<[Section; 4]>;

/// Per-cell working state, filled in pass by pass.
///
/// Section-grid maps are keyed by section coordinate (`i32`, may be
/// negative); `row_starts`/`column_starts` are offsets inside the cell's
/// inner area and therefore non-negative.
#[derive(Debug, Clone)]
pub struct CellInfo {
    pub sections: Vec<Section>,
    pub value: CellValue,
    pub row: usize,
    pub col: usize,
    pub bounds: Bounds,
    pub row_heights: HashMap<i32, usize>,
    pub column_widths: HashMap<i32, usize>,
    pub row_starts: HashMap<i32, usize>,
    pub column_starts: HashMap<i32, usize>,
    pub max_height: usize,
    pub max_width: usize,
    pub inner_size: Size,
    pub outer_size: Size,
    pub outer_position: Position,
    pub inner_position: Position,
}

impl CellInfo {
    pub(crate) fn new(value: CellValue, row: usize, col: usize, sections: SectionList) -> Self {
        Self {
            sections: sections.into_vec(),
            value,
            row,
            col,
            bounds: Bounds::at_origin(),
            row_heights: HashMap::new(),
            column_widths: HashMap::new(),
            row_starts: HashMap::new(),
            column_starts: HashMap::new(),
            max_height: 0,
            max_width: 0,
            inner_size: Size::default(),
            outer_size: Size::default(),
            outer_position: Position::default(),
            inner_position: Position::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_render_like_display() {
        assert_eq!(CellValue::from("hi").render(), "hi");
        assert_eq!(CellValue::from(-42).render(), "-42");
        assert_eq!(CellValue::from(true).render(), "true");
    }

    #[test]
    fn section_builder_sets_colors() {
        let s = Section::new(-1, 0, "top").fg(Color::Red).bg(Color::Blue);
        assert_eq!(s.fg, Some(Color::Red));
        assert_eq!(s.bg, Some(Color::Blue));
        assert_eq!(s.section_row, -1);
    }

    #[test]
    fn section_content_from_scalar_places_a_value() {
        match SectionContent::from(7usize) {
            SectionContent::Value(CellValue::Int(7)) => {}
            other => panic!("unexpected content: {other:?}"),
        }
    }
}
