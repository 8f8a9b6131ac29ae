#![forbid(unsafe_code)]

//! Rendering options.
//!
//! [`RenderOptions`] is a builder-style bag of layout knobs and per-cell
//! accessor closures. Accessors receive the cell's value and its matrix
//! coordinates; they may be invoked more than once per render, so they
//! should be cheap and deterministic.

use gridprint_style::ColorProfile;

use crate::border::{BorderType, Borders};
use crate::cell::{CellValue, SectionContent};

/// Horizontal alignment of text inside its section slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    Left,
    #[default]
    Center,
    Right,
}

pub type ValueFn = Box<dyn Fn(&CellValue, usize, usize) -> SectionContent>;
pub type SatelliteFn = Box<dyn Fn(&CellValue, usize, usize) -> CellValue>;
pub type CellPredicate = Box<dyn Fn(&CellValue, usize, usize) -> bool>;
pub type BorderFn = Box<dyn Fn(&CellValue, usize, usize) -> Borders>;
pub type IndexFn = Box<dyn Fn(usize) -> Vec<String>>;
pub type IndentFn = Box<dyn Fn(usize) -> usize>;

/// How to label an axis gutter.
pub enum IndexMode {
    /// `"{i} "` for each row or column.
    Numbered,
    /// Caller-provided labels; one string per gutter line.
    Custom(IndexFn),
}

impl IndexMode {
    pub(crate) fn labels(&self, index: usize) -> Vec<String> {
        match self {
            IndexMode::Numbered => vec![format!("{index} ")],
            IndexMode::Custom(f) => f(index),
        }
    }
}

/// Whether and where cell outlines are drawn.
pub enum BorderMode {
    Disabled,
    /// Per-cell side selection; return [`Borders::NONE`] to skip a cell.
    PerCell(BorderFn),
}

impl Default for BorderMode {
    fn default() -> Self {
        BorderMode::PerCell(Box::new(|_, _, _| Borders::ALL))
    }
}

pub struct RenderOptions {
    pub(crate) include_zero_section: bool,
    pub(crate) equal_bounds: bool,
    pub(crate) equal_sections_in_cell: bool,
    pub(crate) collapse_sections: bool,
    pub(crate) collapse_cells: bool,
    pub(crate) section_horizontal_border: Option<char>,
    pub(crate) section_vertical_border: Option<char>,
    pub(crate) row_spacing: usize,
    pub(crate) column_spacing: Option<usize>,
    pub(crate) min_width: usize,
    pub(crate) min_height: usize,
    pub(crate) align: Alignment,
    pub(crate) row_indexes: Option<IndexMode>,
    pub(crate) column_indexes: Option<IndexMode>,
    pub(crate) border: BorderMode,
    pub(crate) border_type: BorderType,
    pub(crate) indent: Option<IndentFn>,
    pub(crate) value: Option<ValueFn>,
    pub(crate) top_value: Option<ValueFn>,
    pub(crate) right_value: Option<SatelliteFn>,
    pub(crate) bottom_value: Option<SatelliteFn>,
    pub(crate) left_value: Option<SatelliteFn>,
    pub(crate) highlight: Option<CellPredicate>,
    pub(crate) underline: Option<CellPredicate>,
    pub(crate) inverse: Option<CellPredicate>,
    pub(crate) profile: ColorProfile,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            include_zero_section: true,
            equal_bounds: true,
            equal_sections_in_cell: false,
            collapse_sections: false,
            collapse_cells: false,
            section_horizontal_border: Some('-'),
            section_vertical_border: Some('|'),
            row_spacing: 0,
            column_spacing: None,
            min_width: 0,
            min_height: 0,
            align: Alignment::Center,
            row_indexes: None,
            column_indexes: None,
            border: BorderMode::default(),
            border_type: BorderType::Square,
            indent: None,
            value: None,
            top_value: None,
            right_value: None,
            bottom_value: None,
            left_value: None,
            highlight: None,
            underline: None,
            inverse: None,
            profile: ColorProfile::from_env(),
        }
    }
}

impl RenderOptions {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Reserve the `(0, 0)` section slot in every cell even when a value
    /// accessor produced no section there. On by default.
    #[must_use]
    pub fn include_zero_section(mut self, on: bool) -> Self {
        self.include_zero_section = on;
        self
    }

    /// Give every cell the envelope of all cells' section bounds, so cells
    /// line up even when their section grids differ. On by default.
    #[must_use]
    pub fn equal_bounds(mut self, on: bool) -> Self {
        self.equal_bounds = on;
        self
    }

    /// Make every section slot inside a cell as large as the cell's
    /// largest slot.
    #[must_use]
    pub fn equal_sections_in_cell(mut self, on: bool) -> Self {
        self.equal_sections_in_cell = on;
        self
    }

    /// Skip equalizing section slot sizes across cells; each cell keeps
    /// its own measurements.
    #[must_use]
    pub fn collapse_sections(mut self, on: bool) -> Self {
        self.collapse_sections = on;
        self
    }

    /// Skip equalizing outer cell sizes across the matrix; each row and
    /// column keeps its own thickness.
    #[must_use]
    pub fn collapse_cells(mut self, on: bool) -> Self {
        self.collapse_cells = on;
        self
    }

    /// Character for horizontal separators between section rows.
    /// Defaults to `'-'`.
    #[must_use]
    pub fn section_horizontal_border(mut self, ch: char) -> Self {
        self.section_horizontal_border = Some(ch);
        self
    }

    /// Drop horizontal section separators and the line they occupy.
    #[must_use]
    pub fn no_section_horizontal_border(mut self) -> Self {
        self.section_horizontal_border = None;
        self
    }

    /// Character for vertical separators between section columns.
    /// Defaults to `'|'`.
    #[must_use]
    pub fn section_vertical_border(mut self, ch: char) -> Self {
        self.section_vertical_border = Some(ch);
        self
    }

    /// Drop vertical section separators; section columns stay one space
    /// apart.
    #[must_use]
    pub fn no_section_vertical_border(mut self) -> Self {
        self.section_vertical_border = None;
        self
    }

    /// Blank lines between matrix rows. Defaults to 0.
    #[must_use]
    pub fn row_spacing(mut self, lines: usize) -> Self {
        self.row_spacing = lines;
        self
    }

    /// Blank columns between matrix columns. Defaults to 0 when borders
    /// are drawn (neighbours share an outline) and 1 otherwise.
    #[must_use]
    pub fn column_spacing(mut self, columns: usize) -> Self {
        self.column_spacing = Some(columns);
        self
    }

    /// Minimum width of every section slot.
    #[must_use]
    pub fn min_width(mut self, width: usize) -> Self {
        self.min_width = width;
        self
    }

    /// Minimum height of every section slot.
    #[must_use]
    pub fn min_height(mut self, height: usize) -> Self {
        self.min_height = height;
        self
    }

    #[must_use]
    pub fn align(mut self, align: Alignment) -> Self {
        self.align = align;
        self
    }

    /// Number each matrix row in a left gutter.
    #[must_use]
    pub fn row_indexes(mut self) -> Self {
        self.row_indexes = Some(IndexMode::Numbered);
        self
    }

    /// Label each matrix row with caller-provided gutter lines.
    #[must_use]
    pub fn row_indexes_with(mut self, f: impl Fn(usize) -> Vec<String> + 'static) -> Self {
        self.row_indexes = Some(IndexMode::Custom(Box::new(f)));
        self
    }

    /// Number each matrix column in a top gutter.
    #[must_use]
    pub fn column_indexes(mut self) -> Self {
        self.column_indexes = Some(IndexMode::Numbered);
        self
    }

    /// Label each matrix column with caller-provided gutter lines.
    #[must_use]
    pub fn column_indexes_with(mut self, f: impl Fn(usize) -> Vec<String> + 'static) -> Self {
        self.column_indexes = Some(IndexMode::Custom(Box::new(f)));
        self
    }

    /// Choose outline sides per cell.
    #[must_use]
    pub fn border(mut self, f: impl Fn(&CellValue, usize, usize) -> Borders + 'static) -> Self {
        self.border = BorderMode::PerCell(Box::new(f));
        self
    }

    /// Draw no cell outlines at all. Cells shrink by the one-character
    /// frame and column spacing defaults to 1.
    #[must_use]
    pub fn no_border(mut self) -> Self {
        self.border = BorderMode::Disabled;
        self
    }

    /// Glyph family for cell outlines. Defaults to square corners.
    #[must_use]
    pub fn border_type(mut self, border_type: BorderType) -> Self {
        self.border_type = border_type;
        self
    }

    /// Shift each matrix row right by a per-row number of columns.
    #[must_use]
    pub fn indent(mut self, f: impl Fn(usize) -> usize + 'static) -> Self {
        self.indent = Some(Box::new(f));
        self
    }

    /// Replace the `(0, 0)` section content of each cell.
    #[must_use]
    pub fn value(
        mut self,
        f: impl Fn(&CellValue, usize, usize) -> SectionContent + 'static,
    ) -> Self {
        self.value = Some(Box::new(f));
        self
    }

    /// Add a section (or several) above each cell's value.
    #[must_use]
    pub fn top_value(
        mut self,
        f: impl Fn(&CellValue, usize, usize) -> SectionContent + 'static,
    ) -> Self {
        self.top_value = Some(Box::new(f));
        self
    }

    /// Add a section to the right of each cell's value.
    #[must_use]
    pub fn right_value(
        mut self,
        f: impl Fn(&CellValue, usize, usize) -> CellValue + 'static,
    ) -> Self {
        self.right_value = Some(Box::new(f));
        self
    }

    /// Add a section below each cell's value.
    #[must_use]
    pub fn bottom_value(
        mut self,
        f: impl Fn(&CellValue, usize, usize) -> CellValue + 'static,
    ) -> Self {
        self.bottom_value = Some(Box::new(f));
        self
    }

    /// Add a section to the left of each cell's value.
    #[must_use]
    pub fn left_value(
        mut self,
        f: impl Fn(&CellValue, usize, usize) -> CellValue + 'static,
    ) -> Self {
        self.left_value = Some(Box::new(f));
        self
    }

    /// Paint matching cells bright yellow.
    #[must_use]
    pub fn highlight(mut self, f: impl Fn(&CellValue, usize, usize) -> bool + 'static) -> Self {
        self.highlight = Some(Box::new(f));
        self
    }

    /// Underline matching cells.
    #[must_use]
    pub fn underline(mut self, f: impl Fn(&CellValue, usize, usize) -> bool + 'static) -> Self {
        self.underline = Some(Box::new(f));
        self
    }

    /// Swap foreground and background of matching cells.
    #[must_use]
    pub fn inverse(mut self, f: impl Fn(&CellValue, usize, usize) -> bool + 'static) -> Self {
        self.inverse = Some(Box::new(f));
        self
    }

    /// Override the environment-derived color profile.
    #[must_use]
    pub fn profile(mut self, profile: ColorProfile) -> Self {
        self.profile = profile;
        self
    }

    /// 1 when cell outlines are drawn, 0 otherwise. Border thickness feeds
    /// into outer sizes, index gutters and default column spacing.
    pub(crate) fn border_unit(&self) -> usize {
        match self.border {
            BorderMode::Disabled => 0,
            BorderMode::PerCell(_) => 1,
        }
    }

    pub(crate) fn effective_column_spacing(&self) -> usize {
        self.column_spacing.unwrap_or(1 - self.border_unit())
    }
}
