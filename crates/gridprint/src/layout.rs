#![forbid(unsafe_code)]

//! Matrix-level layout: section bounds, index gutters, outer row/column
//! dimensions, axis starts, and final cell positioning.
//!
//! Axis starts are computed in `i64`: with borders disabled and collapsed
//! ragged rows, a start can go transiently negative (a step is thickness
//! minus border plus spacing, and an absent row has zero thickness). The
//! conversion to canvas coordinates clamps at zero.

use std::collections::HashMap;

use gridprint_core::{Bounds, Matrix, Position, Size, matrix_for_each};
use unicode_width::UnicodeWidthStr;

use crate::cell::{CellInfo, Section};
use crate::options::RenderOptions;

/// Bounds of one cell's section grid. With `include_zero_section` the
/// origin slot is always covered, even for an empty section list.
pub(crate) fn cell_bounds(sections: &[Section], include_zero_section: bool) -> Bounds {
    let mut bounds = match (include_zero_section, sections.first()) {
        (false, Some(first)) => Bounds::at(first.section_row, first.section_col),
        _ => Bounds::at_origin(),
    };
    for section in sections {
        bounds.include(section.section_row, section.section_col);
    }
    bounds
}

/// The envelope of all cells' bounds, used to give every cell the same
/// section grid when `equal_bounds` is on.
pub(crate) fn unified_bounds(cells: &Matrix<CellInfo>) -> Bounds {
    let mut unified: Option<Bounds> = None;
    matrix_for_each(cells, |cell, _, _| {
        unified = Some(match unified {
            Some(bounds) => bounds.envelope(cell.bounds),
            None => cell.bounds,
        });
    });
    unified.unwrap_or_default()
}

/// Gutter labels for each indexed row and column.
#[derive(Debug, Default)]
pub(crate) struct IndexLabels {
    pub rows: HashMap<usize, Vec<String>>,
    pub columns: HashMap<usize, Vec<String>>,
}

pub(crate) fn collect_index_labels(
    row_count: usize,
    column_count: usize,
    options: &RenderOptions,
) -> IndexLabels {
    let mut labels = IndexLabels::default();
    if let Some(mode) = &options.row_indexes {
        for row in 0..row_count {
            labels.rows.insert(row, mode.labels(row));
        }
    }
    if let Some(mode) = &options.column_indexes {
        for col in 0..column_count {
            labels.columns.insert(col, mode.labels(col));
        }
    }
    labels
}

/// Space reserved for index gutters.
///
/// `row_width` is the left gutter's width and `column_height` the top
/// gutter's height. Per-row heights and per-column widths let labels claim
/// extra thickness for the row or column they annotate; these include the
/// border allowance on both sides so a label never ends up wider than its
/// bordered column.
#[derive(Debug, Default)]
pub(crate) struct IndexReservation {
    pub row_heights: HashMap<usize, usize>,
    pub row_width: usize,
    pub column_widths: HashMap<usize, usize>,
    pub column_height: usize,
}

pub(crate) fn measure_index_labels(labels: &IndexLabels, border: usize) -> IndexReservation {
    let mut reservation = IndexReservation::default();

    for (&row, lines) in &labels.rows {
        reservation
            .row_heights
            .insert(row, lines.len() + 2 * border);
        let width = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);
        reservation.row_width = reservation.row_width.max(width);
    }

    for (&col, lines) in &labels.columns {
        let width = lines
            .iter()
            .map(|line| UnicodeWidthStr::width(line.as_str()))
            .max()
            .unwrap_or(0);
        reservation.column_widths.insert(col, width + 2 * border);
        reservation.column_height = reservation.column_height.max(lines.len());
    }

    reservation
}

/// Outer height of each matrix row: the tallest cell in it, raised to the
/// row's index-label height where one is reserved.
pub(crate) fn outer_row_heights(
    cells: &Matrix<CellInfo>,
    reservation: &IndexReservation,
) -> HashMap<usize, usize> {
    let mut heights: HashMap<usize, usize> = reservation.row_heights.clone();
    matrix_for_each(cells, |cell, row, _| {
        let entry = heights.entry(row).or_insert(0);
        *entry = (*entry).max(cell.outer_size.height);
    });
    heights
}

/// Outer width of each matrix column, symmetric to [`outer_row_heights`].
pub(crate) fn outer_column_widths(
    cells: &Matrix<CellInfo>,
    reservation: &IndexReservation,
) -> HashMap<usize, usize> {
    let mut widths: HashMap<usize, usize> = reservation.column_widths.clone();
    matrix_for_each(cells, |cell, _, col| {
        let entry = widths.entry(col).or_insert(0);
        *entry = (*entry).max(cell.outer_size.width);
    });
    widths
}

/// Flatten per-row heights and per-column widths to their global maxima.
pub(crate) fn equalize_dimensions(
    row_heights: &mut HashMap<usize, usize>,
    column_widths: &mut HashMap<usize, usize>,
) {
    let max_height = row_heights.values().copied().max().unwrap_or(0);
    let max_width = column_widths.values().copied().max().unwrap_or(0);
    for height in row_heights.values_mut() {
        *height = max_height;
    }
    for width in column_widths.values_mut() {
        *width = max_width;
    }
}

/// Prefix-sum starts along one axis. Adjacent bordered cells overlap by
/// the border so their outlines merge into one shared line.
pub(crate) fn axis_starts(
    count: usize,
    thickness: &HashMap<usize, usize>,
    border: usize,
    spacing: usize,
) -> HashMap<usize, i64> {
    let mut starts = HashMap::with_capacity(count);
    let mut at: i64 = 0;
    for index in 0..count {
        starts.insert(index, at);
        let step = thickness.get(&index).copied().unwrap_or(0) as i64;
        at += step - border as i64 + spacing as i64;
    }
    starts
}

/// Clamp an axis start to canvas coordinates.
pub(crate) fn offset(base: usize, start: i64) -> usize {
    (base as i64 + start).max(0) as usize
}

/// Assign every cell its outer and inner position from the axis starts,
/// the index gutters and the per-row indent.
pub(crate) fn position_cells(
    cells: &mut Matrix<CellInfo>,
    row_starts: &HashMap<usize, i64>,
    column_starts: &HashMap<usize, i64>,
    reservation: &IndexReservation,
    options: &RenderOptions,
) {
    let border = options.border_unit();
    for row_cells in cells.iter_mut() {
        for cell in row_cells {
            let indent = options.indent.as_ref().map_or(0, |f| f(cell.row));
            let row_start = row_starts.get(&cell.row).copied().unwrap_or(0);
            let column_start = column_starts.get(&cell.col).copied().unwrap_or(0);
            cell.outer_position = Position {
                top: offset(reservation.column_height, row_start),
                left: offset(reservation.row_width + indent, column_start),
            };
            cell.inner_position = Position {
                top: cell.outer_position.top + border,
                left: cell.outer_position.left + border,
            };
        }
    }
}

/// The smallest canvas covering every cell's outer rectangle.
pub(crate) fn canvas_size(cells: &Matrix<CellInfo>) -> Size {
    let mut size = Size::default();
    matrix_for_each(cells, |cell, _, _| {
        size.height = size
            .height
            .max(cell.outer_position.top + cell.outer_size.height);
        size.width = size
            .width
            .max(cell.outer_position.left + cell.outer_size.width);
    });
    size
}
