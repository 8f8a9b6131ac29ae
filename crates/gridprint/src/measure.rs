#![forbid(unsafe_code)]

//! Section measurement: per-slot sizes, per-cell row/column thickness,
//! cross-matrix equalization, and the resulting inner geometry.

use std::collections::HashMap;

use gridprint_core::{Matrix, Size};
use unicode_width::UnicodeWidthStr;

use crate::cell::CellInfo;
use crate::options::RenderOptions;

/// Measure one cell's section slots and derive its per-section-row heights
/// and per-section-column widths.
///
/// Stacked sections in the same slot each claim a line: a slot holding `n`
/// sections is `n` lines tall (subject to `min_height`) and as wide as its
/// widest text (subject to `min_width`). Slots the bounds cover but no
/// section occupies measure zero unless `equal_sections_in_cell` flattens
/// everything to the cell's maximum.
pub(crate) fn measure_sections(cell: &mut CellInfo, options: &RenderOptions) {
    let mut slots: HashMap<(i32, i32), Size> = HashMap::new();

    for section in &cell.sections {
        let slot = slots
            .entry((section.section_row, section.section_col))
            .or_default();
        slot.height = slot.height.max(options.min_height) + 1;
        slot.width = slot
            .width
            .max(UnicodeWidthStr::width(section.text.as_str()))
            .max(options.min_width);
        cell.max_height = cell.max_height.max(slot.height);
        cell.max_width = cell.max_width.max(slot.width);
    }

    cell.row_heights.clear();
    cell.column_widths.clear();
    for sr in cell.bounds.rows() {
        for sc in cell.bounds.columns() {
            let (height, width) = if options.equal_sections_in_cell {
                (cell.max_height, cell.max_width)
            } else {
                let slot = slots.get(&(sr, sc)).copied().unwrap_or_default();
                (slot.height, slot.width)
            };
            let row = cell.row_heights.entry(sr).or_insert(0);
            *row = (*row).max(height);
            let col = cell.column_widths.entry(sc).or_insert(0);
            *col = (*col).max(width);
        }
    }
}

/// Flatten every cell's section slots to the matrix-wide maximum slot
/// size, so the same section coordinate lines up across all cells.
pub(crate) fn equalize_sections(cells: &mut Matrix<CellInfo>) {
    let mut max_height = 0;
    let mut max_width = 0;
    for row in cells.iter() {
        for cell in row {
            max_height = max_height.max(cell.max_height);
            max_width = max_width.max(cell.max_width);
        }
    }

    for row in cells.iter_mut() {
        for cell in row {
            cell.max_height = max_height;
            cell.max_width = max_width;
            for height in cell.row_heights.values_mut() {
                *height = max_height;
            }
            for width in cell.column_widths.values_mut() {
                *width = max_width;
            }
        }
    }
}

/// A cell's inner (content) size: section thicknesses plus one line per
/// horizontal separator and one column per section-column gap.
pub(crate) fn inner_size(cell: &CellInfo, options: &RenderOptions) -> Size {
    let row_gap = usize::from(options.section_horizontal_border.is_some());

    let mut height = 0;
    for sr in cell.bounds.rows() {
        height += cell.row_heights.get(&sr).copied().unwrap_or(0);
        if sr != cell.bounds.last_row {
            height += row_gap;
        }
    }

    let mut width = 0;
    for sc in cell.bounds.columns() {
        width += cell.column_widths.get(&sc).copied().unwrap_or(0);
        if sc != cell.bounds.last_column {
            width += 1;
        }
    }

    Size { height, width }
}

/// Offsets of each section row/column inside the cell's inner area.
pub(crate) fn section_starts(cell: &mut CellInfo, options: &RenderOptions) {
    let row_gap = usize::from(options.section_horizontal_border.is_some());

    let mut start = 0;
    for sr in cell.bounds.rows() {
        cell.row_starts.insert(sr, start);
        start += cell.row_heights.get(&sr).copied().unwrap_or(0) + row_gap;
    }

    let mut start = 0;
    for sc in cell.bounds.columns() {
        cell.column_starts.insert(sc, start);
        start += cell.column_widths.get(&sc).copied().unwrap_or(0) + 1;
    }
}
