#![forbid(unsafe_code)]

//! The rendering pipeline: expand values into sections, measure, lay out,
//! paint, serialize.

use gridprint_core::{Matrix, Size, matrix_map};
use gridprint_style::Color;
use tracing::trace;

use crate::border::BorderMap;
use crate::canvas::Canvas;
use crate::cell::{CellInfo, CellValue, Section, SectionContent, SectionList};
use crate::layout;
use crate::measure;
use crate::options::{BorderMode, RenderOptions};
use crate::paint;

/// Convert rows of anything value-like into a renderable matrix.
#[must_use]
pub fn matrix_of<T: Into<CellValue>>(rows: Vec<Vec<T>>) -> Matrix<CellValue> {
    rows.into_iter()
        .map(|row| row.into_iter().map(Into::into).collect())
        .collect()
}

/// Render a matrix to a string of styled lines.
///
/// Rendering never fails: layout arithmetic saturates and out-of-canvas
/// writes are dropped. An empty matrix renders to the empty string.
#[must_use]
pub fn matrix_to_string(values: &Matrix<CellValue>, options: &RenderOptions) -> String {
    let mut cells = matrix_map(values, |value, row, col| {
        let sections = expand_sections(value, row, col, options);
        CellInfo::new(value.clone(), row, col, sections)
    });

    for row in cells.iter_mut() {
        for cell in row {
            cell.bounds = layout::cell_bounds(&cell.sections, options.include_zero_section);
        }
    }
    if options.equal_bounds {
        let unified = layout::unified_bounds(&cells);
        for row in cells.iter_mut() {
            for cell in row {
                cell.bounds = unified;
            }
        }
    }

    for row in cells.iter_mut() {
        for cell in row {
            measure::measure_sections(cell, options);
        }
    }
    if !options.collapse_sections {
        measure::equalize_sections(&mut cells);
    }

    let border = options.border_unit();
    for row in cells.iter_mut() {
        for cell in row {
            cell.inner_size = measure::inner_size(cell, options);
            cell.outer_size = Size {
                height: cell.inner_size.height + 2 * border,
                width: cell.inner_size.width + 2 * border,
            };
        }
    }

    let row_count = cells.len();
    let column_count = cells.iter().map(Vec::len).max().unwrap_or(0);
    let labels = layout::collect_index_labels(row_count, column_count, options);
    let reservation = layout::measure_index_labels(&labels, border);

    let mut row_heights = layout::outer_row_heights(&cells, &reservation);
    let mut column_widths = layout::outer_column_widths(&cells, &reservation);
    if !options.collapse_cells {
        layout::equalize_dimensions(&mut row_heights, &mut column_widths);
    }

    for row in cells.iter_mut() {
        for cell in row {
            // only the outer size takes the equalized dimension; the inner
            // size stays at its measured value
            cell.outer_size = Size {
                height: row_heights.get(&cell.row).copied().unwrap_or(0),
                width: column_widths.get(&cell.col).copied().unwrap_or(0),
            };
        }
    }

    let row_starts = layout::axis_starts(row_count, &row_heights, border, options.row_spacing);
    let column_starts = layout::axis_starts(
        column_count,
        &column_widths,
        border,
        options.effective_column_spacing(),
    );

    layout::position_cells(&mut cells, &row_starts, &column_starts, &reservation, options);
    for row in cells.iter_mut() {
        for cell in row {
            measure::section_starts(cell, options);
        }
    }

    let size = layout::canvas_size(&cells);
    trace!(
        rows = row_count,
        columns = column_count,
        height = size.height,
        width = size.width,
        "matrix laid out"
    );
    let mut canvas = Canvas::new(size);

    paint::paint_index_labels(
        &mut canvas,
        &labels,
        &reservation,
        &row_starts,
        &column_starts,
        &column_widths,
        options,
    );

    if let BorderMode::PerCell(sides_of) = &options.border {
        let mut map = BorderMap::new();
        for row in &cells {
            for cell in row {
                let sides = sides_of(&cell.value, cell.row, cell.col);
                map.mark_cell(cell.outer_position, cell.outer_size, sides);
            }
        }
        paint::paint_borders(&mut canvas, &map, &options.border_type.border_set());
    }

    for row in &cells {
        for cell in row {
            paint::paint_cell_background(&mut canvas, cell, options);
        }
    }
    for row in &cells {
        for cell in row {
            paint::paint_section_separators(&mut canvas, cell, options);
        }
    }
    for row in &cells {
        for cell in row {
            paint::paint_cell_text(&mut canvas, cell, options);
        }
    }

    canvas.render(options.profile)
}

/// Render and print to stdout.
pub fn matrix_print(values: &Matrix<CellValue>, options: &RenderOptions) {
    println!("{}", matrix_to_string(values, options));
}

fn expand_sections(
    value: &CellValue,
    row: usize,
    col: usize,
    options: &RenderOptions,
) -> SectionList {
    let mut sections = SectionList::new();

    match &options.value {
        Some(f) => match f(value, row, col) {
            SectionContent::Value(v) => sections.push(Section::new(0, 0, v.render())),
            SectionContent::Sections(list) => sections.extend(list),
        },
        None => sections.push(Section::new(0, 0, value.render())),
    }

    if let Some(f) = &options.top_value {
        match f(value, row, col) {
            SectionContent::Value(v) => {
                sections.push(Section::new(-1, 0, v.render()).fg(Color::Gray));
            }
            // explicit sections are coerced into the top satellite slot
            SectionContent::Sections(list) => sections.extend(list.into_iter().map(|mut s| {
                s.section_row = -1;
                s.section_col = 0;
                s
            })),
        }
    }
    if let Some(f) = &options.right_value {
        sections.push(Section::new(0, 1, f(value, row, col).render()));
    }
    if let Some(f) = &options.bottom_value {
        sections.push(Section::new(1, 0, f(value, row, col).render()));
    }
    if let Some(f) = &options.left_value {
        sections.push(Section::new(0, -1, f(value, row, col).render()));
    }

    sections
}
