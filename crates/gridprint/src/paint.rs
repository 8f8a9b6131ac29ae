#![forbid(unsafe_code)]

//! Painting passes, applied in a fixed later-wins order: index labels,
//! merged borders, cell backgrounds, section separators, section text.

use std::collections::HashMap;

use gridprint_core::Position;
use gridprint_style::{Color, Style};

use crate::border::{BorderMap, BorderSet};
use crate::canvas::Canvas;
use crate::cell::CellInfo;
use crate::layout::{IndexLabels, IndexReservation, offset};
use crate::options::{Alignment, RenderOptions};

/// The style shared by a cell's background, separators and text, from the
/// cell-level predicates. Separators additionally dim.
pub(crate) fn resolve_cell_style(cell: &CellInfo, options: &RenderOptions, dimmed: bool) -> Style {
    let mut style = Style::new();
    if let Some(f) = &options.highlight
        && f(&cell.value, cell.row, cell.col)
    {
        style = style.fg(Color::BrightYellow);
    }
    if let Some(f) = &options.underline
        && f(&cell.value, cell.row, cell.col)
    {
        style = style.underline();
    }
    if let Some(f) = &options.inverse
        && f(&cell.value, cell.row, cell.col)
    {
        style = style.inverse();
    }
    if dimmed {
        style = style.dim();
    }
    style
}

/// Paint the gutter labels. Row labels sit left of their row, column
/// labels above their column; both render gray.
pub(crate) fn paint_index_labels(
    canvas: &mut Canvas,
    labels: &IndexLabels,
    reservation: &IndexReservation,
    row_starts: &HashMap<usize, i64>,
    column_starts: &HashMap<usize, i64>,
    column_widths: &HashMap<usize, usize>,
    options: &RenderOptions,
) {
    let border = options.border_unit();
    let gray = Style::new().fg(Color::Gray);

    for (&row, lines) in &labels.rows {
        let start = row_starts.get(&row).copied().unwrap_or(0);
        let top = offset(reservation.column_height + border, start);
        for (i, line) in lines.iter().enumerate() {
            canvas.print_text(
                line,
                Position { top: top + i, left: 0 },
                reservation.row_width,
                Alignment::Left,
                gray,
            );
        }
    }

    for (&col, lines) in &labels.columns {
        let start = column_starts.get(&col).copied().unwrap_or(0);
        let left = offset(reservation.row_width + border, start);
        let width = column_widths
            .get(&col)
            .copied()
            .unwrap_or(0)
            .saturating_sub(2 * border);
        for (i, line) in lines.iter().enumerate() {
            canvas.print_text(line, Position { top: i, left }, width, options.align, gray);
        }
    }
}

/// Resolve every accumulated border mark to its glyph. Borders paint
/// uncolored so cell styling never bleeds into shared outlines.
pub(crate) fn paint_borders(canvas: &mut Canvas, map: &BorderMap, set: &BorderSet) {
    for ((top, left), glyph) in map.glyphs(set) {
        canvas.put(top, left, glyph, Style::new());
    }
}

/// Fill the cell's inner rectangle with its resolved style.
pub(crate) fn paint_cell_background(canvas: &mut Canvas, cell: &CellInfo, options: &RenderOptions) {
    let style = resolve_cell_style(cell, options, false);
    for line in 0..cell.inner_size.height {
        canvas.print_text(
            "",
            Position {
                top: cell.inner_position.top + line,
                left: cell.inner_position.left,
            },
            cell.inner_size.width,
            Alignment::Left,
            style,
        );
    }
}

/// Draw the dimmed separator lines between section rows and columns.
pub(crate) fn paint_section_separators(
    canvas: &mut Canvas,
    cell: &CellInfo,
    options: &RenderOptions,
) {
    let style = resolve_cell_style(cell, options, true);

    if let Some(ch) = options.section_vertical_border {
        for sc in cell.bounds.columns().skip(1) {
            let gap = cell.column_starts.get(&sc).copied().unwrap_or(0);
            let left = cell.inner_position.left + gap.saturating_sub(1);
            for y in 0..cell.inner_size.height {
                canvas.put(cell.inner_position.top + y, left, ch, style);
            }
        }
    }

    // horizontal lines run last so crossings show the horizontal character
    if let Some(ch) = options.section_horizontal_border {
        for sr in cell.bounds.rows().skip(1) {
            let line = cell.row_starts.get(&sr).copied().unwrap_or(0);
            let top = cell.inner_position.top + line.saturating_sub(1);
            for x in 0..cell.inner_size.width {
                canvas.put(top, cell.inner_position.left + x, ch, style);
            }
        }
    }
}

/// Paint the cell's sections. Sections sharing a slot stack downward in
/// list order; a section's own colors override the cell style but keep
/// its decorations.
pub(crate) fn paint_cell_text(canvas: &mut Canvas, cell: &CellInfo, options: &RenderOptions) {
    let base = resolve_cell_style(cell, options, false);
    let mut stacked: HashMap<(i32, i32), usize> = HashMap::new();

    for section in &cell.sections {
        let slot = (section.section_row, section.section_col);
        let depth = stacked.entry(slot).or_insert(0);
        let top = cell.inner_position.top
            + cell.row_starts.get(&slot.0).copied().unwrap_or(0)
            + *depth;
        *depth += 1;

        let left =
            cell.inner_position.left + cell.column_starts.get(&slot.1).copied().unwrap_or(0);
        let width = cell.column_widths.get(&slot.1).copied().unwrap_or(0);
        let style = base.with_colors(section.fg, section.bg);
        canvas.print_text(
            &section.text,
            Position { top, left },
            width,
            options.align,
            style,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::{CellValue, Section};
    use crate::measure::{measure_sections, section_starts};
    use gridprint_core::Size;
    use gridprint_style::ColorProfile;
    use smallvec::smallvec;

    fn laid_out_cell(sections: Vec<Section>, options: &RenderOptions) -> CellInfo {
        let mut cell = CellInfo::new(CellValue::from(0), 0, 0, smallvec![]);
        cell.bounds = crate::layout::cell_bounds(&sections, true);
        cell.sections = sections;
        measure_sections(&mut cell, options);
        cell.inner_size = crate::measure::inner_size(&cell, options);
        section_starts(&mut cell, options);
        cell
    }

    #[test]
    fn text_paints_at_section_starts() {
        let opts = RenderOptions::new().no_border();
        let cell = laid_out_cell(
            vec![Section::new(0, 0, "ab"), Section::new(0, 1, "c")],
            &opts,
        );
        let mut canvas = Canvas::new(Size::new(1, 4));
        paint_cell_text(&mut canvas, &cell, &opts);
        assert_eq!(canvas.render(ColorProfile::NoColor), "ab c");
    }

    #[test]
    fn stacked_sections_paint_on_consecutive_lines() {
        let opts = RenderOptions::new().no_border();
        let cell = laid_out_cell(
            vec![Section::new(0, 0, "a"), Section::new(0, 0, "b")],
            &opts,
        );
        let mut canvas = Canvas::new(Size::new(2, 1));
        paint_cell_text(&mut canvas, &cell, &opts);
        assert_eq!(canvas.render(ColorProfile::NoColor), "a\nb");
    }

    #[test]
    fn separators_draw_between_section_rows() {
        let opts = RenderOptions::new().no_border();
        let cell = laid_out_cell(
            vec![Section::new(-1, 0, "top"), Section::new(0, 0, "val")],
            &opts,
        );
        let mut canvas = Canvas::new(Size::new(3, 3));
        paint_section_separators(&mut canvas, &cell, &opts);
        paint_cell_text(&mut canvas, &cell, &opts);
        assert_eq!(canvas.render(ColorProfile::NoColor), "top\n---\nval");
    }

    #[test]
    fn separators_are_dimmed() {
        let opts = RenderOptions::new().no_border();
        let cell = laid_out_cell(
            vec![Section::new(-1, 0, "t"), Section::new(0, 0, "v")],
            &opts,
        );
        let mut canvas = Canvas::new(Size::new(3, 1));
        paint_section_separators(&mut canvas, &cell, &opts);
        assert_eq!(
            canvas.render(ColorProfile::Ansi),
            " \n\u{1b}[2m-\u{1b}[0m\n "
        );
    }

    #[test]
    fn highlight_predicate_styles_text() {
        let opts = RenderOptions::new()
            .no_border()
            .highlight(|_, _, _| true);
        let cell = laid_out_cell(vec![Section::new(0, 0, "x")], &opts);
        let mut canvas = Canvas::new(Size::new(1, 1));
        paint_cell_text(&mut canvas, &cell, &opts);
        assert_eq!(
            canvas.render(ColorProfile::Ansi),
            "\u{1b}[93mx\u{1b}[0m"
        );
    }

    #[test]
    fn section_colors_override_cell_style_but_keep_decorations() {
        let opts = RenderOptions::new()
            .no_border()
            .highlight(|_, _, _| true)
            .underline(|_, _, _| true);
        let cell = laid_out_cell(
            vec![Section::new(0, 0, "x").fg(Color::Green)],
            &opts,
        );
        let mut canvas = Canvas::new(Size::new(1, 1));
        paint_cell_text(&mut canvas, &cell, &opts);
        assert_eq!(
            canvas.render(ColorProfile::Ansi),
            "\u{1b}[4;32mx\u{1b}[0m"
        );
    }

    #[test]
    fn resolved_style_composes_all_predicates() {
        let opts = RenderOptions::new()
            .highlight(|_, _, _| true)
            .underline(|_, _, _| true)
            .inverse(|_, _, _| true);
        let cell = laid_out_cell(vec![Section::new(0, 0, "x")], &opts);
        let style = resolve_cell_style(&cell, &opts, true);
        assert_eq!(style.sgr_params(), vec![2, 4, 7, 93]);
    }
}
