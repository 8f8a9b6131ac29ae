#![forbid(unsafe_code)]

//! A fixed-size character canvas that layout passes paint into.
//!
//! Every write is bounds-checked and out-of-range writes are dropped, so
//! painting can never fail regardless of how layout arithmetic turned out.
//! Styles are tracked per cell and collapsed into runs at serialization
//! time, so a row of identically-styled characters costs one SGR pair.

use gridprint_core::{Position, Size};
use gridprint_style::{ColorProfile, Style};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::options::Alignment;

#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct CanvasCell {
    pub ch: char,
    pub style: Style,
}

impl Default for CanvasCell {
    fn default() -> Self {
        Self {
            ch: ' ',
            style: Style::new(),
        }
    }
}

#[derive(Debug)]
pub(crate) struct Canvas {
    height: usize,
    width: usize,
    cells: Vec<CanvasCell>,
}

impl Canvas {
    pub(crate) fn new(size: Size) -> Self {
        Self {
            height: size.height,
            width: size.width,
            cells: vec![CanvasCell::default(); size.height * size.width],
        }
    }

    /// Write one character. Out-of-range coordinates are ignored.
    pub(crate) fn put(&mut self, top: usize, left: usize, ch: char, style: Style) {
        if top < self.height && left < self.width {
            self.cells[top * self.width + left] = CanvasCell { ch, style };
        }
    }

    /// Paint `text` into a `width`-column slot starting at `position`.
    ///
    /// The whole slot is filled with styled spaces first, then the text is
    /// drawn at its aligned offset. Text wider than the slot is not
    /// clipped; it simply runs past the slot's right edge.
    pub(crate) fn print_text(
        &mut self,
        text: &str,
        position: Position,
        width: usize,
        align: Alignment,
        style: Style,
    ) {
        for i in 0..width {
            self.put(position.top, position.left + i, ' ', style);
        }

        let text_width = UnicodeWidthStr::width(text);
        let pad = match align {
            Alignment::Left => 0,
            Alignment::Center => width.saturating_sub(text_width) / 2,
            Alignment::Right => width.saturating_sub(text_width),
        };

        let mut col = position.left + pad;
        for ch in text.chars() {
            let advance = UnicodeWidthChar::width(ch).unwrap_or(0);
            if advance == 0 {
                continue;
            }
            self.put(position.top, col, ch, style);
            col += advance;
        }
    }

    fn row(&self, top: usize) -> &[CanvasCell] {
        &self.cells[top * self.width..(top + 1) * self.width]
    }

    /// Serialize to lines of styled text joined by `\n`. An empty canvas
    /// serializes to the empty string.
    pub(crate) fn render(&self, profile: ColorProfile) -> String {
        let mut lines = Vec::with_capacity(self.height);
        for top in 0..self.height {
            let mut line = String::with_capacity(self.width);
            let mut run = String::new();
            let mut run_style = Style::new();
            for cell in self.row(top) {
                if cell.style != run_style && !run.is_empty() {
                    line.push_str(&run_style.apply(&run, profile));
                    run.clear();
                }
                run_style = cell.style;
                run.push(cell.ch);
            }
            if !run.is_empty() {
                line.push_str(&run_style.apply(&run, profile));
            }
            lines.push(line);
        }
        lines.join("\n")
    }
}
