#![forbid(unsafe_code)]

//! The per-character style record painted into the canvas.

use crate::color::{Color, ColorProfile};

bitflags::bitflags! {
    /// Text decoration flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct Decorations: u8 {
        /// Single underline.
        const UNDERLINE = 1 << 0;
        /// Reverse video (swap fg/bg).
        const INVERSE = 1 << 1;
        /// Dim / decreased intensity.
        const DIM = 1 << 2;
    }
}

/// Styling applied to one canvas cell: optional fg/bg color plus
/// decorations. All axes compose independently.
///
/// # Example
/// ```
/// use gridprint_style::{Color, Decorations, Style};
///
/// let style = Style::new().fg(Color::BrightYellow).underline();
/// assert_eq!(style.fg, Some(Color::BrightYellow));
/// assert!(style.decorations.contains(Decorations::UNDERLINE));
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Style {
    pub fg: Option<Color>,
    pub bg: Option<Color>,
    pub decorations: Decorations,
}

impl Style {
    /// Create an empty (terminal-default) style.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            decorations: Decorations::empty(),
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: Color) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: Color) -> Self {
        self.bg = Some(color);
        self
    }

    /// Add the underline decoration.
    #[must_use]
    pub fn underline(mut self) -> Self {
        self.decorations |= Decorations::UNDERLINE;
        self
    }

    /// Add the reverse-video decoration.
    #[must_use]
    pub fn inverse(mut self) -> Self {
        self.decorations |= Decorations::INVERSE;
        self
    }

    /// Add the dim decoration.
    #[must_use]
    pub fn dim(mut self) -> Self {
        self.decorations |= Decorations::DIM;
        self
    }

    /// Replace fg/bg with `fg`/`bg` where given, keeping decorations.
    ///
    /// This is the per-section named-color override: a section's own color
    /// wins over the cell's resolved color, but underline/inverse/dim from
    /// the cell still apply.
    #[must_use]
    pub fn with_colors(mut self, fg: Option<Color>, bg: Option<Color>) -> Self {
        if fg.is_some() {
            self.fg = fg;
        }
        if bg.is_some() {
            self.bg = bg;
        }
        self
    }

    #[must_use]
    pub fn is_plain(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.decorations.is_empty()
    }

    /// SGR parameters for this style, in emission order.
    #[must_use]
    pub fn sgr_params(&self) -> Vec<u8> {
        let mut params = Vec::new();
        if self.decorations.contains(Decorations::DIM) {
            params.push(2);
        }
        if self.decorations.contains(Decorations::UNDERLINE) {
            params.push(4);
        }
        if self.decorations.contains(Decorations::INVERSE) {
            params.push(7);
        }
        if let Some(fg) = self.fg {
            params.push(fg.fg_code());
        }
        if let Some(bg) = self.bg {
            params.push(bg.bg_code());
        }
        params
    }

    /// Wrap `text` in this style's SGR sequence under `profile`.
    ///
    /// Plain styles and [`ColorProfile::NoColor`] pass the text through
    /// unchanged.
    #[must_use]
    pub fn apply(&self, text: &str, profile: ColorProfile) -> String {
        if !profile.colors_enabled() || self.is_plain() || text.is_empty() {
            return text.to_string();
        }

        let params: Vec<String> = self.sgr_params().iter().map(u8::to_string).collect();
        format!("\u{1b}[{}m{}\u{1b}[0m", params.join(";"), text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::strip_sgr;

    #[test]
    fn default_style_is_plain() {
        assert!(Style::default().is_plain());
        assert!(Style::new().is_plain());
    }

    #[test]
    fn builder_composes_decorations() {
        let s = Style::new().underline().inverse().dim();
        assert!(s.decorations.contains(Decorations::UNDERLINE));
        assert!(s.decorations.contains(Decorations::INVERSE));
        assert!(s.decorations.contains(Decorations::DIM));
    }

    #[test]
    fn sgr_params_order_is_decorations_then_colors() {
        let s = Style::new().dim().underline().fg(Color::Gray).bg(Color::Black);
        assert_eq!(s.sgr_params(), vec![2, 4, 90, 40]);
    }

    #[test]
    fn apply_wraps_and_resets() {
        let s = Style::new().fg(Color::BrightYellow);
        assert_eq!(s.apply("x", ColorProfile::Ansi), "\u{1b}[93mx\u{1b}[0m");
    }

    #[test]
    fn apply_no_color_passes_through() {
        let s = Style::new().fg(Color::Red).underline();
        assert_eq!(s.apply("x", ColorProfile::NoColor), "x");
    }

    #[test]
    fn apply_plain_style_has_no_escapes() {
        assert_eq!(Style::new().apply("x", ColorProfile::Ansi), "x");
    }

    #[test]
    fn with_colors_overrides_only_given_axes() {
        let base = Style::new().fg(Color::White).bg(Color::Black).underline();
        let overridden = base.with_colors(Some(Color::Green), None);
        assert_eq!(overridden.fg, Some(Color::Green));
        assert_eq!(overridden.bg, Some(Color::Black));
        assert!(overridden.decorations.contains(Decorations::UNDERLINE));
    }

    #[test]
    fn strip_of_apply_recovers_text() {
        let s = Style::new().fg(Color::Red).bg(Color::Blue).dim();
        assert_eq!(strip_sgr(&s.apply("hello", ColorProfile::Ansi)), "hello");
    }
}

#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::color::strip_sgr;
    use proptest::prelude::*;

    fn arb_color() -> impl Strategy<Value = Color> {
        prop_oneof![
            Just(Color::Black),
            Just(Color::Red),
            Just(Color::Green),
            Just(Color::Yellow),
            Just(Color::Blue),
            Just(Color::Magenta),
            Just(Color::Cyan),
            Just(Color::White),
            Just(Color::Gray),
            Just(Color::BrightYellow),
            Just(Color::BrightWhite),
        ]
    }

    fn arb_style() -> impl Strategy<Value = Style> {
        (
            proptest::option::of(arb_color()),
            proptest::option::of(arb_color()),
            any::<u8>(),
        )
            .prop_map(|(fg, bg, bits)| Style {
                fg,
                bg,
                decorations: Decorations::from_bits_truncate(bits),
            })
    }

    proptest! {
        #[test]
        fn strip_inverts_apply(style in arb_style(), text in "[a-z ]{0,12}") {
            let colored = style.apply(&text, ColorProfile::Ansi);
            prop_assert_eq!(strip_sgr(&colored), text);
        }

        #[test]
        fn no_color_equals_stripped_ansi(style in arb_style(), text in "[a-z ]{0,12}") {
            let plain = style.apply(&text, ColorProfile::NoColor);
            let colored = style.apply(&text, ColorProfile::Ansi);
            prop_assert_eq!(strip_sgr(&colored), plain);
        }
    }
}
