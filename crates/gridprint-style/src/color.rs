#![forbid(unsafe_code)]

//! Named ANSI-16 colors and the output color profile.

use tracing::debug;

/// Named colors of the ANSI 16-color palette.
///
/// `Gray` is the conventional name for bright black; it is the default
/// color of index labels and top satellite sections.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

impl Color {
    /// SGR parameter selecting this color as the foreground.
    #[must_use]
    pub const fn fg_code(self) -> u8 {
        match self {
            Self::Black => 30,
            Self::Red => 31,
            Self::Green => 32,
            Self::Yellow => 33,
            Self::Blue => 34,
            Self::Magenta => 35,
            Self::Cyan => 36,
            Self::White => 37,
            Self::Gray => 90,
            Self::BrightRed => 91,
            Self::BrightGreen => 92,
            Self::BrightYellow => 93,
            Self::BrightBlue => 94,
            Self::BrightMagenta => 95,
            Self::BrightCyan => 96,
            Self::BrightWhite => 97,
        }
    }

    /// SGR parameter selecting this color as the background.
    #[must_use]
    pub const fn bg_code(self) -> u8 {
        self.fg_code() + 10
    }

    /// Look up a color by its conventional lowercase name.
    #[must_use]
    pub fn by_name(name: &str) -> Option<Self> {
        Some(match name {
            "black" => Self::Black,
            "red" => Self::Red,
            "green" => Self::Green,
            "yellow" => Self::Yellow,
            "blue" => Self::Blue,
            "magenta" => Self::Magenta,
            "cyan" => Self::Cyan,
            "white" => Self::White,
            "gray" | "grey" => Self::Gray,
            "redBright" | "brightRed" => Self::BrightRed,
            "greenBright" | "brightGreen" => Self::BrightGreen,
            "yellowBright" | "brightYellow" => Self::BrightYellow,
            "blueBright" | "brightBlue" => Self::BrightBlue,
            "magentaBright" | "brightMagenta" => Self::BrightMagenta,
            "cyanBright" | "brightCyan" => Self::BrightCyan,
            "whiteBright" | "brightWhite" => Self::BrightWhite,
            _ => return None,
        })
    }
}

/// Output color profile.
///
/// `Ansi` emits SGR escape sequences; `NoColor` emits the bare character
/// grid. Substituting `NoColor` is the supported way to make renders
/// byte-comparable in tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ColorProfile {
    #[default]
    Ansi,
    NoColor,
}

impl ColorProfile {
    /// Choose a profile from explicit detection flags.
    ///
    /// `no_color` should reflect explicit user intent (e.g. `NO_COLOR`).
    #[must_use]
    pub const fn from_flags(no_color: bool) -> Self {
        if no_color { Self::NoColor } else { Self::Ansi }
    }

    /// Choose a profile from the environment, honoring `NO_COLOR`.
    #[must_use]
    pub fn from_env() -> Self {
        let no_color = std::env::var_os("NO_COLOR").is_some_and(|v| !v.is_empty());
        let profile = Self::from_flags(no_color);
        debug!(?profile, "color profile selected from environment");
        profile
    }

    #[must_use]
    pub const fn colors_enabled(self) -> bool {
        matches!(self, Self::Ansi)
    }
}

/// Remove all SGR escape sequences (`ESC [ ... m`) from a string.
///
/// Stripping a colored render must yield the same bytes as rendering with
/// [`ColorProfile::NoColor`] in the first place.
#[must_use]
pub fn strip_sgr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch == '\u{1b}' && chars.peek() == Some(&'[') {
            chars.next();
            for param in chars.by_ref() {
                if param == 'm' {
                    break;
                }
            }
        } else {
            out.push(ch);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bg_code_is_fg_plus_ten() {
        assert_eq!(Color::Red.bg_code(), 41);
        assert_eq!(Color::Gray.bg_code(), 100);
        assert_eq!(Color::BrightWhite.bg_code(), 107);
    }

    #[test]
    fn gray_is_bright_black() {
        assert_eq!(Color::Gray.fg_code(), 90);
    }

    #[test]
    fn by_name_accepts_chalk_style_keywords() {
        assert_eq!(Color::by_name("gray"), Some(Color::Gray));
        assert_eq!(Color::by_name("grey"), Some(Color::Gray));
        assert_eq!(Color::by_name("yellowBright"), Some(Color::BrightYellow));
        assert_eq!(Color::by_name("nope"), None);
    }

    #[test]
    fn profile_from_flags() {
        assert_eq!(ColorProfile::from_flags(true), ColorProfile::NoColor);
        assert_eq!(ColorProfile::from_flags(false), ColorProfile::Ansi);
        assert!(ColorProfile::Ansi.colors_enabled());
        assert!(!ColorProfile::NoColor.colors_enabled());
    }

    #[test]
    fn strip_removes_sgr_sequences() {
        let colored = "\u{1b}[93;4mhi\u{1b}[0m there";
        assert_eq!(strip_sgr(colored), "hi there");
    }

    #[test]
    fn strip_leaves_plain_text_untouched() {
        let plain = "┌─┐\n│a│\n└─┘";
        assert_eq!(strip_sgr(plain), plain);
    }

    #[test]
    fn strip_handles_unterminated_sequence() {
        assert_eq!(strip_sgr("ok\u{1b}[93"), "ok");
    }
}
