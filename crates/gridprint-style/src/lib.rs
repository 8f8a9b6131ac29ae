#![forbid(unsafe_code)]

//! Styling for gridprint output: named colors, decoration flags, and the
//! [`ColorProfile`] that decides whether styles become ANSI escapes or are
//! dropped entirely (no-color mode for tests and dumb pipes).

pub mod color;
pub mod style;

pub use color::{Color, ColorProfile, strip_sgr};
pub use style::{Decorations, Style};
