#![forbid(unsafe_code)]

//! Matrix and table rendering for terminals.
//!
//! A matrix of values is expanded into per-cell *sections* (the value plus
//! optional satellites above, below, left and right), measured, laid out on
//! a character canvas, and painted: merged box-drawing borders, optional
//! row/column index gutters, per-cell ANSI styling.
//!
//! ```
//! use gridprint::{ColorProfile, RenderOptions, matrix_of, matrix_to_string};
//!
//! let m = matrix_of(vec![vec![1, 2], vec![3, 4]]);
//! let options = RenderOptions::new().profile(ColorProfile::NoColor);
//! let out = matrix_to_string(&m, &options);
//! assert_eq!(out.lines().count(), 5);
//! assert!(out.contains("┼"));
//! ```

pub mod border;
mod canvas;
pub mod cell;
mod layout;
mod measure;
pub mod options;
mod paint;
mod render;

pub use border::{BorderType, Borders};
pub use cell::{CellValue, Section, SectionContent};
pub use options::{Alignment, RenderOptions};
pub use render::{matrix_of, matrix_print, matrix_to_string};

pub use gridprint_core::{Bounds, Matrix, Position, Size};
pub use gridprint_style::{Color, ColorProfile, Style, strip_sgr};
