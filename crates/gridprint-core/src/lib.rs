#![forbid(unsafe_code)]

//! Shared primitives for the gridprint workspace.
//!
//! # Role in gridprint
//! `gridprint-core` holds the plain value types every layout pass speaks in
//! ([`geometry`]) and the ragged-safe iteration helpers the render pipeline
//! is written in terms of ([`matrix`]). It has no dependencies and no I/O.

pub mod geometry;
pub mod matrix;

pub use geometry::{Bounds, Position, Size};
pub use matrix::{Matrix, matrix_create, matrix_for_each, matrix_map, matrix_reduce};
