#![forbid(unsafe_code)]

//! Generic algorithmic helpers: graph breadth-first search (over node
//! identity and over string-derived keys), binary-search variants over
//! monotonic predicates, and combinatorial enumeration (combinations and
//! nested cartesian loops).
//!
//! Everything here is a pure, synchronous algorithm; no I/O, no shared
//! state across calls.

pub mod bfs;
pub mod bin_search;
pub mod combinations;
pub mod nested_loops;

pub use bfs::{Bfs, BfsResult, KeyedBfs, KeyedBfsResult, Neighbors};
pub use bin_search::{first_fail, first_pass, last_fail, last_pass};
pub use combinations::{combinations, combinations_all, combinations_indexes, combinations_indexes_all};
pub use nested_loops::{nested_loops, nested_loops_all, nested_loops_indexes, nested_loops_indexes_all};
