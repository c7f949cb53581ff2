//! Output formats for folded walks.
//!
//! - [`grid`] - ASCII rendering of a walk onto a character grid

pub mod grid;
