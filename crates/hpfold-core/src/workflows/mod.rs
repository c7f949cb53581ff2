//! # Workflows Module
//!
//! High-level entry points that wrap the engine with validation, timing and progress
//! reporting.
//!
//! - **Fold Workflow** ([`fold`]) - Fold one sequence and validate the winning walk
//! - **Enumerate Workflow** ([`enumerate`]) - Fold every `H`/`P` sequence of a given length
//!   and aggregate the scores

pub mod enumerate;
pub mod fold;
