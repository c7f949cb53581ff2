//! # Engine Module
//!
//! The branch-and-bound machinery that turns a [`Sequence`](crate::core::models::residue::Sequence)
//! into its best lattice fold.
//!
//! ## Architecture
//!
//! - **Search** ([`search`]) - Depth-first branch-and-bound over an explicit frontier of walks
//! - **Pruning** ([`pruning`]) - Decides when a partial walk can no longer improve and completes it directly
//! - **Configuration** ([`config`]) - Contact policy, bound pruning, and enumeration settings
//! - **State Tracking** ([`state`]) - The best fold found and the counters gathered on the way
//! - **Progress Monitoring** ([`progress`]) - Callback-based progress events for front ends
//! - **Error Handling** ([`error`]) - Engine-specific error types
//!
//! ## Key Capabilities
//!
//! - **Exact search**: every self-avoiding embedding from the fixed seed bond is covered,
//!   either explicitly or by a pruning argument
//! - **Shared-prefix walks** so each expansion costs one arena node
//! - **Deterministic tie-breaking** pinned to the direction order and LIFO frontier

pub mod config;
pub mod error;
pub mod progress;
pub mod pruning;
pub mod search;
pub mod state;
