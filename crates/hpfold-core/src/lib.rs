//! # hpfold Core Library
//!
//! Exact folding of HP (hydrophobic/polar) sequences on the two-dimensional square lattice.
//! Given a sequence of `H` and `P` residues, the library finds a self-avoiding embedding
//! that maximizes the number of lattice contacts between `H` residues.
//!
//! ## Architectural Philosophy
//!
//! The library follows a three-layer architecture:
//!
//! - **[`core`]: The Foundation.** Residues, sequences, lattice points, the arena-backed
//!   `LatticeWalk`, the contact `Scorer`, and the ASCII grid renderer.
//!
//! - **[`engine`]: The Logic Core.** The branch-and-bound `search`, the `pruning` oracle
//!   that cuts branches which can no longer improve the score, configuration, progress
//!   reporting and error types.
//!
//! - **[`workflows`]: The Public API.** Complete procedures built on the engine: folding a
//!   single sequence, and enumerating every sequence of a given length.

pub mod core;
pub mod engine;
pub mod workflows;
