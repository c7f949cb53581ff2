//! # Core Models Module
//!
//! Data structures describing a sequence and its embedding on the square lattice.
//!
//! ## Key Components
//!
//! - [`residue`] - The `H`/`P` residue alphabet and the [`residue::Sequence`] newtype
//! - [`lattice`] - Placed residues ([`lattice::Point`]) and the four lattice [`lattice::Direction`]s
//! - [`walk`] - Self-avoiding walks stored as handles into a shared [`walk::WalkArena`]
//! - [`ids`] - Stable identifiers for arena nodes
//!
//! ## Usage
//!
//! ```
//! use hpfold::core::models::lattice::Direction;
//! use hpfold::core::models::residue::Residue;
//! use hpfold::core::models::walk::WalkArena;
//!
//! let mut arena = WalkArena::new();
//! let seed = arena.seed(Residue::Hydrophobic, Residue::Polar);
//! let bent = arena.step(seed, Residue::Polar, Direction::East).unwrap();
//!
//! assert_eq!(bent.len(), 3);
//! assert!(arena.occupies(bent, 1, 1));
//! ```

pub mod ids;
pub mod lattice;
pub mod residue;
pub mod walk;
