//! # Core Module
//!
//! Stateless building blocks of the HP lattice model.
//!
//! - **Lattice Representation** ([`models`]) - Residues, sequences, lattice points and walks
//! - **Contact Scoring** ([`scoring`]) - Counting same-label lattice contacts under a [`scoring::ContactPolicy`]
//! - **Output** ([`io`]) - Rendering folded walks onto character grids

pub mod io;
pub mod models;
pub mod scoring;
