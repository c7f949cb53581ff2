use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Index;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Residue {
    Hydrophobic, // H
    Polar,       // P
}

impl Residue {
    pub fn from_char(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'H' => Some(Self::Hydrophobic),
            'P' => Some(Self::Polar),
            _ => None,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Self::Hydrophobic => 'H',
            Self::Polar => 'P',
        }
    }

    pub fn is_hydrophobic(self) -> bool {
        self == Self::Hydrophobic
    }
}

impl fmt::Display for Residue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum SequenceParseError {
    #[error("Invalid residue '{symbol}' at position {position}; expected 'H' or 'P'")]
    InvalidResidue { symbol: char, position: usize },
}

/// An ordered chain of residues, the input to every fold.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Sequence {
    residues: Vec<Residue>,
}

impl Sequence {
    pub fn new(residues: Vec<Residue>) -> Self {
        Self { residues }
    }

    /// Builds the sequence encoded in the low `len` bits of `bits`.
    ///
    /// The most significant of those bits is residue 0; a set bit is `H`. Counting
    /// `bits` from `0` to `2^len - 1` therefore lists sequences in lexicographic order
    /// with `P < H`.
    pub fn from_bits(bits: u64, len: usize) -> Self {
        let residues = (0..len)
            .map(|i| {
                if (bits >> (len - 1 - i)) & 1 == 1 {
                    Residue::Hydrophobic
                } else {
                    Residue::Polar
                }
            })
            .collect();
        Self { residues }
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn get(&self, index: usize) -> Option<Residue> {
        self.residues.get(index).copied()
    }

    pub fn count_of(&self, label: Residue) -> usize {
        self.residues.iter().filter(|&&r| r == label).count()
    }
}

impl Index<usize> for Sequence {
    type Output = Residue;

    fn index(&self, index: usize) -> &Self::Output {
        &self.residues[index]
    }
}

impl FromStr for Sequence {
    type Err = SequenceParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let residues = s
            .chars()
            .enumerate()
            .filter(|(_, c)| !c.is_ascii_whitespace())
            .map(|(position, symbol)| {
                Residue::from_char(symbol)
                    .ok_or(SequenceParseError::InvalidResidue { symbol, position })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { residues })
    }
}

impl fmt::Display for Sequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for residue in &self.residues {
            write!(f, "{}", residue)?;
        }
        Ok(())
    }
}
