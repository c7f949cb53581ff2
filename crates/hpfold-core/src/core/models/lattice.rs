use super::residue::Residue;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A residue placed at integer coordinates on the square lattice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub residue: Residue,
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(residue: Residue, x: i32, y: i32) -> Self {
        Self { residue, x, y }
    }

    pub fn manhattan_distance(&self, other: &Point) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    #[inline]
    pub fn is_adjacent_to(&self, other: &Point) -> bool {
        self.manhattan_distance(other) == 1
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    East,  // +x
    North, // +y
    West,  // -x
    South, // -y
}

impl Direction {
    /// Expansion order of the search. Children are pushed in this order and popped in reverse.
    pub const ALL: [Direction; 4] = [
        Direction::East,
        Direction::North,
        Direction::West,
        Direction::South,
    ];

    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::East => (1, 0),
            Direction::North => (0, 1),
            Direction::West => (-1, 0),
            Direction::South => (0, -1),
        }
    }
}

/// Returns true when consecutive points are lattice neighbors and no site is visited twice.
pub fn is_valid_walk(points: &[Point]) -> bool {
    let connected = points.windows(2).all(|pair| pair[0].is_adjacent_to(&pair[1]));
    let mut seen = HashSet::with_capacity(points.len());
    let self_avoiding = points.iter().all(|p| seen.insert((p.x, p.y)));
    connected && self_avoiding
}
