//! Self-avoiding walks with shared prefixes.
//!
//! A [`LatticeWalk`] is a small `Copy` handle naming the last placed point of a walk and
//! its length. The points themselves live in a [`WalkArena`] as nodes linked to their
//! predecessor, so extending a walk allocates one node and never copies the prefix. A
//! walk is never mutated after creation: [`WalkArena::try_place`] returns a new handle
//! and leaves the parent intact.
//!
//! Nodes are reference counted. Every handle returned by the arena owns one count on its
//! tip node and every node owns one count on its parent. Callers hand a walk back with
//! [`WalkArena::release`] once it is no longer needed, which frees the unshared suffix of
//! the walk.

use super::ids::NodeId;
use super::lattice::{Direction, Point};
use super::residue::Residue;
use slotmap::SlotMap;
use std::iter;
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    #[error("Lattice site ({x}, {y}) is already occupied")]
    Occupied { x: i32, y: i32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LatticeWalk {
    tip: NodeId,
    len: usize,
}

impl LatticeWalk {
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false; every walk holds at least the two seed points.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

#[derive(Debug, Clone)]
struct Node {
    point: Point,
    parent: Option<NodeId>,
    refs: u32,
}

/// Storage for every walk of one search. Handles are only meaningful for the arena that
/// produced them.
#[derive(Debug, Default)]
pub struct WalkArena {
    nodes: SlotMap<NodeId, Node>,
}

impl WalkArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Places `first` at `(0, 0)` and `second` at `(0, 1)`.
    ///
    /// Fixing the first bond removes the rotated copies of every fold; mirror images
    /// across the `y` axis remain.
    pub fn seed(&mut self, first: Residue, second: Residue) -> LatticeWalk {
        let root = self.nodes.insert(Node {
            point: Point::new(first, 0, 0),
            parent: None,
            refs: 1,
        });
        let tip = self.nodes.insert(Node {
            point: Point::new(second, 0, 1),
            parent: Some(root),
            refs: 1,
        });
        LatticeWalk { tip, len: 2 }
    }

    pub fn try_place(
        &mut self,
        walk: LatticeWalk,
        residue: Residue,
        dx: i32,
        dy: i32,
    ) -> Result<LatticeWalk, PlacementError> {
        let last = self.last(walk);
        let (x, y) = (last.x + dx, last.y + dy);
        if self.occupies(walk, x, y) {
            return Err(PlacementError::Occupied { x, y });
        }

        self.nodes[walk.tip].refs += 1;
        let tip = self.nodes.insert(Node {
            point: Point::new(residue, x, y),
            parent: Some(walk.tip),
            refs: 1,
        });
        Ok(LatticeWalk {
            tip,
            len: walk.len + 1,
        })
    }

    pub fn step(
        &mut self,
        walk: LatticeWalk,
        residue: Residue,
        direction: Direction,
    ) -> Result<LatticeWalk, PlacementError> {
        let (dx, dy) = direction.delta();
        self.try_place(walk, residue, dx, dy)
    }

    pub fn occupies(&self, walk: LatticeWalk, x: i32, y: i32) -> bool {
        self.points_rev(walk).any(|p| p.x == x && p.y == y)
    }

    pub fn last(&self, walk: LatticeWalk) -> Point {
        self.nodes[walk.tip].point
    }

    pub fn point_at(&self, walk: LatticeWalk, index: usize) -> Option<Point> {
        if index >= walk.len {
            return None;
        }
        self.points_rev(walk).nth(walk.len - 1 - index)
    }

    /// Points from the tip back to residue 0.
    pub fn points_rev(&self, walk: LatticeWalk) -> impl Iterator<Item = Point> + '_ {
        iter::successors(self.nodes.get(walk.tip), |node| {
            node.parent.and_then(|id| self.nodes.get(id))
        })
        .map(|node| node.point)
    }

    /// Copies the walk out of the arena in residue order.
    pub fn points(&self, walk: LatticeWalk) -> Vec<Point> {
        let mut points: Vec<Point> = self.points_rev(walk).collect();
        points.reverse();
        points
    }

    /// Returns a second handle to the same walk; both must be released.
    pub fn retain(&mut self, walk: LatticeWalk) -> LatticeWalk {
        self.nodes[walk.tip].refs += 1;
        walk
    }

    pub fn release(&mut self, walk: LatticeWalk) {
        let mut current = Some(walk.tip);
        while let Some(id) = current {
            let Some(node) = self.nodes.get_mut(id) else {
                break;
            };
            node.refs -= 1;
            if node.refs > 0 {
                break;
            }
            current = self.nodes.remove(id).and_then(|node| node.parent);
        }
    }

    pub fn live_nodes(&self) -> usize {
        self.nodes.len()
    }
}
