use crate::core::models::lattice::Point;
use serde::{Deserialize, Serialize};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Frontier entries popped, complete walks included.
    pub nodes_expanded: u64,
    pub complete_walks: u64,
    pub occupied_rejections: u64,
    pub dead_ends: u64,
    pub tail_fills: u64,
    pub bound_prunes: u64,
    pub peak_frontier: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub points: Vec<Point>,
    pub score: u32,
    pub stats: SearchStats,
}

impl SearchResult {
    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// The incumbent of a running search. Replaced only by a strictly better walk.
#[derive(Debug, Default)]
pub(crate) struct BestFold {
    best: Option<(Vec<Point>, u32)>,
}

impl BestFold {
    pub(crate) fn score(&self) -> Option<u32> {
        self.best.as_ref().map(|(_, score)| *score)
    }

    pub(crate) fn improves(&self, score: u32) -> bool {
        self.score().is_none_or(|best| score > best)
    }

    pub(crate) fn submit(&mut self, points: Vec<Point>, score: u32) {
        self.best = Some((points, score));
    }

    pub(crate) fn into_inner(self) -> Option<(Vec<Point>, u32)> {
        self.best
    }
}
