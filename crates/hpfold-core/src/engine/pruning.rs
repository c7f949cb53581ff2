use crate::core::models::lattice::Direction;
use crate::core::models::residue::Sequence;
use crate::core::models::walk::{LatticeWalk, WalkArena};
use crate::core::scoring::{ContactPolicy, Scorer};
use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum FillError {
    #[error("No self-avoiding completion exists for a walk of length {from} (target {target})")]
    NoCompletion { from: usize, target: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeState {
    /// Rewarded residues are still to be placed; the node branches.
    Expandable,
    /// Nothing left can add a contact; any completion scores the same.
    Exhausted,
}

/// Per-sequence pruning decisions for one search.
#[derive(Debug, Clone)]
pub struct PruningOracle<'a> {
    sequence: &'a Sequence,
    // remaining_rewarded[k]: rewarded residues at index >= k
    remaining_rewarded: Vec<usize>,
    // future_gain[k]: upper bound on contacts residues k.. can still add
    future_gain: Vec<u32>,
}

impl<'a> PruningOracle<'a> {
    pub fn new(sequence: &'a Sequence, scorer: &Scorer) -> Self {
        let n = sequence.len();
        let label = scorer.label();
        let mut remaining_rewarded = vec![0; n + 1];
        let mut future_gain = vec![0; n + 1];

        for i in (0..n).rev() {
            remaining_rewarded[i] = remaining_rewarded[i + 1] + usize::from(sequence[i] == label);
            future_gain[i] = future_gain[i + 1] + Self::residue_gain(sequence, scorer, i);
        }

        Self {
            sequence,
            remaining_rewarded,
            future_gain,
        }
    }

    /// Most contacts residue `i` can form with residues placed before it.
    ///
    /// Of its four lattice neighbors one holds residue `i - 1` and, unless `i` is last,
    /// one is reserved for residue `i + 1`.
    fn residue_gain(sequence: &Sequence, scorer: &Scorer, i: usize) -> u32 {
        let label = scorer.label();
        if sequence[i] != label {
            return 0;
        }
        let non_bonded = match i {
            0 | 1 => 0,
            _ if i + 1 == sequence.len() => 3,
            _ => 2,
        };
        let bonded = match scorer.policy() {
            ContactPolicy::Inclusive if i > 0 && sequence[i - 1] == label => 1,
            _ => 0,
        };
        non_bonded + bonded
    }

    pub fn has_remaining_reward_potential(&self, walk: LatticeWalk) -> bool {
        self.remaining_rewarded
            .get(walk.len())
            .is_some_and(|&count| count > 0)
    }

    pub fn classify(&self, walk: LatticeWalk) -> NodeState {
        if self.has_remaining_reward_potential(walk) {
            NodeState::Expandable
        } else {
            NodeState::Exhausted
        }
    }

    /// Optimistic number of contacts still obtainable after `walk`.
    pub fn max_future_gain(&self, walk: LatticeWalk) -> u32 {
        self.future_gain.get(walk.len()).copied().unwrap_or(0)
    }

    /// Completes `walk` to full length with the remaining residues.
    ///
    /// Runs a depth-first search over placements with the same direction order and stack
    /// discipline as the main search and returns the first complete walk. The input handle
    /// stays owned by the caller; the returned handle must be released separately.
    pub fn fill_remainder(
        &self,
        arena: &mut WalkArena,
        walk: LatticeWalk,
    ) -> Result<LatticeWalk, FillError> {
        let target = self.sequence.len();
        let mut stack = vec![arena.retain(walk)];

        while let Some(current) = stack.pop() {
            if current.len() >= target {
                for abandoned in stack.drain(..) {
                    arena.release(abandoned);
                }
                return Ok(current);
            }

            let residue = self.sequence[current.len()];
            for direction in Direction::ALL {
                if let Ok(child) = arena.step(current, residue, direction) {
                    stack.push(child);
                }
            }
            arena.release(current);
        }

        Err(FillError::NoCompletion {
            from: walk.len(),
            target,
        })
    }
}
