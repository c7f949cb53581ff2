use super::models::lattice::Point;
use super::models::residue::Residue;
use super::models::walk::{LatticeWalk, WalkArena};
use itertools::Itertools;
use serde::{Deserialize, Serialize};

/// Which lattice-adjacent pairs count as contacts.
///
/// Residues `i` and `i + 1` are always lattice neighbors, so counting them only adds a
/// constant per sequence. `NonConsecutive` is the standard HP energy; `Inclusive` counts
/// every adjacent same-label pair, including chain bonds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ContactPolicy {
    #[default]
    NonConsecutive,
    Inclusive,
}

impl ContactPolicy {
    #[inline]
    pub fn counts_pair(self, i: usize, j: usize) -> bool {
        match self {
            ContactPolicy::NonConsecutive => i.abs_diff(j) > 1,
            ContactPolicy::Inclusive => true,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scorer {
    label: Residue,
    policy: ContactPolicy,
}

impl Scorer {
    /// A scorer rewarding `H`-`H` contacts.
    pub fn new(policy: ContactPolicy) -> Self {
        Self::with_label(Residue::Hydrophobic, policy)
    }

    pub fn with_label(label: Residue, policy: ContactPolicy) -> Self {
        Self { label, policy }
    }

    pub fn label(&self) -> Residue {
        self.label
    }

    pub fn policy(&self) -> ContactPolicy {
        self.policy
    }

    pub fn count_adjacent_pairs(&self, points: &[Point]) -> u32 {
        points
            .iter()
            .enumerate()
            .filter(|(_, p)| p.residue == self.label)
            .tuple_combinations()
            .filter(|((i, a), (j, b))| self.policy.counts_pair(*i, *j) && a.is_adjacent_to(b))
            .count() as u32
    }

    /// Contacts between the last point of `walk` and every earlier point.
    ///
    /// Summed over all prefixes of a walk this equals [`Scorer::count_adjacent_pairs`]
    /// on the whole walk.
    pub fn tip_contacts(&self, arena: &WalkArena, walk: LatticeWalk) -> u32 {
        let tip = arena.last(walk);
        if tip.residue != self.label {
            return 0;
        }
        let tip_index = walk.len() - 1;
        arena
            .points_rev(walk)
            .enumerate()
            .skip(1)
            .filter(|(back, p)| {
                p.residue == self.label
                    && self.policy.counts_pair(tip_index - back, tip_index)
                    && p.is_adjacent_to(&tip)
            })
            .count() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::lattice::Direction;
    use Residue::{Hydrophobic as H, Polar as P};

    fn line(labels: &[Residue]) -> Vec<Point> {
        labels
            .iter()
            .enumerate()
            .map(|(i, &r)| Point::new(r, 0, i as i32))
            .collect()
    }

    #[test]
    fn straight_line_has_no_non_consecutive_contacts() {
        let scorer = Scorer::new(ContactPolicy::NonConsecutive);
        assert_eq!(scorer.count_adjacent_pairs(&line(&[H, H, H])), 0);
    }

    #[test]
    fn inclusive_policy_counts_chain_bonds() {
        let scorer = Scorer::new(ContactPolicy::Inclusive);
        assert_eq!(scorer.count_adjacent_pairs(&line(&[H, H])), 1);
        assert_eq!(scorer.count_adjacent_pairs(&line(&[H, H, H])), 2);
        assert_eq!(scorer.count_adjacent_pairs(&line(&[H, P, H])), 0);
    }

    #[test]
    fn u_shape_closes_a_contact_between_ends() {
        let u = vec![
            Point::new(H, 0, 0),
            Point::new(P, 0, 1),
            Point::new(P, 1, 1),
            Point::new(H, 1, 0),
        ];
        assert_eq!(
            Scorer::new(ContactPolicy::NonConsecutive).count_adjacent_pairs(&u),
            1
        );
        assert_eq!(
            Scorer::new(ContactPolicy::Inclusive).count_adjacent_pairs(&u),
            1
        );
    }

    #[test]
    fn label_selects_which_residues_are_rewarded() {
        let u = vec![
            Point::new(P, 0, 0),
            Point::new(H, 0, 1),
            Point::new(H, 1, 1),
            Point::new(P, 1, 0),
        ];
        let polar = Scorer::with_label(P, ContactPolicy::NonConsecutive);
        assert_eq!(polar.count_adjacent_pairs(&u), 1);
        assert_eq!(
            Scorer::new(ContactPolicy::NonConsecutive).count_adjacent_pairs(&u),
            0
        );
    }

    #[test]
    fn empty_and_single_point_walks_score_zero() {
        let scorer = Scorer::new(ContactPolicy::Inclusive);
        assert_eq!(scorer.count_adjacent_pairs(&[]), 0);
        assert_eq!(scorer.count_adjacent_pairs(&line(&[H])), 0);
    }

    #[test]
    fn tip_contacts_sum_to_full_count() {
        for policy in [ContactPolicy::NonConsecutive, ContactPolicy::Inclusive] {
            let scorer = Scorer::new(policy);
            let mut arena = WalkArena::new();
            let mut walk = arena.seed(H, H);
            let mut running = scorer.tip_contacts(&arena, walk);
            for (residue, dir) in [
                (P, Direction::East),
                (H, Direction::South),
                (H, Direction::South),
                (H, Direction::West),
                (H, Direction::West),
                (H, Direction::North),
            ] {
                walk = arena.step(walk, residue, dir).unwrap();
                running += scorer.tip_contacts(&arena, walk);
            }
            assert_eq!(running, scorer.count_adjacent_pairs(&arena.points(walk)));
        }
    }
}
