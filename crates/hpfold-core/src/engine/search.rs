use super::config::SearchConfig;
use super::pruning::{NodeState, PruningOracle};
use super::state::{BestFold, SearchResult, SearchStats};
use crate::core::models::lattice::{Direction, Point};
use crate::core::models::residue::Sequence;
use crate::core::models::walk::{LatticeWalk, PlacementError, WalkArena};
use crate::core::scoring::Scorer;
use tracing::{debug, instrument, trace};

/// A partial walk awaiting expansion, with the contacts it has already made.
#[derive(Debug, Clone, Copy)]
struct Frame {
    walk: LatticeWalk,
    contacts: u32,
}

/// Finds the highest-scoring self-avoiding fold of `sequence`.
///
/// Sequences shorter than four residues admit no folding choice and are laid out on a
/// straight line along `+y`. Longer sequences are searched exhaustively from the seed bond
/// `(0,0) -> (0,1)`: frontier entries are popped last-in first-out, children are pushed in
/// [`Direction::ALL`] order, and a complete walk replaces the incumbent only when it scores
/// strictly higher. Among equal optima the first one reached in that order is returned.
#[instrument(skip_all, name = "fold_search", fields(len = sequence.len()))]
pub fn run(sequence: &Sequence, config: &SearchConfig) -> SearchResult {
    let scorer = Scorer::new(config.contact_policy);

    if sequence.len() <= 3 {
        return straight_line(sequence, &scorer);
    }

    let oracle = PruningOracle::new(sequence, &scorer);
    let mut arena = WalkArena::new();
    let mut stats = SearchStats::default();
    let mut best = BestFold::default();

    let seed = arena.seed(sequence[0], sequence[1]);
    let seed_contacts = scorer.tip_contacts(&arena, seed);
    let seed_points = arena.points(seed);
    let mut frontier = vec![Frame {
        walk: seed,
        contacts: seed_contacts,
    }];

    while let Some(frame) = frontier.pop() {
        stats.nodes_expanded += 1;

        if frame.walk.len() == sequence.len() {
            stats.complete_walks += 1;
            if best.improves(frame.contacts) {
                debug!(score = frame.contacts, "New best fold found.");
                best.submit(arena.points(frame.walk), frame.contacts);
            }
            arena.release(frame.walk);
            continue;
        }

        if config.bound_pruning {
            let ceiling = frame.contacts + oracle.max_future_gain(frame.walk);
            if best.score().is_some_and(|score| ceiling <= score) {
                stats.bound_prunes += 1;
                arena.release(frame.walk);
                continue;
            }
        }

        match oracle.classify(frame.walk) {
            NodeState::Expandable => {
                let residue = sequence[frame.walk.len()];
                let mut children = 0;
                for direction in Direction::ALL {
                    match arena.step(frame.walk, residue, direction) {
                        Ok(child) => {
                            let contacts = frame.contacts + scorer.tip_contacts(&arena, child);
                            frontier.push(Frame {
                                walk: child,
                                contacts,
                            });
                            children += 1;
                        }
                        Err(PlacementError::Occupied { .. }) => stats.occupied_rejections += 1,
                    }
                }
                if children == 0 {
                    stats.dead_ends += 1;
                }
            }
            NodeState::Exhausted => match oracle.fill_remainder(&mut arena, frame.walk) {
                Ok(filled) => {
                    stats.tail_fills += 1;
                    frontier.push(Frame {
                        walk: filled,
                        contacts: frame.contacts,
                    });
                }
                Err(e) => {
                    trace!(error = %e, "Discarding branch without completion.");
                    stats.dead_ends += 1;
                }
            },
        }

        stats.peak_frontier = stats.peak_frontier.max(frontier.len());
        arena.release(frame.walk);
    }

    debug_assert_eq!(arena.live_nodes(), 0);

    let (points, score) = best
        .into_inner()
        .unwrap_or((seed_points, seed_contacts));
    debug!(
        score,
        nodes = stats.nodes_expanded,
        complete = stats.complete_walks,
        pruned = stats.bound_prunes,
        "Fold search finished."
    );

    SearchResult {
        points,
        score,
        stats,
    }
}

fn straight_line(sequence: &Sequence, scorer: &Scorer) -> SearchResult {
    let points: Vec<Point> = sequence
        .residues()
        .iter()
        .enumerate()
        .map(|(i, &residue)| Point::new(residue, 0, i as i32))
        .collect();
    let score = scorer.count_adjacent_pairs(&points);
    SearchResult {
        points,
        score,
        stats: SearchStats::default(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::lattice::is_valid_walk;
    use crate::core::models::residue::Residue;
    use crate::core::scoring::ContactPolicy;
    use proptest::prelude::*;
    use std::collections::HashSet;

    fn seq(s: &str) -> Sequence {
        s.parse().unwrap()
    }

    fn config(policy: ContactPolicy, bound_pruning: bool) -> SearchConfig {
        SearchConfig {
            contact_policy: policy,
            bound_pruning,
        }
    }

    fn exclusive() -> SearchConfig {
        config(ContactPolicy::NonConsecutive, true)
    }

    fn inclusive() -> SearchConfig {
        config(ContactPolicy::Inclusive, true)
    }

    /// Plain recursive enumeration of every self-avoiding walk from the seed bond.
    fn brute_force_best(sequence: &Sequence, policy: ContactPolicy) -> u32 {
        fn extend(
            sequence: &Sequence,
            scorer: &Scorer,
            points: &mut Vec<Point>,
            occupied: &mut HashSet<(i32, i32)>,
        ) -> u32 {
            if points.len() == sequence.len() {
                return scorer.count_adjacent_pairs(points);
            }
            let last = points[points.len() - 1];
            let mut best = 0;
            for (dx, dy) in [(1, 0), (0, 1), (-1, 0), (0, -1)] {
                let site = (last.x + dx, last.y + dy);
                if occupied.insert(site) {
                    points.push(Point::new(sequence[points.len()], site.0, site.1));
                    best = best.max(extend(sequence, scorer, points, occupied));
                    points.pop();
                    occupied.remove(&site);
                }
            }
            best
        }

        let scorer = Scorer::new(policy);
        let mut points = vec![
            Point::new(sequence[0], 0, 0),
            Point::new(sequence[1], 0, 1),
        ];
        let mut occupied: HashSet<_> = [(0, 0), (0, 1)].into_iter().collect();
        extend(sequence, &scorer, &mut points, &mut occupied)
    }

    #[test]
    fn empty_sequence_scores_zero() {
        let result = run(&seq(""), &exclusive());
        assert_eq!(result.score, 0);
        assert!(result.is_empty());
    }

    #[test]
    fn single_residue_scores_zero_at_origin() {
        let result = run(&seq("H"), &inclusive());
        assert_eq!(result.score, 0);
        assert_eq!(result.points, vec![Point::new(Residue::Hydrophobic, 0, 0)]);
    }

    #[test]
    fn pair_score_depends_on_policy() {
        assert_eq!(run(&seq("HH"), &exclusive()).score, 0);
        assert_eq!(run(&seq("HH"), &inclusive()).score, 1);
    }

    #[test]
    fn triple_is_laid_out_straight() {
        let result = run(&seq("HHH"), &exclusive());
        assert_eq!(result.score, 0);
        let coords: Vec<_> = result.points.iter().map(|p| (p.x, p.y)).collect();
        assert_eq!(coords, vec![(0, 0), (0, 1), (0, 2)]);

        assert_eq!(run(&seq("HHH"), &inclusive()).score, 2);
    }

    #[test]
    fn hpph_folds_ends_together() {
        let result = run(&seq("HPPH"), &exclusive());
        assert_eq!(result.score, 1);
        assert_eq!(result.len(), 4);
        assert!(is_valid_walk(&result.points));
        assert!(result.points[0].is_adjacent_to(&result.points[3]));
    }

    #[test]
    fn hhpphh_matches_brute_force() {
        let sequence = seq("HHPPHH");
        for policy in [ContactPolicy::NonConsecutive, ContactPolicy::Inclusive] {
            let result = run(&sequence, &config(policy, true));
            assert_eq!(result.score, brute_force_best(&sequence, policy));
        }
        assert_eq!(run(&sequence, &exclusive()).score, 2);
    }

    #[test]
    fn known_benchmark_sequences_match_brute_force() {
        for s in ["HPHPPHHPHH", "HHHHHHHH", "PHPPHPPHHP", "HPPHPPHPPH"] {
            let sequence = seq(s);
            let expected = brute_force_best(&sequence, ContactPolicy::NonConsecutive);
            assert_eq!(run(&sequence, &exclusive()).score, expected, "sequence {}", s);
        }
    }

    #[test]
    fn all_polar_sequence_is_filled_in_one_pass() {
        let result = run(&seq("PPPPPPPP"), &config(ContactPolicy::NonConsecutive, false));
        assert_eq!(result.score, 0);
        assert_eq!(result.len(), 8);
        assert!(is_valid_walk(&result.points));
        assert_eq!(result.stats.tail_fills, 1);
        assert_eq!(result.stats.complete_walks, 1);
    }

    #[test]
    fn bound_pruning_does_not_change_result() {
        for s in ["HPHPPHHPHH", "HHPPHHPPHH", "PHHPHHHPHP"] {
            let sequence = seq(s);
            let pruned = run(&sequence, &config(ContactPolicy::NonConsecutive, true));
            let full = run(&sequence, &config(ContactPolicy::NonConsecutive, false));
            assert_eq!(pruned.score, full.score);
            assert_eq!(pruned.points, full.points);
            assert!(pruned.stats.nodes_expanded <= full.stats.nodes_expanded);
        }
    }

    #[test]
    fn repeated_runs_return_identical_folds() {
        let sequence = seq("HPHHPPHHHP");
        let first = run(&sequence, &exclusive());
        let second = run(&sequence, &exclusive());
        assert_eq!(first, second);
    }

    #[test]
    fn stats_count_every_complete_walk_without_pruning() {
        // Four residues from a fixed seed bond: 3 * 3 = 9 walks, all self-avoiding.
        let result = run(&seq("HPPH"), &config(ContactPolicy::NonConsecutive, false));
        assert_eq!(result.stats.complete_walks, 9);
        assert_eq!(result.stats.dead_ends, 0);
    }

    proptest! {
        #[test]
        fn folds_are_valid_and_beat_straight_line(raw in "[HP]{0,9}") {
            let sequence = seq(&raw);
            let scorer = Scorer::new(ContactPolicy::NonConsecutive);
            let result = run(&sequence, &exclusive());

            prop_assert_eq!(result.len(), sequence.len());
            prop_assert!(is_valid_walk(&result.points));
            for (point, &residue) in result.points.iter().zip(sequence.residues()) {
                prop_assert_eq!(point.residue, residue);
            }
            prop_assert_eq!(result.score, scorer.count_adjacent_pairs(&result.points));

            let straight = straight_line(&sequence, &scorer);
            prop_assert!(result.score >= straight.score);
        }

        #[test]
        fn inclusive_score_exceeds_exclusive_by_chain_bonds(raw in "[HP]{4,9}") {
            let sequence = seq(&raw);
            let bonds = sequence
                .residues()
                .windows(2)
                .filter(|w| w[0] == Residue::Hydrophobic && w[1] == Residue::Hydrophobic)
                .count() as u32;
            let a = run(&sequence, &exclusive()).score;
            let b = run(&sequence, &inclusive()).score;
            prop_assert_eq!(b, a + bonds);
        }
    }
}
