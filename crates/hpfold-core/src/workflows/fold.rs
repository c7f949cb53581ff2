use crate::core::models::lattice::is_valid_walk;
use crate::core::models::residue::Sequence;
use crate::core::scoring::Scorer;
use crate::engine::config::SearchConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search;
use crate::engine::state::SearchResult;
use std::time::{Duration, Instant};
use tracing::{info, instrument};

#[derive(Debug, Clone)]
pub struct FoldReport {
    pub sequence: Sequence,
    pub result: SearchResult,
    pub elapsed: Duration,
}

#[instrument(skip_all, name = "fold_workflow", fields(sequence = %sequence))]
pub fn run(
    sequence: &Sequence,
    config: &SearchConfig,
    reporter: &ProgressReporter,
) -> Result<FoldReport, EngineError> {
    info!(
        policy = ?config.contact_policy,
        bound_pruning = config.bound_pruning,
        "Starting fold search."
    );

    let (result, elapsed) = reporter.phase("Folding", || {
        let started = Instant::now();
        let result = search::run(sequence, config);
        (result, started.elapsed())
    });

    validate(sequence, config, &result)?;

    reporter.report(Progress::Message(format!(
        "Best score {} after {} nodes",
        result.score, result.stats.nodes_expanded
    )));
    info!(
        score = result.score,
        elapsed_ms = elapsed.as_millis() as u64,
        "Fold search complete."
    );

    Ok(FoldReport {
        sequence: sequence.clone(),
        result,
        elapsed,
    })
}

fn validate(
    sequence: &Sequence,
    config: &SearchConfig,
    result: &SearchResult,
) -> Result<(), EngineError> {
    if result.len() != sequence.len() {
        return Err(EngineError::InvalidFold {
            reason: format!(
                "walk has {} points for a sequence of {} residues",
                result.len(),
                sequence.len()
            ),
        });
    }
    if !is_valid_walk(&result.points) {
        return Err(EngineError::InvalidFold {
            reason: "walk is not a connected self-avoiding path".to_string(),
        });
    }
    let rescored = Scorer::new(config.contact_policy).count_adjacent_pairs(&result.points);
    if rescored != result.score {
        return Err(EngineError::InvalidFold {
            reason: format!(
                "reported score {} but the walk scores {}",
                result.score, rescored
            ),
        });
    }
    Ok(())
}
