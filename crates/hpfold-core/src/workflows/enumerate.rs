use crate::core::models::residue::Sequence;
use crate::engine::config::EnumerateConfig;
use crate::engine::error::EngineError;
use crate::engine::progress::{Progress, ProgressReporter};
use crate::engine::search;
use crate::engine::state::SearchResult;
use std::collections::BTreeMap;
use tracing::{info, instrument};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[derive(Debug, Clone)]
pub struct ScoredFold {
    pub sequence: Sequence,
    pub result: SearchResult,
}

#[derive(Debug, Clone)]
pub struct EnumerationResult {
    pub sequence_length: usize,
    pub sequences_searched: u64,
    pub total_score: u64,
    pub max_score: u32,
    /// Number of sequences reaching each optimal score.
    pub histogram: BTreeMap<u32, u64>,
    /// The first `keep_best` sequences (in enumeration order) reaching `max_score`.
    pub best: Vec<ScoredFold>,
}

impl EnumerationResult {
    pub fn mean_score(&self) -> f64 {
        if self.sequences_searched == 0 {
            0.0
        } else {
            self.total_score as f64 / self.sequences_searched as f64
        }
    }
}

/// Every sequence of `length` residues, in lexicographic order with `P < H`.
pub fn all_sequences(length: usize) -> impl Iterator<Item = Sequence> {
    (0..1u64 << length).map(move |bits| Sequence::from_bits(bits, length))
}

/// Folds all `2^n` sequences of the configured length and aggregates their optimal scores.
///
/// Each sequence is an independent search; with the `parallel` feature they are spread
/// over the rayon pool. Scores are collected in enumeration order, so the result does not
/// depend on scheduling.
#[instrument(skip_all, name = "enumerate_workflow", fields(len = config.sequence_length))]
pub fn run(
    config: &EnumerateConfig,
    reporter: &ProgressReporter,
) -> Result<EnumerationResult, EngineError> {
    let length = config.sequence_length;
    let count = 1u64 << length;

    info!(sequences = count, "Folding every sequence.");

    let score_of = |bits: u64| {
        let score = search::run(&Sequence::from_bits(bits, length), &config.search).score;
        reporter.report(Progress::TaskIncrement);
        score
    };

    let scores: Vec<u32> = reporter.phase("Enumerating sequences", || {
        reporter.task(count, || {
            #[cfg(not(feature = "parallel"))]
            let scores: Vec<u32> = (0..count).map(score_of).collect();

            #[cfg(feature = "parallel")]
            let scores: Vec<u32> = (0..count).into_par_iter().map(score_of).collect();

            scores
        })
    });

    let mut histogram = BTreeMap::new();
    for &score in &scores {
        *histogram.entry(score).or_insert(0u64) += 1;
    }
    let total_score = scores.iter().map(|&s| u64::from(s)).sum();
    let max_score = scores.iter().copied().max().unwrap_or(0);

    let best = if config.keep_best > 0 {
        reporter.phase("Folding best sequences", || {
            scores
                .iter()
                .enumerate()
                .filter(|&(_, &score)| score == max_score)
                .take(config.keep_best)
                .map(|(bits, _)| {
                    let sequence = Sequence::from_bits(bits as u64, length);
                    let result = search::run(&sequence, &config.search);
                    ScoredFold { sequence, result }
                })
                .collect()
        })
    } else {
        Vec::new()
    };

    info!(
        max_score,
        total_score, "Enumeration of length-{} sequences complete.", length
    );

    Ok(EnumerationResult {
        sequence_length: length,
        sequences_searched: count,
        total_score,
        max_score,
        histogram,
        best,
    })
}
