use crate::cli::EnumerateArgs;
use crate::config;
use crate::error::Result;
use crate::utils::progress::CliProgressHandler;
use hpfold::core::io::grid;
use hpfold::engine::progress::ProgressReporter;
use hpfold::workflows::{self, enumerate::EnumerationResult};
use indicatif::HumanDuration;
use std::time::Instant;
use tracing::info;

const GRID_GAP: usize = 4;

pub fn run(args: EnumerateArgs, quiet: bool) -> Result<()> {
    let enumerate_config = config::build_enumerate_config(&args)?;
    info!(
        length = enumerate_config.sequence_length,
        keep_best = enumerate_config.keep_best,
        threads = rayon::current_num_threads(),
        "Starting enumeration."
    );

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());

    let started = Instant::now();
    let result = workflows::enumerate::run(&enumerate_config, &reporter)?;
    let elapsed = started.elapsed();

    for line in format_summary(&result) {
        println!("{}", line);
    }
    println!("elapsed: {}", HumanDuration(elapsed));
    Ok(())
}

pub fn format_summary(result: &EnumerationResult) -> Vec<String> {
    let mut lines = vec![
        format!("sequence length: {}", result.sequence_length),
        format!("sequences searched: {}", result.sequences_searched),
        format!("total score: {}", result.total_score),
        format!("max score: {}", result.max_score),
        format!("mean score: {:.3}", result.mean_score()),
        "histogram:".to_string(),
    ];
    lines.extend(
        result
            .histogram
            .iter()
            .map(|(score, count)| format!("  {:>3}: {}", score, count)),
    );

    if result.best.is_empty() {
        return lines;
    }

    lines.push(String::new());
    lines.push(format!("best folds ({} shown):", result.best.len()));

    // Label each grid with its sequence, padded to the grid's width.
    let grids: Vec<Vec<String>> = result
        .best
        .iter()
        .map(|fold| {
            let rows = grid::render(&fold.result.points);
            let label = fold.sequence.to_string();
            let width = rows
                .iter()
                .map(|r| r.chars().count())
                .chain(std::iter::once(label.len()))
                .max()
                .unwrap_or(0);
            std::iter::once(label)
                .chain(rows)
                .map(|row| format!("{:<width$}", row, width = width))
                .collect()
        })
        .collect();
    lines.extend(grid::render_side_by_side(&grids, GRID_GAP));
    lines
}
