use crate::cli::FoldArgs;
use crate::config;
use crate::error::Result;
use crate::utils::{parser, progress::CliProgressHandler};
use hpfold::core::io::grid;
use hpfold::engine::progress::ProgressReporter;
use hpfold::workflows::{self, fold::FoldReport};
use tracing::info;

pub fn run(args: FoldArgs, quiet: bool) -> Result<()> {
    let sequence = parser::parse_sequence_args(&args.sequence)?;
    let search_config = config::build_fold_config(&args)?;
    info!(length = sequence.len(), "Folding sequence {}.", sequence);

    let progress_handler = CliProgressHandler::new(quiet);
    let reporter = ProgressReporter::with_callback(progress_handler.get_callback());
    let report = workflows::fold::run(&sequence, &search_config, &reporter)?;

    info!(
        nodes = report.result.stats.nodes_expanded,
        complete = report.result.stats.complete_walks,
        prunes = report.result.stats.bound_prunes,
        "Search statistics."
    );

    for line in format_report(&report, !args.no_render) {
        println!("{}", line);
    }
    Ok(())
}

pub fn format_report(report: &FoldReport, render: bool) -> Vec<String> {
    let mut lines = Vec::new();
    if render {
        lines.extend(grid::render(&report.result.points));
        lines.push(String::new());
    }
    lines.push(format!("score: {}", report.result.score));
    lines.push(format!("elapsed: {:.3?}", report.elapsed));
    lines
}
