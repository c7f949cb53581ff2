use clap::{Args, Parser, Subcommand, ValueEnum};
use hpfold::core::scoring::ContactPolicy;
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "hpfold - exact folding of HP sequences on the 2D square lattice.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output and progress display
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used by `enumerate`.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Find the best lattice fold of a single H/P sequence.
    Fold(FoldArgs),
    /// Fold every H/P sequence of a given length and summarize the optimal scores.
    Enumerate(EnumerateArgs),
}

/// Search options shared by every subcommand.
#[derive(Args, Debug, Clone, Default)]
pub struct SearchArgs {
    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Which adjacent H-H pairs count towards the score, overriding the config file.
    #[arg(short, long, value_enum, value_name = "POLICY")]
    pub policy: Option<PolicyArg>,

    /// Disable upper-bound pruning. The result is unchanged; only slower.
    #[arg(long)]
    pub no_bound_pruning: bool,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.contact-policy=inclusive
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE")]
    pub set_values: Vec<String>,
}

/// Arguments for the `fold` subcommand.
#[derive(Args, Debug, Clone)]
pub struct FoldArgs {
    /// The sequence to fold, e.g. `HPPHHPH`. Several arguments are concatenated.
    #[arg(required = true, value_name = "SEQUENCE")]
    pub sequence: Vec<String>,

    /// Print only the score, without drawing the fold.
    #[arg(long)]
    pub no_render: bool,

    #[command(flatten)]
    pub search: SearchArgs,
}

/// Arguments for the `enumerate` subcommand.
#[derive(Args, Debug, Clone)]
pub struct EnumerateArgs {
    /// Length of the sequences to enumerate (2^N sequences are folded).
    #[arg(short = 'n', long, required = true, value_name = "N")]
    pub length: usize,

    /// Draw up to this many of the best-scoring folds, overriding the config file.
    #[arg(long, value_name = "INT")]
    pub show_best: Option<usize>,

    #[command(flatten)]
    pub search: SearchArgs,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PolicyArg {
    /// Count only contacts between residues that are not chain neighbors.
    NonConsecutive,
    /// Count every adjacent H-H pair, chain bonds included.
    Inclusive,
}

impl From<PolicyArg> for ContactPolicy {
    fn from(arg: PolicyArg) -> Self {
        match arg {
            PolicyArg::NonConsecutive => ContactPolicy::NonConsecutive,
            PolicyArg::Inclusive => ContactPolicy::Inclusive,
        }
    }
}
