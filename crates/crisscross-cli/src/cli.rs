use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "crisscross - arranges a word list into a compact, densely crossed crossword grid.",
    help_template = HELP_TEMPLATE,
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all log output except for errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, global = true, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Set the number of threads used to run search workers.
    /// Defaults to the number of available logical cores.
    #[arg(short = 'j', long, global = true, value_name = "NUM")]
    pub threads: Option<usize>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Search for a crossword layout of the words in a word list.
    Build(BuildArgs),
}

/// Arguments for the `build` subcommand.
#[derive(Args, Debug, Default)]
pub struct BuildArgs {
    // --- Core Arguments ---
    /// Path to the word list, one word per line.
    #[arg(short, long, required = true, value_name = "PATH")]
    pub input: PathBuf,

    /// Where to write the finished layout. Prints to stdout when omitted.
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Path to a configuration file in TOML format.
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    // --- Word List Overrides ---
    /// Use at most this many words, picked at random from the list.
    #[arg(short = 'n', long, value_name = "INT")]
    pub count: Option<usize>,

    /// Drop words shorter than this many letters.
    #[arg(long, value_name = "INT")]
    pub min_length: Option<usize>,

    // --- Search Overrides ---
    /// Seed for the random search. A random seed is drawn and logged when omitted.
    #[arg(short, long, value_name = "INT")]
    pub seed: Option<u64>,

    /// Total number of fill attempts.
    #[arg(short, long, value_name = "INT")]
    pub attempts: Option<usize>,

    /// Number of independent search workers the attempts are split across.
    #[arg(short, long, value_name = "INT")]
    pub workers: Option<usize>,

    /// Stop starting new attempts after this many seconds.
    #[arg(short, long = "time-limit", value_name = "SECS")]
    pub time_limit: Option<u64>,

    /// Set a specific configuration value, overriding the config file.
    /// Can be used multiple times. Example: -S search.max-attempts=5000
    #[arg(short = 'S', long = "set", value_name = "KEY=VALUE", num_args(0..))]
    pub set_values: Vec<String>,
}
